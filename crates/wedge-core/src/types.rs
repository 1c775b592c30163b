//! Shared types for the wedge subsystem

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an inventory item in the upstream catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The keys the classifier distinguishes
///
/// Anything that is neither a printable character nor a terminator is
/// collapsed into [`Key::Other`]; the classifier treats all of those
/// identically (ignored, buffer untouched).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single printable character
    Char(char),
    /// Enter terminator
    Enter,
    /// Tab terminator
    Tab,
    /// Arrows, function keys, and everything else
    Other,
}

impl Key {
    /// Whether this key finalizes an in-flight scan
    #[must_use]
    pub fn is_terminator(self) -> bool {
        matches!(self, Key::Enter | Key::Tab)
    }
}

/// A raw keystroke as delivered by the input surface
///
/// Ephemeral: produced by the embedding UI and consumed immediately by
/// [`crate::Classifier::step`]. The timestamp is supplied by the
/// producer so the classifier never reads a clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key was pressed
    pub key: Key,
    /// Event time in milliseconds, monotonic within one stream
    pub timestamp_ms: u64,
    /// True while an input method is composing (dead keys, IME)
    pub is_composing: bool,
    /// True if a modifier (Ctrl, Alt, Meta) was held
    pub has_modifier: bool,
}

impl KeyEvent {
    /// Create a plain key event with no composition or modifier flags
    #[must_use]
    pub fn plain(key: Key, timestamp_ms: u64) -> Self {
        Self {
            key,
            timestamp_ms,
            is_composing: false,
            has_modifier: false,
        }
    }
}

/// A recognized scan, extracted from the keystroke stream
///
/// The code is trimmed and at least `min_len` characters long by
/// construction; tokens are handed to resolution once and not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanToken {
    /// The scanned code
    pub code: String,
}

impl ScanToken {
    pub(crate) fn new(code: String) -> Self {
        Self { code }
    }
}

impl fmt::Display for ScanToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// A barcode record owned by the upstream catalog service
///
/// Read-only input to [`crate::build_index`]; the catalog service is
/// the source of truth for these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRecord {
    /// The item this barcode belongs to
    pub item_id: ItemId,
    /// The barcode string as printed on the label
    pub barcode: String,
    /// Whether this is the item's canonical barcode
    pub is_primary: bool,
    /// Whether the record is currently active
    pub active: bool,
}

impl BarcodeRecord {
    /// Create an active, non-primary record
    #[must_use]
    pub fn new(item_id: ItemId, barcode: impl Into<String>) -> Self {
        Self {
            item_id,
            barcode: barcode.into(),
            is_primary: false,
            active: true,
        }
    }

    /// Mark this record as the item's primary barcode
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Mark this record inactive
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

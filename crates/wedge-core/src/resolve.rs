//! Scan token resolution
//!
//! Bridges a recognized [`ScanToken`] to a [`BarcodeIndex`] lookup.
//! Unknown and ambiguous barcodes report identically as [`Resolution::NoMatch`];
//! no downstream consumer currently needs to tell them apart, and the
//! index exposes [`BarcodeIndex::owner_count`] should that change.

use crate::index::BarcodeIndex;
use crate::types::{ItemId, ScanToken};

/// Result of resolving a scan token against the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one item owns this barcode
    Match(ItemId),
    /// Barcode unknown, or owned by more than one item
    NoMatch,
}

impl Resolution {
    /// The matched item id, if any
    #[must_use]
    pub fn item_id(self) -> Option<ItemId> {
        match self {
            Resolution::Match(id) => Some(id),
            Resolution::NoMatch => None,
        }
    }
}

/// Resolve a token to the single item owning its code, if unambiguous
#[must_use]
pub fn resolve(token: &ScanToken, index: &BarcodeIndex) -> Resolution {
    match index.resolve_unique(&token.code) {
        Some(id) => Resolution::Match(id),
        None => Resolution::NoMatch,
    }
}

//! Keystroke-stream classification
//!
//! Separates hardware-scanner bursts from ordinary typing using only
//! timing and terminator keys. The classifier is a two-state machine:
//! `Idle` (empty buffer) and `Accumulating` (non-empty buffer), with
//! the state held explicitly in the [`Classifier`] so the algorithm is
//! decoupled from any live input source.
//!
//! Rules, evaluated per event in arrival order:
//! 1. Composition or modifier events are ignored entirely.
//! 2. A gap above the threshold abandons the in-flight buffer.
//! 3. Enter/Tab finalizes: trim, check minimum length, emit.
//! 4. A printable character appends to the buffer.
//! 5. Anything else is ignored, buffer untouched.

use crate::config::ScanFilterConfig;
use crate::types::{Key, KeyEvent, ScanToken};

/// What a single classifier step decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Event does not participate in classification; let it pass
    Ignored,
    /// Printable character absorbed into the in-flight buffer
    Buffered,
    /// Terminator finalized a buffer too short to be a scan; nothing
    /// emitted, the terminator keeps its default effect
    Discarded,
    /// A scan was recognized. The embedder must suppress the
    /// terminator's default effect on the focused element.
    Scan(ScanToken),
}

impl Outcome {
    /// Whether the embedder should swallow the triggering event
    #[must_use]
    pub fn consumes_event(&self) -> bool {
        matches!(self, Outcome::Scan(_))
    }
}

/// The scan-stream classifier
///
/// Exactly one instance must be active for a given input surface at a
/// time; the buffer and timestamp are exclusive to the instance.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ScanFilterConfig,
    buffer: String,
    last_event_ms: Option<u64>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ScanFilterConfig::default())
    }
}

impl Classifier {
    /// Create a classifier with the given tuning
    #[must_use]
    pub fn new(config: ScanFilterConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
            last_event_ms: None,
        }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> ScanFilterConfig {
        self.config
    }

    /// Whether a scan is currently being accumulated
    #[must_use]
    pub fn is_accumulating(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Clear the buffer and timestamp, returning to `Idle`
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_event_ms = None;
    }

    /// Feed one keystroke through the state machine
    pub fn step(&mut self, event: &KeyEvent) -> Outcome {
        // Composition and shortcut chords must never look like scans.
        // These do not touch the buffer or the timestamp.
        if event.is_composing || event.has_modifier {
            return Outcome::Ignored;
        }

        // A sequence that stalls past the threshold was typed by a
        // human; abandon it before handling this event. An exact-at-
        // threshold gap still counts as part of the same burst.
        if let Some(last) = self.last_event_ms {
            let gap = event.timestamp_ms.saturating_sub(last);
            if gap > self.config.gap_threshold_ms && !self.buffer.is_empty() {
                self.buffer.clear();
            }
        }
        self.last_event_ms = Some(event.timestamp_ms);

        if event.key.is_terminator() {
            return self.finalize();
        }

        match event.key {
            Key::Char(ch) => {
                self.buffer.push(ch);
                Outcome::Buffered
            }
            // Arrows, function keys, etc.
            _ => Outcome::Ignored,
        }
    }

    fn finalize(&mut self) -> Outcome {
        let code = std::mem::take(&mut self.buffer);
        let code = code.trim();
        if code.chars().count() < self.config.min_len {
            return Outcome::Discarded;
        }
        Outcome::Scan(ScanToken::new(code.to_string()))
    }
}

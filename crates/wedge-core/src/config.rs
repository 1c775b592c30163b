//! Tunable parameters for scan classification

use serde::{Deserialize, Serialize};

/// Maximum inter-keystroke interval, in milliseconds, for characters to
/// count as part of the same scan. Hardware scanners emit at sub-10 ms
/// intervals; humans rarely sustain gaps this short.
pub const DEFAULT_GAP_THRESHOLD_MS: u64 = 50;

/// Minimum trimmed length for a finalized buffer to be emitted as a
/// scan token. Shorter sequences are treated as accidental.
pub const DEFAULT_MIN_LEN: usize = 3;

/// Classifier tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFilterConfig {
    /// Maximum allowed gap between consecutive keystrokes (ms)
    pub gap_threshold_ms: u64,
    /// Minimum code length after trimming
    pub min_len: usize,
}

impl Default for ScanFilterConfig {
    fn default() -> Self {
        Self {
            gap_threshold_ms: DEFAULT_GAP_THRESHOLD_MS,
            min_len: DEFAULT_MIN_LEN,
        }
    }
}

impl ScanFilterConfig {
    /// Create a config with the default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the gap threshold
    #[must_use]
    pub fn with_gap_threshold_ms(mut self, ms: u64) -> Self {
        self.gap_threshold_ms = ms;
        self
    }

    /// Override the minimum code length
    #[must_use]
    pub fn with_min_len(mut self, len: usize) -> Self {
        self.min_len = len;
        self
    }
}

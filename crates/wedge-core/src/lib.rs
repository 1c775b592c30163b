//! Wedge Core - barcode scan classification and resolution
//!
//! This crate provides the pure parts of the keyboard-wedge scanner
//! subsystem: a keystroke-stream classifier that separates hardware
//! scanner bursts from ordinary typing, a batch-built barcode index,
//! and unambiguous barcode-to-item resolution.
//!
//! Everything here is synchronous and deterministic. Time arrives
//! inside [`types::KeyEvent`] rather than being read from a clock, so
//! every component is directly unit-testable.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod classify;
pub mod config;
pub mod index;
pub mod resolve;
pub mod types;

pub use classify::{Classifier, Outcome};
pub use config::ScanFilterConfig;
pub use index::{build_index, BarcodeIndex};
pub use resolve::{resolve, Resolution};
pub use types::{BarcodeRecord, ItemId, Key, KeyEvent, ScanToken};

//! Wedge Catalog - async integration around the pure scan core
//!
//! This crate supplies everything the pure `wedge-core` crate keeps out
//! of scope: the [`BarcodeSource`] collaborator trait for bulk record
//! fetches, the [`IndexService`] that rebuilds and atomically swaps the
//! barcode index snapshot, and the [`ScanSession`] that wires keystroke
//! classification to resolution notifications with a scoped
//! attach/detach lifecycle.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod error;
pub mod service;
pub mod session;
pub mod source;

pub use error::{CatalogError, CatalogResult};
pub use service::IndexService;
pub use session::{ResolutionSink, ScanSession, SessionOutcome};
pub use source::BarcodeSource;

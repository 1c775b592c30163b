//! Error types for catalog integration

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while talking to the catalog service
///
/// A failed rebuild never invalidates the previous index snapshot;
/// callers keep resolving against stale-but-valid data until a rebuild
/// succeeds.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The upstream barcode fetch failed
    #[error("barcode fetch failed: {0}")]
    Source(String),
}

impl CatalogError {
    /// Wrap an upstream failure message
    #[must_use]
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }
}

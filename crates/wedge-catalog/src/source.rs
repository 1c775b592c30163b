//! The upstream barcode fetch collaborator

use crate::error::CatalogResult;
use async_trait::async_trait;
use wedge_core::{BarcodeRecord, ItemId};

/// Bulk barcode fetch, supplied by the external catalog service
///
/// Implementations live in calling code (HTTP client, database, test
/// fixture); this crate only consumes the trait. Fetch failures are
/// reported as [`crate::CatalogError::Source`] and leave any existing
/// index snapshot untouched.
#[async_trait]
pub trait BarcodeSource: Send + Sync {
    /// Fetch the barcode records for the given items
    ///
    /// With `active_only` set, implementations must return only records
    /// currently marked active.
    async fn barcode_records(
        &self,
        item_ids: &[ItemId],
        active_only: bool,
    ) -> CatalogResult<Vec<BarcodeRecord>>;
}

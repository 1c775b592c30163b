//! Index rebuild service
//!
//! Owns the live [`BarcodeIndex`] snapshot. Rebuilds are one-shot
//! batch operations (fetch + pure transform) guarded by a generation
//! counter: when rebuilds overlap, only the most recently requested one
//! may publish its result. The snapshot itself is replaced wholesale
//! via [`ArcSwap`], so readers never observe a half-built index.

use crate::error::CatalogResult;
use crate::source::BarcodeSource;
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use wedge_core::{build_index, BarcodeIndex, ItemId};

/// Maintains the current barcode index for a set of catalog items
pub struct IndexService {
    source: Arc<dyn BarcodeSource>,
    snapshot: ArcSwap<BarcodeIndex>,
    generation: AtomicU64,
}

impl std::fmt::Debug for IndexService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexService")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl IndexService {
    /// Create a service over the given record source
    ///
    /// Starts with an empty index; resolution degrades to no-match
    /// until the first successful [`rebuild`](Self::rebuild).
    #[must_use]
    pub fn new(source: Arc<dyn BarcodeSource>) -> Self {
        Self {
            source,
            snapshot: ArcSwap::from_pointee(BarcodeIndex::empty()),
            generation: AtomicU64::new(0),
        }
    }

    /// The current index snapshot
    ///
    /// Cheap to call; the returned `Arc` stays valid even while a
    /// rebuild replaces the live snapshot underneath.
    #[must_use]
    pub fn snapshot(&self) -> Arc<BarcodeIndex> {
        self.snapshot.load_full()
    }

    /// Rebuild the index for `item_ids` from the source
    ///
    /// Returns `Ok(true)` if the fresh index was published, `Ok(false)`
    /// if a newer rebuild was requested while this one was in flight
    /// and its result was therefore discarded. On a fetch error the
    /// previous snapshot remains in effect and the error propagates.
    pub async fn rebuild(&self, item_ids: &[ItemId]) -> CatalogResult<bool> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let records = match self.source.barcode_records(item_ids, true).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(generation, error = %err, "barcode fetch failed, keeping previous index");
                return Err(err);
            }
        };

        let index = build_index(item_ids, &records);

        // The fetch is not cancelled when superseded; its result is
        // simply not applied. The generation compare sits right before
        // the store so the transform above cannot widen the window in
        // which a newer rebuild publishes first.
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "discarding stale rebuild result");
            return Ok(false);
        }

        tracing::info!(
            generation,
            items = item_ids.len(),
            barcodes = index.owners.len(),
            unique = index.unique.len(),
            "published new barcode index"
        );
        self.snapshot.store(Arc::new(index));
        Ok(true)
    }
}

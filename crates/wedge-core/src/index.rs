//! Barcode ownership index
//!
//! A derived, immutable snapshot built wholesale from the catalog's
//! barcode records. Rebuilt from scratch on every upstream change so a
//! concurrent reader can never observe a half-built index.

use crate::types::{BarcodeRecord, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Derived barcode maps for one item set
///
/// Invariants:
/// - `unique` is a strict subset of `owners`: a barcode appears in it
///   iff its owner set has exactly one member.
/// - `counts` has an entry for every known item, including zero.
/// - `owners` values preserve first-seen order and hold no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeIndex {
    /// Canonical barcode per item, at most one entry per item
    pub primary: HashMap<ItemId, String>,
    /// Active barcode count per item, zero entries included
    pub counts: HashMap<ItemId, usize>,
    /// Items owning each barcode, insertion-ordered and deduped
    pub owners: HashMap<String, Vec<ItemId>>,
    /// Barcodes owned by exactly one item
    pub unique: HashMap<String, ItemId>,
}

impl BarcodeIndex {
    /// An index over no items
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the index covers no items and no barcodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty() && self.owners.is_empty()
    }

    /// Number of items owning the given barcode
    #[must_use]
    pub fn owner_count(&self, barcode: &str) -> usize {
        self.owners.get(barcode).map_or(0, Vec::len)
    }

    /// Look up the single owner of a barcode, if unambiguous
    ///
    /// Returns `None` both for unknown barcodes and for barcodes bound
    /// to more than one item.
    #[must_use]
    pub fn resolve_unique(&self, barcode: &str) -> Option<ItemId> {
        self.unique.get(barcode).copied()
    }
}

/// Build the derived index for `item_ids` from the catalog's records
///
/// Pure transform, cannot fail. Inactive records are skipped entirely.
/// Duplicate primary flags for one item resolve first-encountered-wins;
/// later duplicates are ignored without error, which keeps the index
/// usable in the face of duplicate-primary data corruption upstream.
#[must_use]
pub fn build_index(item_ids: &[ItemId], records: &[BarcodeRecord]) -> BarcodeIndex {
    if item_ids.is_empty() {
        return BarcodeIndex::empty();
    }

    let mut index = BarcodeIndex::default();

    // Seed zero counts so no known item is ever absent downstream.
    for id in item_ids {
        index.counts.insert(*id, 0);
    }

    for record in records.iter().filter(|r| r.active) {
        *index.counts.entry(record.item_id).or_insert(0) += 1;

        let owners = index.owners.entry(record.barcode.clone()).or_default();
        if !owners.contains(&record.item_id) {
            owners.push(record.item_id);
        }

        if record.is_primary {
            index
                .primary
                .entry(record.item_id)
                .or_insert_with(|| record.barcode.clone());
        }
    }

    index.unique = index
        .owners
        .iter()
        .filter(|(_, owners)| owners.len() == 1)
        .map(|(barcode, owners)| (barcode.clone(), owners[0]))
        .collect();

    index
}

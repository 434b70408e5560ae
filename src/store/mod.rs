//! Record store: the immutable-per-load vehicle collection.
//!
//! The store is built once from the loaded catalog and is read-only
//! afterwards. Iteration order is load order; every filter and count in
//! `crate::logic` relies on that.

use std::collections::HashMap;

use crate::error::{LoadError, SelectionError};
use crate::state::types::{RecordId, VehicleRecord};

pub mod kv;
pub mod load;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use load::{DataSource, load_records, load_store};

/// Read-only vehicle collection with id lookup.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    /// Records in load order.
    records: Vec<VehicleRecord>,
    /// Position of each id inside `records`.
    by_id: HashMap<RecordId, usize>,
}

impl RecordStore {
    /// What: Build a store from a loaded collection, validating id uniqueness.
    ///
    /// Inputs:
    /// - `records`: Vehicle records in load order
    ///
    /// Output:
    /// - `Ok(RecordStore)`; `Err(LoadError::DuplicateId)` on the first repeated id.
    ///
    /// # Errors
    /// - Returns `LoadError::DuplicateId` when two records share an id.
    pub fn new(records: Vec<VehicleRecord>) -> Result<Self, LoadError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (pos, rec) in records.iter().enumerate() {
            if by_id.insert(rec.id, pos).is_some() {
                return Err(LoadError::DuplicateId(rec.id));
            }
        }
        tracing::debug!(records = records.len(), "[Store] Record store built");
        Ok(Self { records, by_id })
    }

    /// All records in load order.
    #[must_use]
    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&VehicleRecord> {
        self.by_id.get(&id).and_then(|&pos| self.records.get(pos))
    }

    /// What: Look up a record by id, reporting a stale id as an error.
    ///
    /// # Errors
    /// - Returns `SelectionError::NotFound` when `id` is not in the store.
    pub fn require(&self, id: RecordId) -> Result<&VehicleRecord, SelectionError> {
        self.get(id).ok_or(SelectionError::NotFound(id))
    }

    /// Number of records (physical units), including same-name duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records flagged for the featured strip, in load order.
    pub fn featured(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.records.iter().filter(|r| r.featured)
    }
}

//! # Planet Store
//!
//! Exclusive owner of the canonical planet records.
//!
//! Every operation takes the single map lock for the duration of one map
//! access or one snapshot copy and releases it before returning. Callers
//! validate before calling in; the store itself only ever fails with
//! [`StoreError::NotFound`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use uuid::Uuid;

use super::model::PlanetRecord;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("exoplanet not found")]
    NotFound,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Concurrency-safe keyed collection of planet records
#[derive(Debug, Default)]
pub struct PlanetStore {
    records: Mutex<HashMap<String, PlanetRecord>>,
}

impl PlanetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the map lock.
    ///
    /// No operation leaves the map half-written, so a poisoned lock still
    /// guards a consistent map and is recovered.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, PlanetRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a record under a freshly generated id and return that id.
    ///
    /// Any id already on the record is replaced.
    pub fn create(&self, mut record: PlanetRecord) -> String {
        let id = Uuid::new_v4().to_string();
        record.id = id.clone();
        self.lock().insert(id.clone(), record);
        id
    }

    /// Snapshot copy of every record, in no particular order
    pub fn list(&self) -> Vec<PlanetRecord> {
        self.lock().values().cloned().collect()
    }

    /// Fetch a copy of one record
    pub fn get(&self, id: &str) -> StoreResult<PlanetRecord> {
        self.lock().get(id).cloned().ok_or(StoreError::NotFound)
    }

    /// Replace an existing record wholesale. Never inserts.
    pub fn update(&self, id: &str, mut record: PlanetRecord) -> StoreResult<()> {
        record.id = id.to_string();
        let mut records = self.lock();
        match records.get_mut(id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Remove a record
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.lock()
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

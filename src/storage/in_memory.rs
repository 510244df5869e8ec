//! Generic in-memory store backing every resource collection

use crate::core::error::{StoreError, StoreResult};
use crate::core::model::Record;
use crate::core::store::ResourceStore;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory keyed store
///
/// Cloning is cheap and every clone shares the same records. Uses a single
/// RwLock per store for thread-safe access.
#[derive(Debug)]
pub struct InMemoryStore<T: Record> {
    records: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Record> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store holding `records`; later duplicates replace earlier ones
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, IndexMap<String, T>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Poisoned { entity: T::ENTITY })
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, IndexMap<String, T>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Poisoned { entity: T::ENTITY })
    }

    /// Insert a record whose identifier is not stored yet
    ///
    /// The existence check and the insert happen under one write lock.
    pub fn insert_new(&self, record: T) -> StoreResult<T> {
        let mut records = self.write()?;

        if records.contains_key(record.id()) {
            return Err(StoreError::DuplicateKey {
                entity: T::ENTITY,
                id: record.id().to_string(),
            });
        }

        records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    /// Overwrite the record stored under `id`, keeping its position
    ///
    /// The caller is responsible for `record` carrying `id`.
    pub fn replace_existing(&self, id: &str, record: T) -> StoreResult<T> {
        let mut records = self.write()?;

        let slot = records.get_mut(id).ok_or_else(|| StoreError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })?;
        *slot = record.clone();

        Ok(record)
    }

    /// Records matching `predicate`, in insertion order
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> StoreResult<Vec<T>> {
        let records = self.read()?;
        Ok(records.values().filter(|r| predicate(r)).cloned().collect())
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> ResourceStore<T> for InMemoryStore<T> {
    fn get(&self, id: &str) -> StoreResult<Option<T>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    fn list(&self) -> StoreResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn put(&self, record: T) -> StoreResult<()> {
        self.write()?.insert(record.id().to_string(), record);
        Ok(())
    }

    fn remove(&self, id: &str) -> StoreResult<bool> {
        Ok(self.write()?.shift_remove(id).is_some())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    fn clear(&self) -> StoreResult<()> {
        self.write()?.clear();
        Ok(())
    }
}

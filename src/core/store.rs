//! Store trait shared by the item and user collections

use crate::core::error::StoreResult;
use crate::core::model::Record;

/// Keyed collection of records
///
/// Implementations serialize access per store, so a single call never
/// observes a half-applied write.
pub trait ResourceStore<T: Record>: Send + Sync {
    /// Get a record by identifier
    fn get(&self, id: &str) -> StoreResult<Option<T>>;

    /// Whether a record with this identifier is stored
    fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// All records, in insertion order
    fn list(&self) -> StoreResult<Vec<T>>;

    /// Insert or replace a record
    fn put(&self, record: T) -> StoreResult<()>;

    /// Remove a record
    ///
    /// # Returns
    /// `true` iff a record was present and removed
    fn remove(&self, id: &str) -> StoreResult<bool>;

    /// Number of stored records
    fn len(&self) -> StoreResult<usize>;

    /// Whether the store holds no records
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Drop every record
    fn clear(&self) -> StoreResult<()>;
}

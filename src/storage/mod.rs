//! Storage implementations for the item and user collections

/// Implement [`ResourceStore`](crate::core::store::ResourceStore) for a
/// wrapper whose `inner` field is an [`InMemoryStore`]
macro_rules! delegate_resource_store {
    ($store:ty, $record:ty) => {
        impl $crate::core::store::ResourceStore<$record> for $store {
            fn get(&self, id: &str) -> $crate::core::error::StoreResult<Option<$record>> {
                $crate::core::store::ResourceStore::get(&self.inner, id)
            }

            fn exists(&self, id: &str) -> $crate::core::error::StoreResult<bool> {
                $crate::core::store::ResourceStore::exists(&self.inner, id)
            }

            fn list(&self) -> $crate::core::error::StoreResult<Vec<$record>> {
                $crate::core::store::ResourceStore::list(&self.inner)
            }

            fn put(&self, record: $record) -> $crate::core::error::StoreResult<()> {
                $crate::core::store::ResourceStore::put(&self.inner, record)
            }

            fn remove(&self, id: &str) -> $crate::core::error::StoreResult<bool> {
                $crate::core::store::ResourceStore::remove(&self.inner, id)
            }

            fn len(&self) -> $crate::core::error::StoreResult<usize> {
                $crate::core::store::ResourceStore::len(&self.inner)
            }

            fn clear(&self) -> $crate::core::error::StoreResult<()> {
                $crate::core::store::ResourceStore::clear(&self.inner)
            }
        }
    };
}

pub(crate) use delegate_resource_store;

pub mod in_memory;
pub mod items;
pub mod users;

pub use in_memory::InMemoryStore;
pub use items::ItemStore;
pub use users::UserStore;

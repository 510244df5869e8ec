//! User store

use super::{InMemoryStore, delegate_resource_store};
use crate::core::error::StoreResult;
use crate::core::model::{Role, User};
use crate::core::store::ResourceStore;

/// Users every fresh process starts with
pub fn sample_users() -> Vec<User> {
    vec![
        User::new("user1", "Admin User", "admin@collectibles.com", Role::Admin),
        User::new("user2", "John Collector", "john@email.com", Role::Buyer),
        User::new("user3", "Ramon Organizer", "ramon@email.com", Role::Seller),
    ]
}

/// Users with create, full-replace update and delete
#[derive(Clone, Default)]
pub struct UserStore {
    inner: InMemoryStore<User>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with [`sample_users`]
    pub fn with_sample_users() -> Self {
        Self {
            inner: InMemoryStore::with_records(sample_users()),
        }
    }

    /// Insert a user whose identifier is not taken
    ///
    /// # Errors
    /// `StoreError::DuplicateKey` if the identifier is already stored
    pub fn add(&self, user: User) -> StoreResult<User> {
        self.inner.insert_new(user)
    }

    /// Replace the user stored under `id`
    ///
    /// `id` is stamped onto `user` whatever identifier it carried.
    ///
    /// # Errors
    /// `StoreError::NotFound` if no user is stored under `id`
    pub fn update(&self, id: &str, mut user: User) -> StoreResult<User> {
        user.id = id.to_string();
        self.inner.replace_existing(id, user)
    }

    /// Delete a user, reporting whether one was removed
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.remove(id)
    }
}

delegate_resource_store!(UserStore, User);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::StoreError;

    fn ana(id: &str) -> User {
        User::new(id, "Ana", "ana@x.com", Role::Buyer)
    }

    #[test]
    fn test_sample_users_seeded() {
        let store = UserStore::with_sample_users();
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["user1", "user2", "user3"]);
        assert_eq!(store.get("user1").unwrap().unwrap().role, Role::Admin);
    }

    #[test]
    fn test_add_then_get_returns_equal_record() {
        let store = UserStore::new();
        let created = store.add(ana("u9")).unwrap();
        let fetched = store.get("u9").unwrap().unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.name, "Ana");
        assert_eq!(fetched.email, "ana@x.com");
    }

    #[test]
    fn test_add_duplicate_leaves_existing_untouched() {
        let store = UserStore::with_sample_users();
        let err = store
            .add(User::new("user1", "Impostor", "imp@x.com", Role::Buyer))
            .unwrap_err();

        assert_eq!(err.to_string(), "User with ID user1 already exists");
        let kept = store.get("user1").unwrap().unwrap();
        assert_eq!(kept.name, "Admin User");
        assert_eq!(kept.role, Role::Admin);
    }

    #[test]
    fn test_update_missing_creates_nothing() {
        let store = UserStore::new();
        let err = store.update("ghost", ana("ghost")).unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(!store.exists("ghost").unwrap());
    }

    #[test]
    fn test_update_stamps_path_id() {
        let store = UserStore::with_sample_users();
        let updated = store
            .update("user2", User::new("someone-else", "John", "j@e.com", Role::Seller))
            .unwrap();

        assert_eq!(updated.id, "user2");
        assert!(!store.exists("someone-else").unwrap());
        let stored = store.get("user2").unwrap().unwrap();
        assert_eq!(stored.role, Role::Seller);
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_delete_then_get_is_absent() {
        let store = UserStore::with_sample_users();
        assert!(store.delete("user3").unwrap());
        assert!(store.get("user3").unwrap().is_none());
        assert!(!store.delete("user3").unwrap());
    }

    #[test]
    fn test_json_round_trip_preserves_ids() {
        let store = UserStore::with_sample_users();
        store.add(ana("u9")).unwrap();

        let json = serde_json::to_string(&store.list().unwrap()).unwrap();
        let parsed: Vec<User> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, store.list().unwrap());
    }
}

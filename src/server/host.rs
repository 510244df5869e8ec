//! Application context shared by every handler
//!
//! The host owns the two resource stores and the configuration. Handlers
//! receive it through axum `State`; cloning it is cheap and every clone
//! points at the same stores.

use crate::config::ServerConfig;
use crate::core::error::StoreResult;
use crate::core::model::Item;
use crate::core::store::ResourceStore;
use crate::storage::items::DEFAULT_ITEMS_JSON;
use crate::storage::users::sample_users;
use crate::storage::{ItemStore, UserStore};
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all application state
#[derive(Clone)]
pub struct ServerHost {
    /// Static configuration
    pub config: Arc<ServerConfig>,

    /// Item catalog
    pub items: ItemStore,

    /// User accounts
    pub users: UserStore,

    /// Catalog the item store was seeded with, replayed by [`ServerHost::reset`]
    item_seed: Arc<Vec<Item>>,
}

impl ServerHost {
    /// Build a host whose item store holds `item_seed` and whose user store
    /// holds the sample users
    pub fn new(config: ServerConfig, item_seed: Vec<Item>) -> Self {
        Self {
            config: Arc::new(config),
            items: ItemStore::with_items(item_seed.clone()),
            users: UserStore::with_sample_users(),
            item_seed: Arc::new(item_seed),
        }
    }

    /// Build a host from configuration, loading the item dataset it names
    ///
    /// The embedded catalog is used when `config.items_path` is unset.
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let seed = match &config.items_path {
            Some(path) => ItemStore::from_json_file(path)?.list()?,
            None => ItemStore::parse_dataset(DEFAULT_ITEMS_JSON)?,
        };

        let host = Self::new(config, seed);
        tracing::info!(
            items = host.items.len()?,
            users = host.users.len()?,
            "Stores initialized"
        );
        Ok(host)
    }

    /// Restore both stores to their seeded state
    pub fn reset(&self) -> StoreResult<()> {
        self.items.clear()?;
        for item in self.item_seed.iter() {
            self.items.put(item.clone())?;
        }

        self.users.clear()?;
        for user in sample_users() {
            self.users.put(user)?;
        }

        tracing::debug!("Stores reset to seed data");
        Ok(())
    }
}

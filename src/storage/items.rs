//! Item catalog store

use super::{InMemoryStore, delegate_resource_store};
use crate::core::error::StoreResult;
use crate::core::model::Item;
use anyhow::{Context, Result};
use std::path::Path;

/// Catalog shipped with the binary
pub const DEFAULT_ITEMS_JSON: &str = include_str!("../../data/items.json");

/// Read-only catalog of collectible items
///
/// Loaded once at startup; no HTTP route mutates it.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    inner: InMemoryStore<Item>,
}

impl ItemStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `items`
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            inner: InMemoryStore::with_records(items),
        }
    }

    /// Parse a JSON array of items
    pub fn parse_dataset(json: &str) -> Result<Vec<Item>> {
        serde_json::from_str(json).context("item dataset is not a JSON array of items")
    }

    /// Load the catalog from a JSON array
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::with_items(Self::parse_dataset(json)?))
    }

    /// Load the catalog from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read item dataset {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// Items whose name contains `term`, ignoring case
    ///
    /// A blank term returns every item.
    pub fn search_by_name(&self, term: &str) -> StoreResult<Vec<Item>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.inner.filter(|_| true);
        }

        self.inner
            .filter(|item| item.name.to_lowercase().contains(&needle))
    }
}

delegate_resource_store!(ItemStore, Item);

//! Item catalog handlers

use crate::core::error::{ApiError, ApiResult};
use crate::core::model::{Item, Record};
use crate::core::store::ResourceStore;
use crate::core::validation::require_id;
use crate::server::extract::{ApiPath, ApiQuery};
use crate::server::host::ServerHost;
use axum::{Json, extract::State};

/// Query string accepted by `GET /items`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    /// Case-insensitive name filter
    pub search: Option<String>,
}

impl ItemQuery {
    /// Build from raw query pairs
    ///
    /// The first `search` wins and unknown parameters are ignored, so a
    /// query string never makes the listing fail.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let search = pairs
            .into_iter()
            .find(|(key, _)| key == "search")
            .map(|(_, value)| value);
        Self { search }
    }
}

/// GET /items
///
/// Returns the whole catalog, or the items whose name matches `?search=`.
pub async fn list_items(
    State(host): State<ServerHost>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Item>>> {
    let query = ItemQuery::from_pairs(pairs);
    let items = match query.search.as_deref() {
        Some(term) => host.items.search_by_name(term),
        None => host.items.list(),
    }
    .map_err(|e| ApiError::internal("retrieving items", e))?;

    Ok(Json(items))
}

/// GET /items/{id}
pub async fn get_item(
    State(host): State<ServerHost>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<Item>> {
    let id = require_id(Item::ENTITY, Some(id.as_str()))?;

    host.items
        .get(id)
        .map_err(|e| ApiError::internal("retrieving item", e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Item not found with ID: {}", id)))
}

//! Root, health and fallback handlers

use crate::core::error::ApiError;
use crate::server::filters::preflight_response;
use crate::server::host::ServerHost;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// GET /
pub async fn api_info(State(host): State<ServerHost>) -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Collectibles Store API".to_string(),
        version: host.config.api_version.clone(),
        status: "running".to_string(),
    })
}

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

/// Any request no route matched
///
/// `OPTIONS` is answered as a CORS preflight; everything else is a 404.
pub async fn fallback(method: Method, uri: Uri, headers: HeaderMap) -> Response {
    if method == Method::OPTIONS {
        return preflight_response(&headers);
    }

    ApiError::NotFound(format!("Route not found: {}", uri.path())).into_response()
}

/// Known path, method without a handler
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!(
        "Method {} not allowed for {}",
        method,
        uri.path()
    ))
}

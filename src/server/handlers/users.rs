//! User handlers: list, lookup, create, full update, delete, existence probe

use crate::core::error::{ApiError, ApiResult, now_millis};
use crate::core::model::{Record, User};
use crate::core::store::ResourceStore;
use crate::core::validation::{require_id, user_from_body};
use crate::server::extract::{ApiPath, RequestBody};
use crate::server::filters::{is_preflight, preflight_response};
use crate::server::host::ServerHost;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Body of the existence probe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExistenceResponse {
    pub exists: bool,
    pub id: String,
    pub timestamp: i64,
}

fn user_not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("User not found with ID: {}", id))
}

/// 404 unless a user is stored under `id`
fn ensure_exists(host: &ServerHost, id: &str, operation: &str) -> ApiResult<()> {
    let exists = host
        .users
        .exists(id)
        .map_err(|e| ApiError::internal(operation, e))?;

    if exists { Ok(()) } else { Err(user_not_found(id)) }
}

/// GET /users
pub async fn list_users(State(host): State<ServerHost>) -> ApiResult<Json<Vec<User>>> {
    let users = host
        .users
        .list()
        .map_err(|e| ApiError::internal("retrieving users", e))?;

    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_user(
    State(host): State<ServerHost>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<User>> {
    let id = require_id(User::ENTITY, Some(id.as_str()))?;

    host.users
        .get(id)
        .map_err(|e| ApiError::internal("retrieving user", e))?
        .map(Json)
        .ok_or_else(|| user_not_found(id))
}

/// POST /users/{id}
///
/// The path identifier wins over any `id` in the body. Returns 201 with the
/// stored user, 400 on the first failed check, 409 if the id is taken.
pub async fn add_user(
    State(host): State<ServerHost>,
    ApiPath(id): ApiPath<String>,
    RequestBody(body): RequestBody,
) -> ApiResult<(StatusCode, Json<User>)> {
    let id = require_id(User::ENTITY, Some(id.as_str()))?;
    let user = user_from_body(id, &body)?;

    let created = host
        .users
        .add(user)
        .map_err(|e| ApiError::from_store("adding user", e))?;

    tracing::info!(user_id = %created.id, "User created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /users/{id}
///
/// Existence is checked before the body is looked at, so an unknown id is
/// always 404 whatever the payload.
pub async fn update_user(
    State(host): State<ServerHost>,
    ApiPath(id): ApiPath<String>,
    RequestBody(body): RequestBody,
) -> ApiResult<Json<User>> {
    let id = require_id(User::ENTITY, Some(id.as_str()))?;
    ensure_exists(&host, id, "updating user")?;

    let user = user_from_body(id, &body)?;
    let updated = host
        .users
        .update(id, user)
        .map_err(|e| ApiError::from_store("updating user", e))?;

    tracing::info!(user_id = %updated.id, "User updated");
    Ok(Json(updated))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(host): State<ServerHost>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    let id = require_id(User::ENTITY, Some(id.as_str()))?;
    ensure_exists(&host, id, "deleting user")?;

    remove_user(&host, id)?;

    tracing::info!(user_id = %id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user already known to exist
///
/// A user removed by a concurrent request between the existence check and
/// this call is a 500.
fn remove_user(host: &ServerHost, id: &str) -> ApiResult<()> {
    let deleted = host
        .users
        .delete(id)
        .map_err(|e| ApiError::internal("deleting user", e))?;

    if deleted {
        Ok(())
    } else {
        Err(ApiError::Internal("Failed to delete user".to_string()))
    }
}

/// OPTIONS /users/{id}
///
/// Reports whether the user exists: 200 if so, 404 otherwise, with the same
/// body either way. A CORS preflight (one carrying
/// `Access-Control-Request-Method`) is answered as a preflight instead.
pub async fn check_user_exists(
    State(host): State<ServerHost>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Response> {
    if is_preflight(&headers) {
        return Ok(preflight_response(&headers));
    }

    let id = require_id(User::ENTITY, Some(id.as_str()))?;
    let exists = host
        .users
        .exists(id)
        .map_err(|e| ApiError::internal("checking user existence", e))?;

    let status = if exists {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    let body = ExistenceResponse {
        exists,
        id: id.to_string(),
        timestamp: now_millis(),
    };

    Ok((status, Json(body)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn make_host() -> ServerHost {
        ServerHost::new(ServerConfig::default(), Vec::new())
    }

    #[test]
    fn test_remove_user_deletes_existing() {
        let host = make_host();
        remove_user(&host, "user1").unwrap();
        assert!(!host.users.exists("user1").unwrap());
    }

    #[test]
    fn test_remove_user_lost_race_is_internal_error() {
        let host = make_host();
        let other = host.clone();

        // Another request deletes the user after the existence check passed
        ensure_exists(&host, "user2", "deleting user").unwrap();
        other.users.delete("user2").unwrap();

        let err = remove_user(&host, "user2").unwrap_err();
        assert_eq!(err, ApiError::Internal("Failed to delete user".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_ensure_exists_unknown_user_is_404() {
        let err = ensure_exists(&make_host(), "ghost", "updating user").unwrap_err();
        assert_eq!(err, ApiError::NotFound("User not found with ID: ghost".to_string()));
    }
}

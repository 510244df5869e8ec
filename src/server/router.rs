//! Route table

use super::filters::{cors_preflight, filter_pipeline};
use super::handlers::{items, users, utility};
use super::host::ServerHost;
use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// - GET /                      - API information
/// - GET /health                - liveness
/// - GET /items                 - catalog, optionally `?search=`
/// - GET /items/{id}            - one item
/// - GET /users                 - all users
/// - GET /users/{id}            - one user
/// - POST /users/{id}           - create
/// - PUT /users/{id}            - full update
/// - DELETE /users/{id}         - delete
/// - OPTIONS /users/{id}        - existence probe (or CORS preflight)
///
/// Every other `OPTIONS` request is a CORS preflight, every other path is a
/// 404 and an unsupported method on a known path is a 405, all with the
/// standard error body. The filter pipeline wraps the fallbacks too.
pub fn build_router(host: ServerHost) -> Router {
    Router::new()
        .route("/", get(utility::api_info).options(cors_preflight))
        .route("/health", get(utility::health_check).options(cors_preflight))
        .route("/items", get(items::list_items).options(cors_preflight))
        .route("/items/{id}", get(items::get_item).options(cors_preflight))
        .route("/users", get(users::list_users).options(cors_preflight))
        .route(
            "/users/{id}",
            get(users::get_user)
                .post(users::add_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .options(users::check_user_exists),
        )
        .fallback(utility::fallback)
        .method_not_allowed_fallback(utility::method_not_allowed)
        .layer(middleware::from_fn_with_state(
            host.config.clone(),
            filter_pipeline,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    fn make_router() -> Router {
        build_router(ServerHost::from_config(ServerConfig::default()).unwrap())
    }

    async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_fallback_goes_through_filters() {
        let request = Request::builder()
            .uri("/missing")
            .body(Body::empty())
            .unwrap();

        let response = make_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405_with_error_body() {
        let (status, body) = send(make_router(), Method::PATCH, "/users/user1").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "Method PATCH not allowed for /users/user1");
    }

    #[tokio::test]
    async fn test_invalid_path_encoding_is_400_with_error_body() {
        for (method, uri) in [
            (Method::GET, "/users/%FF"),
            (Method::DELETE, "/users/%FF"),
            (Method::GET, "/items/%FF"),
        ] {
            let (status, body) = send(make_router(), method, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], true);
            assert!(
                body["message"]
                    .as_str()
                    .unwrap()
                    .starts_with("Invalid path parameter")
            );
        }
    }

    #[tokio::test]
    async fn test_options_on_known_collection_is_preflight() {
        let (status, body) = send(make_router(), Method::OPTIONS, "/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".to_string()));
    }

    #[tokio::test]
    async fn test_routes_share_state() {
        let host = ServerHost::from_config(ServerConfig::default()).unwrap();
        let router = build_router(host.clone());

        host.users.delete("user2").unwrap();

        let (status, body) = send(router, Method::GET, "/users/user2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User not found with ID: user2");
    }
}

//! Request/response filter pipeline
//!
//! Every request goes through [`filter_pipeline`]:
//!
//! - before the handler: the request line is logged
//! - after the handler: CORS, content-type, security, server and
//!   cache-control headers are applied to the response
//!
//! CORS headers a handler already set (the preflight echo) are left alone.
//! Every other header is overwritten.

use crate::config::{JSON_CONTENT_TYPE, ServerConfig};
use axum::{
    Json,
    extract::{Request, State},
    http::{
        HeaderMap, HeaderName, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
            ACCESS_CONTROL_REQUEST_METHOD, CACHE_CONTROL, CONTENT_TYPE, SERVER,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// What the post-filter needs to remember about the request
#[derive(Debug, Clone)]
pub struct RequestLine {
    pub method: Method,
    pub path: String,
}

/// Middleware running the pre- and post-filters around every handler
pub async fn filter_pipeline(
    State(config): State<Arc<ServerConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let line = before(&request);
    let response = next.run(request).await;
    after(&config, &line, response)
}

/// Pre-filter
pub fn before(request: &Request) -> RequestLine {
    let line = RequestLine {
        method: request.method().clone(),
        path: request.uri().path().to_string(),
    };
    info!("{} {}", line.method, line.path);
    line
}

/// Post-filter
pub fn after(config: &ServerConfig, request: &RequestLine, mut response: Response) -> Response {
    let headers = response.headers_mut();

    set_default(headers, ACCESS_CONTROL_ALLOW_ORIGIN, &config.cors.allowed_origins);
    set_default(headers, ACCESS_CONTROL_ALLOW_METHODS, &config.cors.allowed_methods);
    set_default(headers, ACCESS_CONTROL_ALLOW_HEADERS, &config.cors.allowed_headers);
    set_default(headers, ACCESS_CONTROL_MAX_AGE, &config.cors.max_age);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    set(headers, X_CONTENT_TYPE_OPTIONS, &config.security.content_type_options);
    set(headers, X_FRAME_OPTIONS, &config.security.frame_options);
    set(headers, X_XSS_PROTECTION, &config.security.xss_protection);
    set(headers, SERVER, &config.server_name);

    set(headers, CACHE_CONTROL, cache_policy(config, request));

    response
}

/// `Cache-Control` value for a request
pub fn cache_policy<'a>(config: &'a ServerConfig, request: &RequestLine) -> &'a str {
    if request.method == Method::GET && request.path.starts_with(&config.cache.public_prefix) {
        &config.cache.public
    } else {
        &config.cache.no_store
    }
}

/// Whether the request is a CORS preflight
pub fn is_preflight(headers: &HeaderMap) -> bool {
    headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

/// Answer a CORS preflight, echoing the requested headers and method
pub fn preflight_response(headers: &HeaderMap) -> Response {
    let mut response = (StatusCode::OK, Json("OK")).into_response();

    if let Some(requested) = headers.get(ACCESS_CONTROL_REQUEST_HEADERS) {
        response
            .headers_mut()
            .insert(ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
    }
    if let Some(requested) = headers.get(ACCESS_CONTROL_REQUEST_METHOD) {
        response
            .headers_mut()
            .insert(ACCESS_CONTROL_ALLOW_METHODS, requested.clone());
    }

    response
}

/// CORS preflight handler for routes without their own `OPTIONS` behaviour
pub async fn cors_preflight(headers: HeaderMap) -> Response {
    preflight_response(&headers)
}

fn set(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(_) => warn!("Skipping invalid {} header value {:?}", name, value),
    }
}

fn set_default(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if !headers.contains_key(&name) {
        set(headers, name, value);
    }
}

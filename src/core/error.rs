//! Typed error handling for the collectibles API
//!
//! Every failure a handler can hit is expressed as an [`ApiError`], which
//! carries its own HTTP status and renders the shared error body:
//!
//! ```json
//! { "error": true, "message": "User not found with ID: u9", "timestamp": 1700000000000 }
//! ```
//!
//! # Error Categories
//!
//! - [`ApiError`]: HTTP-facing taxonomy (400 / 404 / 409 / 500)
//! - [`StoreError`]: failures reported by the in-memory resource stores
//! - [`ValidationError`]: failures reported by the request validators
//!
//! Lower layers return their own error type; handlers convert with `?` or
//! [`ApiError::internal`] when they want to prefix the operation that failed.

use axum::Json;
use axum::extract::rejection::{BytesRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The error type returned by every HTTP handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Blank identifier, blank body or failed validator
    InvalidInput(String),

    /// Lookup miss
    NotFound(String),

    /// Add with an identifier that is already taken
    DuplicateKey(String),

    /// Known path, unsupported method
    MethodNotAllowed(String),

    /// Request body over the size limit
    PayloadTooLarge(String),

    /// Unexpected failure or store inconsistency
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidInput(msg) => write!(f, "{}", msg),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::DuplicateKey(msg) => write!(f, "{}", msg),
            ApiError::MethodNotAllowed(msg) => write!(f, "{}", msg),
            ApiError::PayloadTooLarge(msg) => write!(f, "{}", msg),
            ApiError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error body sent with every non-2xx JSON response
#[derive(Debug, Clone, Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always `true`
    pub error: bool,
    /// Human-readable error message
    pub message: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            timestamp: now_millis(),
        }
    }
}

impl ApiError {
    /// Build an internal error whose message names the failed operation
    ///
    /// `ApiError::internal("retrieving items", err)` renders as
    /// `Error retrieving items: <err>`.
    pub fn internal(operation: &str, cause: impl fmt::Display) -> Self {
        ApiError::Internal(format!("Error {}: {}", operation, cause))
    }

    /// Map a store failure, prefixing `operation` onto internal failures only
    ///
    /// Duplicate and not-found outcomes keep the store's own message.
    pub fn from_store(operation: &str, err: StoreError) -> Self {
        match err {
            StoreError::Poisoned { .. } => Self::internal(operation, err),
            other => other.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateKey(_) => StatusCode::CONFLICT,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::DuplicateKey(_) => "DUPLICATE_KEY",
            ApiError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            ApiError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ApiError::Internal(_) => "INTERNAL_FAILURE",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        } else {
            tracing::debug!(code = self.error_code(), "{}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Extractor Rejections
// =============================================================================

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidInput(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge("Request body is too large".to_string())
        } else {
            ApiError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors reported by the in-memory resource stores
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with this identifier is already stored
    #[error("{entity} with ID {id} already exists")]
    DuplicateKey { entity: &'static str, id: String },

    /// No record with this identifier is stored
    #[error("{entity} with ID {id} does not exist")]
    NotFound { entity: &'static str, id: String },

    /// A writer panicked while holding the store lock
    #[error("{entity} store lock poisoned")]
    Poisoned { entity: &'static str },
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey { .. } => ApiError::DuplicateKey(err.to_string()),
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::Poisoned { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors reported by the request validators, in check order
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{entity} ID is required")]
    MissingId { entity: &'static str },

    #[error("Request body is required")]
    MissingBody,

    #[error("Invalid user data")]
    InvalidPayload,

    #[error("User name is required")]
    MissingName,

    #[error("User email is required")]
    MissingEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("User role is required")]
    MissingRole,

    #[error("Invalid role. Must be: admin, buyer, or seller")]
    InvalidRole,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// A specialized Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// =============================================================================
// Tests
// =============================================================================

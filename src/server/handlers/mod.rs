//! HTTP handlers
//!
//! Handlers pull path and body inputs, run the validators, call the stores
//! and map every outcome to a status code. Failures are returned as
//! [`ApiError`](crate::core::error::ApiError), which renders the shared
//! error body.

pub mod items;
pub mod users;
pub mod utility;

//! Extractors whose rejections render as [`ApiError`]
//!
//! axum's own `Path`, `Query` and `Bytes` reject with plain-text bodies.
//! These wrappers convert every rejection into the shared error body.

use crate::core::error::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
};

/// `Path` extractor rejecting with [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// `Query` extractor rejecting with [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Raw request body rejecting with [`ApiError`]
///
/// The body is kept as bytes so the validators decide what a missing or
/// malformed payload means.
#[derive(Debug)]
pub struct RequestBody(pub Bytes);

impl<S> FromRequest<S> for RequestBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        Ok(Self(bytes))
    }
}

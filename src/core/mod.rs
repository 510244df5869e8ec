//! Core module containing the domain model, errors and validation

pub mod error;
pub mod model;
pub mod store;
pub mod validation;

pub use error::{ApiError, ApiResult, ErrorResponse, StoreError, ValidationError};
pub use model::{Item, Record, Role, User, UserPayload};
pub use store::ResourceStore;

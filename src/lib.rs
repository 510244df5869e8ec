//! # Collectibles Store
//!
//! An HTTP JSON API for a collectibles shop: a read-only item catalog and
//! full CRUD over user accounts, both held in memory.
//!
//! ## Features
//!
//! - **Item catalog**: seeded from a JSON dataset, listed or searched by name
//! - **User accounts**: create, read, full update, delete and existence probe
//! - **Validation**: ordered checks with one precise message per failure
//! - **Uniform errors**: `{ "error": true, "message": ..., "timestamp": ... }`
//! - **Response filters**: CORS, security and cache-control headers on every reply
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use collectibles_store::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(ServerConfig::from_env()?)
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ApiResult, ErrorResponse, StoreError, ValidationError},
        model::{Item, Record, Role, User, UserPayload},
        store::ResourceStore,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStore, ItemStore, UserStore};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{ServerBuilder, ServerHost, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
}

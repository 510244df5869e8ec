//! HTTP server for the collectibles store
//!
//! - `host`: shared application context (configuration and stores)
//! - `handlers`: one async handler per endpoint
//! - `extract`: extractors rejecting with the shared error body
//! - `filters`: request logging and response header pipeline
//! - `router`: the route table
//! - `builder`: fluent construction and graceful serving

pub mod builder;
pub mod extract;
pub mod filters;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use host::ServerHost;
pub use router::build_router;

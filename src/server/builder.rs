//! ServerBuilder for fluent API to build the HTTP server

use super::host::ServerHost;
use super::router::build_router;
use crate::config::ServerConfig;
use crate::core::model::Item;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

/// Builder for the collectibles store server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServerConfig::from_env()?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: Option<ServerConfig>,
    items: Option<Vec<Item>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: None,
            items: None,
        }
    }

    /// Use `config` instead of the defaults
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Seed the catalog with `items` instead of the configured dataset
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    /// Build the application context
    pub fn build_host(self) -> Result<ServerHost> {
        let config = self.config.unwrap_or_default();

        match self.items {
            Some(items) => Ok(ServerHost::new(config, items)),
            None => ServerHost::from_config(config),
        }
    }

    /// Build the router
    pub fn build(self) -> Result<Router> {
        Ok(build_router(self.build_host()?))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds `config.bind_address()` and handles SIGTERM and SIGINT.
    pub async fn serve(self) -> Result<()> {
        let host = self.build_host()?;
        let addr = host.config.bind_address();
        let app = build_router(host);

        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);
        log_endpoints(&addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn log_endpoints(addr: &str) {
    let endpoints = [
        ("GET", "/", "API information"),
        ("GET", "/health", "Health check"),
        ("GET", "/items", "List items (?search=)"),
        ("GET", "/items/{id}", "Get item"),
        ("GET", "/users", "List users"),
        ("GET", "/users/{id}", "Get user"),
        ("POST", "/users/{id}", "Create user"),
        ("PUT", "/users/{id}", "Update user"),
        ("DELETE", "/users/{id}", "Delete user"),
        ("OPTIONS", "/users/{id}", "Check user exists"),
    ];

    for (method, path, description) in endpoints {
        tracing::info!("  {:<7} http://{}{} - {}", method, addr, path, description);
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

use anyhow::Result;
use collectibles_store::config::ServerConfig;
use collectibles_store::server::ServerBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        port = config.port,
        version = %config.api_version,
        "Starting Collectibles Store API"
    );

    ServerBuilder::new().with_config(config).serve().await
}

/// `RUST_LOG` wins; otherwise `LOG_LEVEL`, defaulting to `info`
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

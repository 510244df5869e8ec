//! Configuration loading and management
//!
//! Defaults match the public contract of the API. A YAML file named by
//! `COLLECTIBLES_CONFIG` may override any of them, and a few environment
//! variables override the file:
//!
//! | Variable | Effect |
//! |---|---|
//! | `PORT` | listening port (ignored if not a valid port number) |
//! | `ITEMS_PATH` | JSON dataset to load items from |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 4567;
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// CORS response policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: String,
    pub allowed_methods: String,
    pub allowed_headers: String,
    /// Seconds, sent as `Access-Control-Max-Age`
    pub max_age: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_string(),
            allowed_methods: "GET, POST, PUT, DELETE, OPTIONS".to_string(),
            allowed_headers: "Content-Type, Authorization, X-Requested-With".to_string(),
            max_age: "3600".to_string(),
        }
    }
}

/// `Cache-Control` values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Sent on GET requests under [`CacheConfig::public_prefix`]
    pub public: String,
    /// Sent on everything else
    pub no_store: String,
    pub public_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            public: "public, max-age=3600".to_string(),
            no_store: "no-cache, no-store, must-revalidate".to_string(),
            public_prefix: "/items".to_string(),
        }
    }
}

/// Static security headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityHeadersConfig {
    pub content_type_options: String,
    pub frame_options: String,
    pub xss_protection: String,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            content_type_options: "nosniff".to_string(),
            frame_options: "DENY".to_string(),
            xss_protection: "1; mode=block".to_string(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,

    /// Interface to bind
    pub host: String,

    /// Reported by `GET /`
    pub api_version: String,

    /// Sent as the `Server` header
    pub server_name: String,

    pub cors: CorsConfig,
    pub cache: CacheConfig,
    pub security: SecurityHeadersConfig,

    /// Item dataset on disk; the embedded catalog is used when unset
    pub items_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
            api_version: "v1".to_string(),
            server_name: "Collectibles-Store-API".to_string(),
            cors: CorsConfig::default(),
            cache: CacheConfig::default(),
            security: SecurityHeadersConfig::default(),
            items_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid config file {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from `.env`, the optional YAML file and the environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match std::env::var("COLLECTIBLES_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `PORT` and `ITEMS_PATH` from `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup("PORT") {
            self.port = parse_port(&raw, self.port);
        }

        if let Some(path) = lookup("ITEMS_PATH").filter(|p| !p.trim().is_empty()) {
            self.items_path = Some(PathBuf::from(path));
        }
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a port, falling back to `fallback` when `raw` is empty or invalid
pub fn parse_port(raw: &str, fallback: u16) -> u16 {
    let raw = raw.trim();
    if raw.is_empty() {
        return fallback;
    }

    match raw.parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            warn!("Invalid PORT environment variable {:?}, using default: {}", raw, fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 4567);
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.cors.allowed_origins, "*");
        assert_eq!(config.cache.public, "public, max-age=3600");
        assert!(config.items_path.is_none());
    }

    #[test]
    fn test_port_override() {
        let mut config = ServerConfig::default();
        config.apply_overrides(env(&[("PORT", "8080")]));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let mut config = ServerConfig::default();
        config.apply_overrides(env(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_PORT);

        config.apply_overrides(env(&[("PORT", "70000")]));
        assert_eq!(config.port, DEFAULT_PORT);

        config.apply_overrides(env(&[("PORT", "")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_items_path_override() {
        let mut config = ServerConfig::default();
        config.apply_overrides(env(&[("ITEMS_PATH", "/tmp/items.json")]));
        assert_eq!(config.items_path, Some(PathBuf::from("/tmp/items.json")));

        config.apply_overrides(env(&[("ITEMS_PATH", "  ")]));
        assert_eq!(config.items_path, Some(PathBuf::from("/tmp/items.json")));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ServerConfig::from_yaml_str("port: 9000\ncors:\n  allowed_origins: https://shop.example\n")
            .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.cors.allowed_origins, "https://shop.example");
        assert_eq!(config.cors.max_age, "3600");
        assert_eq!(config.server_name, "Collectibles-Store-API");
    }

    #[test]
    fn test_yaml_serialization() {
        let config = ServerConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = ServerConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: 5000\napi_version: v2").unwrap();

        let config = ServerConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.api_version, "v2");
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:4567");
    }
}

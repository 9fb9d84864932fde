/// Configuration management for projectd
/// 
/// Handles server, database and logging settings. Every value can be overridden
/// through a PROJECTD_* environment variable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration  
    pub database: DatabaseConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
    /// Requests running longer than this are dropped, cancelling their storage call
    pub request_timeout_secs: u64,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]  
pub struct DatabaseConfig {
    /// sqlx SQLite url, e.g. "sqlite://projects.db" or "sqlite::memory:"
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset (e.g., "info", "debug")
    pub level: String,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for k8s/container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("PROJECTD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env_or("PROJECTD_PORT", 3004),
                request_timeout_secs: env_or("PROJECTD_REQUEST_TIMEOUT_SECS", 30),
            },
            database: DatabaseConfig {
                url: std::env::var("PROJECTD_DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://projects.db".to_string()),
                max_connections: env_or("PROJECTD_DB_MAX_CONNECTIONS", 5),
            },
            logging: LoggingConfig {
                level: std::env::var("PROJECTD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        }
    }
}

/// Parse a numeric env var, falling back to `default` when unset or malformed
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables. `main` loads a `.env` file via dotenvy before this runs, so
//! both real environments and local dotenv files feed the same path.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Cache entry TTL in seconds (sliding; refreshed on every hit)
    pub cache_ttl: u64,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
    /// Directory for the embedded banner store
    pub data_dir: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_TTL` - cache TTL in seconds (default: 300)
    /// - `SWEEP_INTERVAL` - sweep frequency in seconds (default: 1)
    /// - `DATA_DIR` - store directory (default: "data/banners")
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data/banners".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            cache_ttl: 300,
            sweep_interval: 1,
            data_dir: "data/banners".to_string(),
        }
    }
}

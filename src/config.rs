//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cache::DEFAULT_TTL_SECS;
use crate::service::DEFAULT_PAGE_SIZE;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of a cached listing page in seconds
    pub cache_ttl: u64,
    /// Background sweep interval for expired cache entries in seconds
    pub cleanup_interval: u64,
    /// Number of items per listing page
    pub page_size: u32,
    /// Optional JSON file used to seed the in-memory item store
    pub items_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Listing cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Expired entry sweep frequency in seconds (default: 60)
    /// - `PAGE_SIZE` - Items per listing page (default: 10)
    /// - `ITEMS_FILE` - JSON array of items to load at startup (default: none)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            page_size: env_or("PAGE_SIZE", defaults.page_size),
            items_file: env::var("ITEMS_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: DEFAULT_TTL_SECS,
            cleanup_interval: 60,
            page_size: DEFAULT_PAGE_SIZE,
            items_file: None,
        }
    }
}

//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_MAX_ENTRIES;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Cache dataset (`{"banks": [...]}`)
    pub banks_v1_path: PathBuf,
    /// Remote source map (`{"<name>": "<url>"}`)
    pub banks_v2_path: PathBuf,
    /// Maximum number of banks the cache can hold
    pub max_entries: usize,
    /// Timeout in milliseconds for each remote source request
    pub remote_timeout_ms: u64,
    /// Maximum remote source requests in flight
    pub remote_concurrency: usize,
    /// Port of the mock remotes server
    pub mock_remotes_port: u16,
    /// Bank records served by the mock remotes server
    pub mock_remotes_path: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `BANKS_V1_PATH` - Cache dataset (default: data/banks-v1.json)
    /// - `BANKS_V2_PATH` - Remote source map (default: data/banks-v2.json)
    /// - `MAX_ENTRIES` - Maximum cached banks (default: 20)
    /// - `REMOTE_TIMEOUT_MS` - Per-source timeout (default: 5000)
    /// - `REMOTE_CONCURRENCY` - Concurrent source requests (default: 4)
    /// - `MOCK_REMOTES_PORT` - Mock remotes port (default: 1234)
    /// - `MOCK_REMOTES_PATH` - Mock remotes data (default: data/mock-remotes.json)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            banks_v1_path: env_or("BANKS_V1_PATH", defaults.banks_v1_path),
            banks_v2_path: env_or("BANKS_V2_PATH", defaults.banks_v2_path),
            max_entries: env_or("MAX_ENTRIES", defaults.max_entries),
            remote_timeout_ms: env_or("REMOTE_TIMEOUT_MS", defaults.remote_timeout_ms),
            remote_concurrency: env_or("REMOTE_CONCURRENCY", defaults.remote_concurrency),
            mock_remotes_port: env_or("MOCK_REMOTES_PORT", defaults.mock_remotes_port),
            mock_remotes_path: env_or("MOCK_REMOTES_PATH", defaults.mock_remotes_path),
        }
    }

    /// Per-source request timeout.
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            banks_v1_path: PathBuf::from("data/banks-v1.json"),
            banks_v2_path: PathBuf::from("data/banks-v2.json"),
            max_entries: DEFAULT_MAX_ENTRIES,
            remote_timeout_ms: 5000,
            remote_concurrency: 4,
            mock_remotes_port: 1234,
            mock_remotes_path: PathBuf::from("data/mock-remotes.json"),
        }
    }
}

/// Reads and parses `key`, falling back to `default` when unset or invalid.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

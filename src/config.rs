//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cities the cache can hold
    pub max_entries: usize,
    /// Idle time in seconds after which a manual sweep removes an entry
    pub idle_threshold_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// AQICN API token
    pub aqicn_api_key: String,
    /// AQICN API base URL
    pub aqicn_api_url: String,
    /// Transport timeout for upstream requests in seconds
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cached cities (default: 3)
    /// - `IDLE_THRESHOLD_SECS` - Idle expiry threshold in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `AQICN_API_KEY` - Provider token (default: "demo")
    /// - `AQICN_API_URL` - Provider base URL (default: https://api.waqi.info)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream transport timeout (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            idle_threshold_secs: parse_var("IDLE_THRESHOLD_SECS")
                .unwrap_or(defaults.idle_threshold_secs),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            aqicn_api_key: env::var("AQICN_API_KEY").unwrap_or(defaults.aqicn_api_key),
            aqicn_api_url: env::var("AQICN_API_URL").unwrap_or(defaults.aqicn_api_url),
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.upstream_timeout_secs),
        }
    }

    /// Idle threshold as a `Duration`.
    pub fn idle_threshold(&self) -> Duration {
        Duration::from_secs(self.idle_threshold_secs)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 3,
            idle_threshold_secs: 60,
            server_port: 8080,
            aqicn_api_key: "demo".to_string(),
            aqicn_api_url: "https://api.waqi.info".to_string(),
            upstream_timeout_secs: 30,
        }
    }
}

//! Gateway configuration types.
//!
//! This module defines configuration structures for the HTTP gateway.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the gateway service.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0:8080").
    #[serde(default = "GatewayConfig::default_listen_addr")]
    pub listen_addr: String,

    /// Directory holding the employee database. `None` keeps records in
    /// memory for the life of the process.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Insert the demo organizations into an empty store at startup.
    #[serde(default = "GatewayConfig::default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Allowed CORS origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Search endpoint rate limit.
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Maximum request body size in bytes.
    #[serde(default = "GatewayConfig::default_max_body")]
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    #[serde(default = "GatewayConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl GatewayConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:8080".to_string()
    }

    const fn default_seed_demo_data() -> bool {
        true
    }

    const fn default_max_body() -> usize {
        64 * 1024 // 64 KB
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    /// Build a configuration from environment variables.
    ///
    /// Reads `LISTEN_ADDR`, `DATA_DIR`, `SEED_DEMO_DATA`,
    /// `RATE_LIMIT_MAX_REQUESTS` and `RATE_LIMIT_WINDOW_SECONDS`. Unset or
    /// unparsable values keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Some(dir) = lookup("DATA_DIR").filter(|dir| !dir.is_empty()) {
            config.data_dir = Some(dir);
        }
        if let Some(seed) = parse_var(&lookup, "SEED_DEMO_DATA") {
            config.seed_demo_data = seed;
        }
        if let Some(max) = parse_var(&lookup, "RATE_LIMIT_MAX_REQUESTS") {
            config.rate_limit.max_requests = max;
        }
        if let Some(window) = parse_var(&lookup, "RATE_LIMIT_WINDOW_SECONDS") {
            config.rate_limit.window_seconds = window;
        }

        config
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            data_dir: None,
            seed_demo_data: Self::default_seed_demo_data(),
            cors_origins: vec!["*".to_string()],
            rate_limit: RateLimitConfig::default(),
            max_body_bytes: Self::default_max_body(),
            request_timeout_seconds: Self::default_request_timeout(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}

/// Sliding-window limits for the search endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateLimitConfig {
    /// Requests admitted per key within one window.
    #[serde(default = "RateLimitConfig::default_max_requests")]
    pub max_requests: u32,

    /// Window length in seconds.
    #[serde(default = "RateLimitConfig::default_window_seconds")]
    pub window_seconds: u64,
}

impl RateLimitConfig {
    const fn default_max_requests() -> u32 {
        2
    }

    const fn default_window_seconds() -> u64 {
        60
    }

    /// Get the window as a `Duration`.
    #[must_use]
    pub const fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: Self::default_max_requests(),
            window_seconds: Self::default_window_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert!(config.data_dir.is_none());
        assert!(config.seed_demo_data);
        assert_eq!(config.rate_limit.max_requests, 2);
        assert_eq!(config.rate_limit.window_seconds, 60);
        assert_eq!(config.max_body_bytes, 64 * 1024);
    }

    #[test]
    fn timeout_duration() {
        let config = GatewayConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.rate_limit.window(), Duration::from_secs(60));
    }

    #[test]
    fn environment_overrides() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("DATA_DIR", "/tmp/dir"),
            ("SEED_DEMO_DATA", "false"),
            ("RATE_LIMIT_MAX_REQUESTS", "10"),
            ("RATE_LIMIT_WINDOW_SECONDS", " 5 "),
        ]));

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.data_dir.as_deref(), Some("/tmp/dir"));
        assert!(!config.seed_demo_data);
        assert_eq!(config.rate_limit.max_requests, 10);
        assert_eq!(config.rate_limit.window_seconds, 5);
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("RATE_LIMIT_MAX_REQUESTS", "many"),
            ("SEED_DEMO_DATA", "maybe"),
        ]));
        assert_eq!(config.rate_limit.max_requests, 2);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn deserialize_partial() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"rate_limit":{"max_requests":7}}"#).unwrap();
        assert_eq!(config.rate_limit.max_requests, 7);
        assert_eq!(config.rate_limit.window_seconds, 60);
        assert!(config.cors_origins.is_empty());
    }
}

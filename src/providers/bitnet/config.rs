//! BitNet provider configuration.

use std::time::Duration;

use crate::defaults::{endpoint, http};
use crate::types::HttpConfig;

/// Configuration for a [`BitNetClient`](super::BitNetClient).
///
/// Built once at startup and passed into the client; nothing here is read
/// from the environment unless [`BitNetConfig::from_env`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitNetConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,
    /// HTTP client settings
    pub http_config: HttpConfig,
    /// Upper bound for a single `/health` probe
    pub health_check_timeout: Duration,
}

impl Default for BitNetConfig {
    fn default() -> Self {
        Self::new(endpoint::BASE_URL)
    }
}

impl BitNetConfig {
    /// Create a configuration pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            http_config: HttpConfig::default(),
            health_check_timeout: http::HEALTH_CHECK_TIMEOUT,
        }
    }

    /// Read `BITNET_API_URL`, falling back to the default when unset or blank.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(endpoint::BASE_URL_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    pub const fn with_health_check_timeout(mut self, timeout: Duration) -> Self {
        self.health_check_timeout = timeout;
        self
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_compose_service() {
        let cfg = BitNetConfig::default();
        assert_eq!(cfg.base_url, "http://bitnet-server:8080");
        assert_eq!(cfg.health_check_timeout, Duration::from_secs(5));
    }

    #[test]
    fn env_value_overrides_default() {
        let cfg = BitNetConfig::from_env_value(Some("http://10.0.0.5:9000/".to_string()));
        assert_eq!(cfg.base_url, "http://10.0.0.5:9000");
    }

    #[test]
    fn blank_env_value_falls_back() {
        assert_eq!(
            BitNetConfig::from_env_value(Some("   ".to_string())),
            BitNetConfig::default()
        );
        assert_eq!(BitNetConfig::from_env_value(None), BitNetConfig::default());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let cfg = BitNetConfig::new("http://localhost:8080//");
        assert_eq!(
            cfg.endpoint("/v1/models"),
            "http://localhost:8080/v1/models"
        );
    }
}

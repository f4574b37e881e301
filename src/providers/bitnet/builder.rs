use std::time::Duration;

use crate::error::LlmError;
use crate::types::HttpConfig;

use super::client::BitNetClient;
use super::config::BitNetConfig;

/// BitNet-specific builder
///
/// Starts from [`BitNetConfig::default`]; call [`BitNetBuilder::from_env`] to
/// start from `BITNET_API_URL` instead.
#[derive(Debug, Clone, Default)]
pub struct BitNetBuilder {
    config: BitNetConfig,
    http_client: Option<reqwest::Client>,
}

impl BitNetBuilder {
    /// Create a new BitNet builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded from `BITNET_API_URL`
    pub fn from_env() -> Self {
        Self {
            config: BitNetConfig::from_env(),
            http_client: None,
        }
    }

    /// Set the base URL for the BitNet server
    ///
    /// # Arguments
    /// * `url` - The base URL (e.g., "<http://localhost:8080>")
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        let http_config = std::mem::take(&mut self.config.http_config);
        let health_check_timeout = self.config.health_check_timeout;
        self.config = BitNetConfig::new(url)
            .with_http_config(http_config)
            .with_health_check_timeout(health_check_timeout);
        self
    }

    /// Bound every chat/completion request
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.timeout = Some(timeout);
        self
    }

    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.connect_timeout = Some(timeout);
        self
    }

    /// Upper bound for a single health probe
    pub const fn health_check_timeout(mut self, timeout: Duration) -> Self {
        self.config.health_check_timeout = timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.http_config.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.config
            .http_config
            .headers
            .insert(key.into(), value.into());
        self
    }

    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.config.http_config.proxy = Some(proxy.into());
        self
    }

    /// Replace the whole HTTP configuration
    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.config.http_config = config;
        self
    }

    /// Use an existing reqwest client; `HttpConfig` is then not applied
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<BitNetClient, LlmError> {
        match self.http_client {
            Some(client) => Ok(BitNetClient::with_http_client(self.config, client)),
            None => BitNetClient::new(self.config),
        }
    }
}

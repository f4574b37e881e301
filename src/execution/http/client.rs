//! HTTP client builder utilities
//!
//! Builds the reqwest client a provider sends its requests through.

use crate::error::LlmError;
use crate::types::HttpConfig;

/// Build an HTTP client from HttpConfig
///
/// # Arguments
/// * `config` - HTTP configuration containing timeout, proxy, headers, etc.
///
/// # Returns
/// * `Ok(reqwest::Client)` - Configured HTTP client
/// * `Err(LlmError)` - Configuration or build error
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, LlmError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| LlmError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    if !config.headers.is_empty() {
        let headers = super::headers::HttpHeaderBuilder::new()
            .with_custom_headers(&config.headers)?
            .build();
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| LlmError::HttpError(format!("Failed to create HTTP client: {e}")))
}

//! BitNet Client Implementation
//!
//! One request per call: build the body, send it, map the status, hand back
//! the parsed JSON or the raw body stream. No retries.

use serde::Serialize;
use serde_json::Value;

use crate::defaults::{endpoint, provider};
use crate::error::LlmError;
use crate::execution::http::{HttpHeaderBuilder, build_http_client_from_config};
use crate::types::{ChatCompletion, ChatMessage, CompletionOptions, ModelDescriptor};

use super::builder::BitNetBuilder;
use super::config::BitNetConfig;
use super::models;
use super::streaming::body_stream;
use super::transformers::{ChatCompletionRequest, CompletionRequest};

/// BitNet Client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct BitNetClient {
    config: BitNetConfig,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for BitNetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitNetClient")
            .field("provider_id", &provider::ID)
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.http_config.timeout)
            .field("health_check_timeout", &self.config.health_check_timeout)
            .finish()
    }
}

impl BitNetClient {
    /// Creates a client, building its HTTP client from `config.http_config`
    pub fn new(config: BitNetConfig) -> Result<Self, LlmError> {
        let http_client = build_http_client_from_config(&config.http_config)?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Creates a client around an existing reqwest client
    pub fn with_http_client(config: BitNetConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Creates a client from `BITNET_API_URL`
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(BitNetConfig::from_env())
    }

    pub fn builder() -> BitNetBuilder {
        BitNetBuilder::new()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub const fn config(&self) -> &BitNetConfig {
        &self.config
    }

    /// Static model catalog
    pub fn models(&self) -> &'static [ModelDescriptor] {
        models::all_models()
    }

    pub fn model(&self, id: &str) -> Option<&'static ModelDescriptor> {
        models::get_model(id)
    }

    /// Create a chat completion.
    ///
    /// With `options.stream` set, the response body comes back as a raw byte
    /// stream; otherwise it is parsed as JSON.
    pub async fn create_chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        options: CompletionOptions,
    ) -> Result<ChatCompletion, LlmError> {
        options.validate_options()?;
        let body = ChatCompletionRequest::new(&messages, &options);
        let response = self
            .post_json(endpoint::CHAT_COMPLETIONS_PATH, &body, options.stream)
            .await?;

        if options.stream {
            return Ok(ChatCompletion::Stream(body_stream(response)));
        }
        parse_json_response(response).await.map(ChatCompletion::Json)
    }

    /// Create a text completion. Never streams.
    pub async fn create_completion(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<Value, LlmError> {
        options.validate_options()?;
        let body = CompletionRequest::new(prompt, &options);
        let response = self
            .post_json(endpoint::COMPLETIONS_PATH, &body, false)
            .await?;
        parse_json_response(response).await
    }

    /// Probe `/health`.
    ///
    /// True iff the server answers with a success status within the
    /// configured health check timeout. Never fails.
    pub async fn health_check(&self) -> bool {
        let url = self.config.endpoint(endpoint::HEALTH_PATH);
        let result = self
            .http_client
            .get(&url)
            .timeout(self.config.health_check_timeout)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    tracing::debug!(
                        target: "bitnet_provider::http",
                        provider=%provider::ID, url=%url, status=%status.as_u16(),
                        "health check returned non-success status"
                    );
                }
                status.is_success()
            }
            Err(e) => {
                tracing::warn!("BitNet health check failed: {}", e);
                false
            }
        }
    }

    /// List models.
    ///
    /// Returns the backend's own `/v1/models` body when it answers; otherwise
    /// a list synthesized from the static catalog. Never fails.
    pub async fn get_models(&self) -> Value {
        match self.fetch_models().await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Failed to fetch models: {}", e);
                serde_json::to_value(models::fallback_model_list())
                    .unwrap_or_else(|_| serde_json::json!({ "object": "list", "data": [] }))
            }
        }
    }

    async fn fetch_models(&self) -> Result<Value, LlmError> {
        let url = self.config.endpoint(endpoint::MODELS_PATH);
        let headers = HttpHeaderBuilder::new().with_json_accept().build();
        let response = self.http_client.get(&url).headers(headers).send().await?;
        let response = ensure_success(response).await?;
        parse_json_response(response).await
    }

    async fn post_json<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
        stream: bool,
    ) -> Result<reqwest::Response, LlmError> {
        let url = self.config.endpoint(path);
        let headers = HttpHeaderBuilder::new().with_json_content_type().build();

        tracing::debug!(
            target: "bitnet_provider::http",
            provider=%provider::ID, url=%url, stream=%stream,
            "sending request"
        );
        let response = match self
            .http_client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(
                    target: "bitnet_provider::http",
                    provider=%provider::ID, url=%url, stream=%stream, err=%e,
                    "request error"
                );
                return Err(e.into());
            }
        };
        tracing::debug!(
            target: "bitnet_provider::http",
            provider=%provider::ID, url=%url, status=%response.status().as_u16(),
            "response received"
        );

        ensure_success(response).await
    }
}

/// Map a non-success status to an upstream error carrying the body text.
///
/// A JSON error body is also kept as structured `details`.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(upstream_error(status.as_u16(), text))
}

fn upstream_error(status: u16, text: String) -> LlmError {
    match serde_json::from_str::<Value>(&text) {
        Ok(details) if details.is_object() => {
            LlmError::api_error_with_details(status, text, details)
        }
        _ => LlmError::api_error(status, text),
    }
}

async fn parse_json_response(response: reqwest::Response) -> Result<Value, LlmError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| LlmError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_exposes_catalog_and_base_url() {
        let client = BitNetClient::new(BitNetConfig::new("http://127.0.0.1:1/")).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:1");
        assert_eq!(client.models().len(), 4);
        assert!(client.model("bitnet-b1.58-3b").is_some());
        assert!(format!("{client:?}").contains("bitnet"));
    }

    #[test]
    fn upstream_error_keeps_json_body_as_details() {
        let body = r#"{"error":{"message":"model not found","type":"not_found"}}"#;
        match upstream_error(404, body.to_string()) {
            LlmError::ApiError {
                code,
                message,
                details,
            } => {
                assert_eq!(code, 404);
                assert_eq!(message, body);
                assert_eq!(details.unwrap()["error"]["type"], "not_found");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }

        assert_eq!(
            upstream_error(500, "boom".to_string()),
            LlmError::api_error(500, "boom")
        );
        // Bare JSON scalars are not structured details
        assert_eq!(
            upstream_error(502, "42".to_string()),
            LlmError::api_error(502, "42")
        );
    }

    #[tokio::test]
    async fn invalid_options_fail_before_sending() {
        // Nothing listens on port 1; a validation error proves no request was attempted
        let client = BitNetClient::new(BitNetConfig::new("http://127.0.0.1:1")).unwrap();
        let err = client
            .create_completion("hi", CompletionOptions::default().temperature(5.0))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::InvalidParameter(_)));
    }
}

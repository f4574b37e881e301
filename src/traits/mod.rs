//! Capability traits implemented by providers.

mod completion;
mod model_listing;

pub use completion::CompletionCapability;
pub use model_listing::ModelListingCapability;

use async_trait::async_trait;

use crate::defaults::provider;
use crate::error::LlmError;
use crate::providers::bitnet::BitNetClient;
use crate::types::{ChatCompletion, ChatMessage, CompletionOptions, ModelDescriptor};

/// A provider a host can load by name
pub trait InferenceProvider: CompletionCapability + ModelListingCapability {
    fn id(&self) -> &str;

    fn display_name(&self) -> &str;
}

#[async_trait]
impl CompletionCapability for BitNetClient {
    async fn create_chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        options: CompletionOptions,
    ) -> Result<ChatCompletion, LlmError> {
        BitNetClient::create_chat_completion(self, messages, options).await
    }

    async fn create_completion(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<serde_json::Value, LlmError> {
        BitNetClient::create_completion(self, prompt, options).await
    }
}

#[async_trait]
impl ModelListingCapability for BitNetClient {
    fn models(&self) -> &'static [ModelDescriptor] {
        BitNetClient::models(self)
    }

    async fn get_models(&self) -> serde_json::Value {
        BitNetClient::get_models(self).await
    }

    async fn health_check(&self) -> bool {
        BitNetClient::health_check(self).await
    }
}

impl InferenceProvider for BitNetClient {
    fn id(&self) -> &str {
        provider::ID
    }

    fn display_name(&self) -> &str {
        provider::DISPLAY_NAME
    }
}

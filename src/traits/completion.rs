//! Completion capability trait

use crate::error::LlmError;
use crate::types::{ChatCompletion, ChatMessage, CompletionOptions};
use async_trait::async_trait;

#[async_trait]
pub trait CompletionCapability: Send + Sync {
    async fn create_chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        options: CompletionOptions,
    ) -> Result<ChatCompletion, LlmError>;

    async fn create_completion(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<serde_json::Value, LlmError>;
}

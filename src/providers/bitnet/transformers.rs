//! Request body construction for the OpenAI-compatible endpoints.

use serde::Serialize;

use crate::types::{ChatMessage, CompletionOptions, StopSequence};

/// Body of `POST /v1/chat/completions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn new(messages: &'a [ChatMessage], options: &'a CompletionOptions) -> Self {
        Self {
            model: &options.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            stream: options.stream,
        }
    }
}

/// Body of `POST /v1/completions`
///
/// `stop` is always sent, as `null` when unset. There is no `stream` field:
/// text completion never streams.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stop: Option<&'a StopSequence>,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(prompt: &'a str, options: &'a CompletionOptions) -> Self {
        Self {
            model: &options.model,
            prompt,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            stop: options.stop.as_ref(),
        }
    }
}

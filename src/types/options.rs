//! Per-call generation options.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::defaults::generation;
use crate::error::LlmError;

/// Stop sequence(s) for text completion: a single string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopSequence {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for StopSequence {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for StopSequence {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for StopSequence {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<Vec<&str>> for StopSequence {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(str::to_string).collect())
    }
}

/// Options for a chat or text completion call.
///
/// Any field the caller leaves out takes its documented default, both when
/// built in Rust (`CompletionOptions::default()`) and when deserialized from
/// the host's camelCase JSON (`{"maxTokens": 128}`). `stream` only applies to
/// chat; `stop` only applies to text completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CompletionOptions {
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    #[validate(range(min = 1))]
    pub max_tokens: u32,
    pub stream: bool,
    pub stop: Option<StopSequence>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: generation::MODEL.to_string(),
            temperature: generation::TEMPERATURE,
            max_tokens: generation::MAX_TOKENS,
            stream: generation::STREAM,
            stop: None,
        }
    }
}

impl CompletionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub const fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn stop(mut self, stop: impl Into<StopSequence>) -> Self {
        self.stop = Some(stop.into());
        self
    }

    /// Check ranges before anything goes on the wire.
    pub fn validate_options(&self) -> Result<(), LlmError> {
        // NaN fails every range comparison and would serialize as null
        if !self.temperature.is_finite() {
            return Err(LlmError::InvalidParameter(format!(
                "temperature must be a finite number, got {}",
                self.temperature
            )));
        }
        self.validate().map_err(LlmError::from)
    }
}

//! Completion results returned by providers.

use serde_json::Value;

use crate::error::LlmError;

use super::streaming::ByteStream;

/// Result of a chat completion call
pub enum ChatCompletion {
    /// Parsed response body of a non-streaming request
    Json(Value),
    /// Undecoded response body of a streaming request
    Stream(ByteStream),
}

impl ChatCompletion {
    pub const fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Stream(_) => None,
        }
    }

    /// Take the JSON body; fails for streaming responses
    pub fn into_json(self) -> Result<Value, LlmError> {
        match self {
            Self::Json(v) => Ok(v),
            Self::Stream(_) => Err(LlmError::InvalidParameter(
                "chat completion was requested with stream=true".to_string(),
            )),
        }
    }

    /// Take the body stream; fails for non-streaming responses
    pub fn into_stream(self) -> Result<ByteStream, LlmError> {
        match self {
            Self::Stream(s) => Ok(s),
            Self::Json(_) => Err(LlmError::InvalidParameter(
                "chat completion was requested with stream=false".to_string(),
            )),
        }
    }
}

impl std::fmt::Debug for ChatCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(v) => f.debug_tuple("Json").field(v).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

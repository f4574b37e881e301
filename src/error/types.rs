//! Core error types

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors produced when talking to a BitNet backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// The backend answered with a non-success HTTP status.
    ///
    /// `message` holds the raw response body text.
    #[error("BitNet API error: {code} - {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// The request could not be completed
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Could not connect to the backend
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request timed out
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// A success response carried a body that is not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Reading a streamed body failed midway
    #[error("Stream error: {0}")]
    StreamError(String),

    /// A request option is outside its accepted range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// HTTP client configuration is invalid (header, proxy, ...)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl LlmError {
    /// Create an upstream error from a status code and body text
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create an upstream error with extra structured details
    pub fn api_error_with_details(
        code: u16,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: Some(details),
        }
    }

    /// HTTP status code reported by the backend, if any
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True when the backend responded with a non-success status
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    /// True when the network call itself could not complete
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ConnectionError(_) | Self::TimeoutError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_and_body() {
        let err = LlmError::api_error(500, "boom");
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
        assert_eq!(msg, "BitNet API error: 500 - boom");
    }

    #[test]
    fn classification_helpers() {
        let upstream = LlmError::api_error(404, "missing");
        assert!(upstream.is_upstream());
        assert!(!upstream.is_transport());
        assert_eq!(upstream.status_code(), Some(404));

        for transport in [
            LlmError::HttpError("x".into()),
            LlmError::ConnectionError("refused".into()),
            LlmError::TimeoutError("slow".into()),
        ] {
            assert!(transport.is_transport());
            assert!(!transport.is_upstream());
            assert_eq!(transport.status_code(), None);
        }

        assert!(!LlmError::ParseError("bad".into()).is_transport());
    }

    #[test]
    fn details_are_kept() {
        let err = LlmError::api_error_with_details(
            502,
            "bad gateway",
            serde_json::json!({ "provider": "bitnet" }),
        );
        match err {
            LlmError::ApiError { details, .. } => {
                assert_eq!(details.unwrap()["provider"], "bitnet");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}

//! Error Handling Module
//!
//! This module provides the error type shared by every operation in the crate:
//! - Core error type (`LlmError`) and its classification helpers
//! - Type conversions from reqwest, serde_json and validator errors
//!
//! # Example
//!
//! ```rust,ignore
//! use bitnet_provider::error::LlmError;
//!
//! let error = LlmError::api_error(500, "boom");
//! assert_eq!(error.status_code(), Some(500));
//! assert!(error.is_upstream());
//! ```

// Module declarations
mod conversions;
pub mod types;

// Re-exports for public API
pub use types::*;

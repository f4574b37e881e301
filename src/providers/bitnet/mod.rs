//! BitNet Provider Module
//!
//! Talks to a BitNet inference server (`llama-server` with 1.58-bit weights)
//! through its OpenAI-compatible REST endpoints:
//!
//! - `POST /v1/chat/completions`
//! - `POST /v1/completions`
//! - `GET /health`
//! - `GET /v1/models`
//!
//! # Example Usage
//! ```rust,no_run
//! use bitnet_provider::prelude::*;
//!
//! # async fn example() -> Result<(), LlmError> {
//! let client = BitNetBuilder::new()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let completion = client
//!     .create_completion("Once upon a time", CompletionOptions::default().stop("\n"))
//!     .await?;
//! println!("{completion}");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod model_constants;
pub mod models;
pub mod streaming;
pub mod transformers;

pub use builder::BitNetBuilder;
pub use client::BitNetClient;
pub use config::BitNetConfig;
pub use models::{all_models, fallback_model_list, get_model};

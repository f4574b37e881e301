//! # bitnet-provider
//!
//! A thin provider for BitNet inference servers. BitNet models use 1.58-bit
//! quantization and are typically served by `llama-server`, which exposes an
//! OpenAI-compatible REST API. This crate forwards chat and text completion
//! requests to such a server and carries a small static catalog of the model
//! variants it is expected to host.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitnet_provider::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LlmError> {
//!     // Read BITNET_API_URL once, at startup
//!     let client = BitNetClient::new(BitNetConfig::from_env())?;
//!
//!     if !client.health_check().await {
//!         eprintln!("BitNet server is not reachable");
//!     }
//!
//!     let response = client
//!         .create_chat_completion(
//!             vec![ChatMessage::user("Hello!")],
//!             CompletionOptions::default().temperature(0.2),
//!         )
//!         .await?
//!         .into_json()?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
//!
//! ## Provider Registry
//!
//! Hosts that load providers by name go through [`registry::ProviderRegistry`]:
//!
//! ```rust,no_run
//! use bitnet_provider::prelude::*;
//!
//! # fn example() -> Result<(), LlmError> {
//! let registry = ProviderRegistry::with_bitnet(BitNetConfig::from_env())?;
//! let provider = registry.get("bitnet").expect("bitnet is registered");
//! assert_eq!(provider.display_name(), "BitNet 1-bit LLM");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod defaults;
pub mod error;
pub mod execution;
pub mod providers;
pub mod registry;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use error::LlmError;
pub use providers::bitnet::{BitNetBuilder, BitNetClient, BitNetConfig};
pub use types::ChatCompletion;

/// Model id constants for the BitNet catalog
pub mod models {
    pub use crate::providers::bitnet::model_constants::*;
}

/// Commonly used items
pub mod prelude {
    pub use crate::error::LlmError;
    pub use crate::providers::bitnet::{BitNetBuilder, BitNetClient, BitNetConfig};
    pub use crate::registry::ProviderRegistry;
    pub use crate::traits::{CompletionCapability, InferenceProvider, ModelListingCapability};
    pub use crate::types::{
        ByteStream, ChatCompletion, ChatMessage, CompletionOptions, HttpConfig, ModelCapability,
        ModelDescriptor, ModelList, StopSequence,
    };
}

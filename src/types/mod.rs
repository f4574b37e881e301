//! Typed request, option, result and catalog shapes.

pub mod chat;
pub mod completion;
pub mod http;
pub mod models;
pub mod options;
pub mod streaming;

pub use chat::ChatMessage;
pub use completion::ChatCompletion;
pub use http::{HttpConfig, HttpConfigBuilder};
pub use models::{ModelCapability, ModelDescriptor, ModelEntry, ModelList};
pub use options::{CompletionOptions, StopSequence};
pub use streaming::{ByteStream, collect_bytes};

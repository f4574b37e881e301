//! Streaming body type shared by providers.
//!
//! Streaming chat responses are handed back as bytes; chunk parsing is left to
//! the caller.

use bytes::Bytes;
use futures::Stream;
use futures_util::StreamExt;
use std::pin::Pin;

use crate::error::LlmError;

/// Byte Stream - the undecoded body of a streaming response
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, LlmError>> + Send>>;

/// Drain a stream into one buffer
pub async fn collect_bytes(mut stream: ByteStream) -> Result<Vec<u8>, LlmError> {
    let mut buf = Vec::new();
    while let Some(chunk) = stream.next().await {
        buf.extend_from_slice(&chunk?);
    }
    Ok(buf)
}

//! Raw response body streaming.

use futures_util::StreamExt;

use crate::error::LlmError;
use crate::types::ByteStream;

/// Wrap a response body as a [`ByteStream`]
pub fn body_stream(response: reqwest::Response) -> ByteStream {
    Box::pin(
        response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| LlmError::StreamError(e.to_string()))),
    )
}

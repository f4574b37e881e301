//! Streaming fixtures: SSE bodies as an OpenAI-compatible server would send them

use futures_util::StreamExt;

use bitnet_provider::prelude::*;

/// Build an SSE body from JSON chunks, terminated by `data: [DONE]`
pub fn sse_body(chunks: &[serde_json::Value]) -> Vec<u8> {
    let mut out = String::new();
    for chunk in chunks {
        out.push_str("data: ");
        out.push_str(&chunk.to_string());
        out.push_str("\n\n");
    }
    out.push_str("data: [DONE]\n\n");
    out.into_bytes()
}

/// Delta chunks for a short assistant reply
pub fn chat_delta_chunks() -> Vec<serde_json::Value> {
    ["Hel", "lo", "!"]
        .iter()
        .map(|piece| {
            serde_json::json!({
                "id": "chatcmpl-1",
                "object": "chat.completion.chunk",
                "model": "bitnet-b1.58-2b",
                "choices": [{ "index": 0, "delta": { "content": piece }, "finish_reason": null }]
            })
        })
        .collect()
}

/// Drain a byte stream, counting chunks and concatenating their bytes
pub async fn drain(mut stream: ByteStream) -> (usize, Vec<u8>) {
    let mut count = 0;
    let mut buf = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.expect("stream chunk");
        count += 1;
        buf.extend_from_slice(&chunk);
    }
    (count, buf)
}

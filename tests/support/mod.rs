//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod stream_fixture;

use bitnet_provider::prelude::*;
use std::time::Duration;
use wiremock::MockServer;

/// Base URL of a local port nothing listens on
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Client pointed at a mock server, with a short health probe bound
pub fn client_for(server: &MockServer) -> BitNetClient {
    BitNetBuilder::new()
        .base_url(server.uri())
        .health_check_timeout(Duration::from_millis(500))
        .build()
        .expect("client builds")
}

/// Client pointed at a port that refuses connections
pub fn refused_client() -> BitNetClient {
    BitNetBuilder::new()
        .base_url(refused_base_url())
        .health_check_timeout(Duration::from_millis(500))
        .build()
        .expect("client builds")
}

/// A non-streaming chat completion as returned by llama-server
pub fn chat_response() -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "bitnet-b1.58-2b",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hello! How can I help?" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19 }
    })
}

/// A text completion as returned by llama-server
pub fn completion_response() -> serde_json::Value {
    serde_json::json!({
        "id": "cmpl-42",
        "object": "text_completion",
        "created": 1700000000,
        "model": "bitnet-b1.58-2b",
        "choices": [{ "index": 0, "text": " there was a tiny model.", "finish_reason": "stop" }]
    })
}

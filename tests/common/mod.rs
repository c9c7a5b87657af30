pub mod mocks;

use cluster_insights::{
    handler::{AppContext, ProxyRequest},
    inference::{ClaudeMessages, JSON_CONTENT_TYPE, ModelResponse},
};
use mocks::MockInference;
use serde_json::{Value, json};
use std::sync::Arc;

/// Context wired to a mocked inference client and the default model family.
pub fn context_with(client: MockInference) -> AppContext {
    AppContext::new(Arc::new(client), Arc::new(ClaudeMessages))
}

pub fn json_response(body: Value) -> ModelResponse {
    ModelResponse {
        content_type: Some(JSON_CONTENT_TYPE.to_string()),
        body: serde_json::to_vec(&body).unwrap(),
    }
}

/// Bedrock-shaped Claude reply carrying a single text block.
pub fn claude_reply(text: &str) -> ModelResponse {
    json_response(json!({
        "id": "msg_bdrk_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-haiku-20240307",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 412, "output_tokens": 7}
    }))
}

pub fn event(body: &str) -> ProxyRequest {
    ProxyRequest::from_body(body)
}

pub fn sample_metrics() -> Value {
    json!({
        "timestamp": "2024-07-01T12:00:00Z",
        "clusters": [
            {"name": "prod-eu", "nodes": 12, "pods": 340, "cpuUsage": 71.5, "memoryUsage": 64.2},
            {"name": "staging", "nodes": 3, "pods": 41, "cpuUsage": 18.0, "memoryUsage": 22.7}
        ]
    })
}

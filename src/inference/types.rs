use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Envelope handed to the inference endpoint. `body` is the already
/// serialized, model-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub model_id: String,
    pub content_type: String,
    pub accept: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelResponse {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnthropicRequest {
    pub anthropic_version: String,
    pub messages: Vec<AnthropicMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnthropicMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicResponse {
    pub content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LlamaRequest {
    pub prompt: String,
    pub max_gen_len: u32,
    pub temperature: f32,
    pub top_p: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlamaResponse {
    pub generation: String,
}

impl ModelRequest {
    pub fn json(model_id: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            model_id: model_id.into(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            accept: JSON_CONTENT_TYPE.to_string(),
            body,
        }
    }
}

impl ModelResponse {
    /// Rejects bodies the endpoint labelled as something other than JSON.
    /// A missing content type is let through to the decoder.
    pub fn ensure_json(&self) -> Result<()> {
        match self.content_type.as_deref() {
            Some(content_type) if !content_type.starts_with(JSON_CONTENT_TYPE) => {
                Err(Error::unexpected_response(format!(
                    "Model response has content type '{}'",
                    content_type
                )))
            }
            _ => Ok(()),
        }
    }
}

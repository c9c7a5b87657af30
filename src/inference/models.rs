use super::types::*;
use crate::{Error, Result, config::ModelKind};
use std::sync::Arc;

pub const CLAUDE_3_HAIKU_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const ANTHROPIC_BEDROCK_VERSION: &str = "bedrock-2023-05-31";
pub const LLAMA3_8B_INSTRUCT_MODEL_ID: &str = "meta.llama3-8b-instruct-v1:0";

/// Request building and response decoding for one model family.
pub trait ModelFamily: Send + Sync {
    fn model_id(&self) -> &str;

    fn build_request(&self, prompt: &str) -> Result<ModelRequest>;

    /// Reads the generated text out of a response. Fails on anything that
    /// does not match the family's response schema.
    fn extract_text(&self, response: &ModelResponse) -> Result<String>;
}

impl ModelKind {
    pub fn family(self) -> Arc<dyn ModelFamily> {
        match self {
            ModelKind::Claude => Arc::new(ClaudeMessages),
            ModelKind::Llama3 => Arc::new(Llama3Instruct),
        }
    }
}

/// Anthropic Messages API as exposed by Bedrock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeMessages;

impl ClaudeMessages {
    pub const MAX_TOKENS: u32 = 500;
    pub const TEMPERATURE: f32 = 0.3;
    pub const TOP_P: f32 = 0.8;
    pub const TOP_K: u32 = 150;
}

impl ModelFamily for ClaudeMessages {
    fn model_id(&self) -> &str {
        CLAUDE_3_HAIKU_MODEL_ID
    }

    fn build_request(&self, prompt: &str) -> Result<ModelRequest> {
        let body = AnthropicRequest {
            anthropic_version: ANTHROPIC_BEDROCK_VERSION.to_string(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: Self::MAX_TOKENS,
            temperature: Self::TEMPERATURE,
            top_p: Self::TOP_P,
            top_k: Self::TOP_K,
        };

        Ok(ModelRequest::json(self.model_id(), serde_json::to_vec(&body)?))
    }

    fn extract_text(&self, response: &ModelResponse) -> Result<String> {
        response.ensure_json()?;
        let decoded: AnthropicResponse = serde_json::from_slice(&response.body)
            .map_err(|e| Error::unexpected_response(format!("Undecodable Claude response: {}", e)))?;

        let block = decoded
            .content
            .into_iter()
            .next()
            .ok_or_else(|| Error::unexpected_response("Claude response has no content blocks"))?;

        if let Some(block_type) = block.block_type.as_deref() {
            if block_type != "text" {
                return Err(Error::unexpected_response(format!(
                    "First content block has type '{}', expected 'text'",
                    block_type
                )));
            }
        }

        block
            .text
            .ok_or_else(|| Error::unexpected_response("First content block has no text"))
    }
}

/// Meta Llama 3 instruct models, which take a raw prompt carrying the chat
/// template tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Llama3Instruct;

impl Llama3Instruct {
    pub const MAX_GEN_LEN: u32 = 512;
    pub const TEMPERATURE: f32 = 0.3;
    pub const TOP_P: f32 = 0.5;

    pub fn chat_prompt(prompt: &str) -> String {
        format!(
            "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\n{}<|eot_id|><|start_header_id|>assistant<|end_header_id|>\n\n",
            prompt
        )
    }
}

impl ModelFamily for Llama3Instruct {
    fn model_id(&self) -> &str {
        LLAMA3_8B_INSTRUCT_MODEL_ID
    }

    fn build_request(&self, prompt: &str) -> Result<ModelRequest> {
        let body = LlamaRequest {
            prompt: Self::chat_prompt(prompt),
            max_gen_len: Self::MAX_GEN_LEN,
            temperature: Self::TEMPERATURE,
            top_p: Self::TOP_P,
        };

        Ok(ModelRequest::json(self.model_id(), serde_json::to_vec(&body)?))
    }

    fn extract_text(&self, response: &ModelResponse) -> Result<String> {
        response.ensure_json()?;
        let decoded: LlamaResponse = serde_json::from_slice(&response.body)
            .map_err(|e| Error::unexpected_response(format!("Undecodable Llama response: {}", e)))?;

        Ok(decoded.generation)
    }
}

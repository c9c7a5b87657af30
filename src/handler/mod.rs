mod prompt;
mod types;

pub use prompt::render_prompt;
pub use types::*;

use crate::{
    Error, Result,
    config::InferenceConfig,
    inference::{BedrockClient, InferenceClient, ModelFamily},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span};

/// Process-wide dependencies of the handler.
///
/// Built once at startup and cloned into every invocation; the clones share
/// the same client, so connection pooling spans invocations. There is no
/// teardown: the context lives until the process exits.
#[derive(Clone)]
pub struct AppContext {
    pub client: Arc<dyn InferenceClient>,
    pub model: Arc<dyn ModelFamily>,
}

impl AppContext {
    pub fn new(client: Arc<dyn InferenceClient>, model: Arc<dyn ModelFamily>) -> Self {
        Self { client, model }
    }

    pub async fn from_config(config: &InferenceConfig) -> Self {
        let client = BedrockClient::from_config(config).await;
        Self::new(Arc::new(client), config.model.family())
    }
}

/// Turns a proxy request into a proxy response. Every failure along the way
/// is logged and collapsed into the generic 500 response.
pub async fn handle(ctx: &AppContext, request: ProxyRequest) -> ProxyResponse {
    let request_id = request.request_id().unwrap_or("-").to_string();
    let span = info_span!("invocation", request_id = %request_id);

    async move {
        info!("Handling inference request with model {}", ctx.model.model_id());

        match process(ctx, request).await {
            Ok(text) => {
                info!("Inference succeeded, {} bytes generated", text.len());
                ProxyResponse::success(&text)
            }
            Err(e) => {
                error!("Error: {}", e);
                ProxyResponse::failure()
            }
        }
    }
    .instrument(span)
    .await
}

async fn process(ctx: &AppContext, request: ProxyRequest) -> Result<String> {
    let input_data = extract_input_data(request.body_text()?)?;

    let prompt = render_prompt(&input_data)?;
    debug!("Rendered prompt of {} bytes", prompt.len());

    let model_request = ctx.model.build_request(&prompt)?;
    let response = ctx.client.invoke(model_request).await?;

    ctx.model.extract_text(&response)
}

/// Pulls `inputData` out of the request body. A missing `inputData` key is
/// not an error and yields `null`.
pub fn extract_input_data(body: Option<&str>) -> Result<Value> {
    let body = body.ok_or_else(|| Error::malformed_input("Request has no body"))?;

    let parsed: Value = serde_json::from_str(body)
        .map_err(|e| Error::malformed_input(format!("Body is not valid JSON: {}", e)))?;

    match parsed {
        Value::Object(mut map) => Ok(map.remove("inputData").unwrap_or(Value::Null)),
        other => Err(Error::malformed_input(format!(
            "Body must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

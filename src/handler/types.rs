use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing the request";

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOW_METHODS: &str = "OPTIONS,POST";

/// API Gateway proxy integration event. Everything except the body and the
/// request id is ignored. `body` is kept untyped so that events carrying a
/// non-string body still reach the handler and get a 500.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProxyRequest {
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(Value::String(body.into())),
            request_context: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_context = Some(RequestContext {
            request_id: Some(request_id.into()),
        });
        self
    }

    /// The textual body, `None` when absent or `null`.
    pub fn body_text(&self) -> Result<Option<&str>> {
        match &self.body {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.as_str())),
            Some(_) => Err(Error::malformed_input("Request body is not a string")),
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_context
            .as_ref()
            .and_then(|ctx| ctx.request_id.as_deref())
    }
}

impl ProxyResponse {
    /// 200 carrying the generated text as a JSON string literal.
    pub fn success(text: &str) -> Self {
        Self {
            status_code: 200,
            headers: cors_headers(),
            body: Value::String(text.to_string()).to_string(),
        }
    }

    pub fn failure() -> Self {
        Self {
            status_code: 500,
            headers: cors_headers(),
            body: json!({ "error": GENERIC_ERROR_MESSAGE }).to_string(),
        }
    }
}

pub fn cors_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Access-Control-Allow-Origin".to_string(), ALLOW_ORIGIN.to_string()),
        ("Access-Control-Allow-Headers".to_string(), ALLOW_HEADERS.to_string()),
        ("Access-Control-Allow-Methods".to_string(), ALLOW_METHODS.to_string()),
    ])
}

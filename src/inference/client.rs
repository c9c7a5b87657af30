use super::types::{ModelRequest, ModelResponse};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::{Client, error::DisplayErrorContext, primitives::Blob};
use tracing::debug;

/// Network seam to the hosted model. Implementations are shared by every
/// concurrent invocation and must not hold per-request state.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn invoke(&self, request: ModelRequest) -> Result<ModelResponse>;
}

#[derive(Clone, Debug)]
pub struct BedrockClient {
    client: Client,
}

impl BedrockClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolves credentials and region through the AWS default chain,
    /// overriding the region and endpoint when configured.
    pub async fn from_config(config: &InferenceConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        debug!(
            "Bedrock client configured for region {:?}",
            sdk_config.region().map(|r| r.to_string())
        );

        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl InferenceClient for BedrockClient {
    async fn invoke(&self, request: ModelRequest) -> Result<ModelResponse> {
        debug!(
            "Invoking model {} with {} byte payload",
            request.model_id,
            request.body.len()
        );

        let output = self
            .client
            .invoke_model()
            .model_id(request.model_id)
            .content_type(request.content_type)
            .accept(request.accept)
            .body(Blob::new(request.body))
            .send()
            .await
            .map_err(|e| Error::invocation(DisplayErrorContext(&e).to_string()))?;

        let content_type = Some(output.content_type().to_string()).filter(|ct| !ct.is_empty());
        let body = output.body.into_inner();

        debug!("Received {} byte model response", body.len());

        Ok(ModelResponse { content_type, body })
    }
}

use async_trait::async_trait;
use cluster_insights::{
    Result,
    inference::{InferenceClient, ModelRequest, ModelResponse},
};
use mockall::mock;

mock! {
    pub Inference {}

    #[async_trait]
    impl InferenceClient for Inference {
        async fn invoke(&self, request: ModelRequest) -> Result<ModelResponse>;
    }
}

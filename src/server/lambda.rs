use crate::{
    Error, Result,
    handler::{AppContext, ProxyRequest, handle},
};
use lambda_runtime::{LambdaEvent, service_fn};
use tracing::info;

/// Set by the Lambda execution environment.
pub const RUNTIME_API_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

pub async fn run(ctx: AppContext) -> Result<()> {
    info!("Starting Lambda runtime loop");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyRequest>| {
        let ctx = ctx.clone();
        async move {
            let (mut request, context) = event.into_parts();
            if request.request_id().is_none() {
                request = request.with_request_id(context.request_id);
            }
            Ok::<_, lambda_runtime::Error>(handle(&ctx, request).await)
        }
    }))
    .await
    .map_err(|e| Error::internal(format!("Lambda runtime error: {}", e)))
}

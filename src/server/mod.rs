pub mod handlers;
pub mod lambda;

use crate::{
    Result,
    config::{Config, ServerConfig},
    handler::AppContext,
};
use axum::{Router, routing::post};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Serves Lambda invocations when running inside Lambda, plain HTTP
/// otherwise.
pub async fn run(config: Config, ctx: AppContext) -> Result<()> {
    if std::env::var_os(lambda::RUNTIME_API_ENV).is_some() {
        return lambda::run(ctx).await;
    }

    serve_http(&config.server, ctx).await
}

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", post(handlers::inference))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn serve_http(config: &ServerConfig, ctx: AppContext) -> Result<()> {
    let app = router(ctx);

    let addr = SocketAddr::new(config.host.parse()?, config.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

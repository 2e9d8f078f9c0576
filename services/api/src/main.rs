use anyhow::Context;
use axum::http::HeaderValue;
use tracing::info;

use playground_api::config::ApiConfig;
use playground_api::router::build_router;
use playground_api::state::AppState;
use playground_core::middleware::cors_layer;
use playground_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env();

    let origin = HeaderValue::from_str(&config.cors_allowed_origin)
        .context("invalid CORS_ALLOWED_ORIGIN")?;
    let router = build_router(AppState::from_config(&config), cors_layer(origin));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(cors_allowed_origin = %config.cors_allowed_origin, "api service listening on {addr}");
    axum::serve(listener, router).await.context("server error")
}

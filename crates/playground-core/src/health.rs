use axum::{Router, http::StatusCode, routing::get};

/// Liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe. Nothing to wait on: no stores, no upstreams.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// `GET /healthz` and `GET /readyz`, mergeable into any service router.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use playground_core::error::{method_not_allowed, not_found};
use playground_core::health::health_routes;
use playground_core::middleware::with_http_layers;

use crate::handlers::{user::get_user, weather::get_weather};
use crate::state::AppState;

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let router = Router::new()
        // Playground, GET only
        // `get` also answers HEAD unless HEAD is routed explicitly.
        .route(
            "/api/user",
            get(get_user)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/weather",
            get(get_weather)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .merge(health_routes())
        .fallback(not_found)
        .with_state(state);
    with_http_layers(router, cors)
}

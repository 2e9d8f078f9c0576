use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::Utc;
use serde::Deserialize;

use playground_auth::{header::AuthorizationHeader, validate_bearer};

use crate::domain::weather::{DEFAULT_CITY, WeatherReport};
use crate::error::ApiError;
use crate::state::AppState;

// ── GET /api/weather ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

pub async fn get_weather(
    State(state): State<AppState>,
    AuthorizationHeader(authorization): AuthorizationHeader,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    validate_bearer(authorization.as_deref(), &state.api_key).into_result()?;
    // An unparseable query (e.g. a repeated `city`) falls back to the default city.
    let city = query
        .ok()
        .and_then(|Query(q)| q.city)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CITY.to_owned());
    Ok(Json(WeatherReport::mock(city, Utc::now())))
}

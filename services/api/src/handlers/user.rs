use axum::{Json, extract::State};

use playground_auth::{header::CookieHeader, validate_session};

use crate::domain::prefill::PlaygroundPrefill;
use crate::error::ApiError;
use crate::state::AppState;

// ── GET /api/user ────────────────────────────────────────────────────────────

/// Playground prefill for the logged-in portal user.
///
/// Requires the `session` cookie. The response hands the portal the API key
/// to place in the playground's `Authorization` header.
pub async fn get_user(
    State(state): State<AppState>,
    CookieHeader(cookie): CookieHeader,
) -> Result<Json<PlaygroundPrefill>, ApiError> {
    validate_session(cookie.as_deref(), &state.session_secret).into_result()?;
    Ok(Json(PlaygroundPrefill::new(state.user, &state.api_key)))
}

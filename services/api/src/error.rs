use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use playground_auth::UnauthorizedReason;
use playground_core::error::ErrorBody;

/// Errors returned by the API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Unauthorized(#[from] UnauthorizedReason),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Expected client errors; TraceLayer records the status, so nothing is logged here.
        match self {
            Self::Unauthorized(reason) => ErrorBody::new("Unauthorized", reason.to_string())
                .into_response_with(StatusCode::UNAUTHORIZED),
        }
    }
}

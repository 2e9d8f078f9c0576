use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body shared by every error response: `{"error": ..., "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }

    /// Render with the given status.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, axum::Json(self)).into_response()
    }
}

/// Routing-level errors produced before any handler logic runs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Only GET requests are supported")]
    MethodNotAllowed,
    #[error("No route matches the requested path")]
    NotFound,
}

impl AppError {
    /// Value of the `error` field in the response body.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "Method not allowed",
            Self::NotFound => "Not found",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 4xx are expected client errors; TraceLayer already records the status.
        let status = self.status();
        ErrorBody::new(self.label(), self.to_string()).into_response_with(status)
    }
}

/// Method fallback for GET-only routes: `get(handler).fallback(method_not_allowed)`.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Router fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

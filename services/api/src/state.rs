use crate::config::ApiConfig;
use crate::domain::prefill::PlaygroundUser;

/// Shared application state passed to every handler via axum `State`.
///
/// Secrets are resolved once at startup and never change afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session_secret: String,
    pub api_key: String,
    pub user: PlaygroundUser,
}

impl AppState {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            session_secret: config.session_secret.clone(),
            api_key: config.api_key.clone(),
            user: PlaygroundUser {
                email: config.user_email.clone(),
                name: config.user_name.clone(),
            },
        }
    }
}

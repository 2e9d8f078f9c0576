use playground_auth::bearer::DEFAULT_API_KEY;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION: &str = "test-session-123";
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_USER_EMAIL: &str = "test@example.com";
pub const DEFAULT_USER_NAME: &str = "Test User";

/// API service configuration loaded from environment variables.
///
/// Every field has a default, so the service starts with an empty environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// TCP port to listen on (default 3000). Env var: `API_PORT`.
    pub port: u16,
    /// Session cookie value accepted by `/api/user`. Env var: `TEST_SESSION`.
    pub session_secret: String,
    /// Bearer token accepted by `/api/weather` and handed to the playground.
    /// Env var: `TEST_API_KEY`.
    pub api_key: String,
    /// Single origin allowed by CORS (e.g. "https://docs.example.com").
    /// Env var: `CORS_ALLOWED_ORIGIN`.
    pub cors_allowed_origin: String,
    /// Email reported for the mock user. Env var: `TEST_USER_EMAIL`.
    pub user_email: String,
    /// Display name reported for the mock user. Env var: `TEST_USER_NAME`.
    pub user_name: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. An unparseable port falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        Self {
            port: lookup("API_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            session_secret: or("TEST_SESSION", DEFAULT_SESSION),
            api_key: or("TEST_API_KEY", DEFAULT_API_KEY),
            cors_allowed_origin: or("CORS_ALLOWED_ORIGIN", DEFAULT_CORS_ALLOWED_ORIGIN),
            user_email: or("TEST_USER_EMAIL", DEFAULT_USER_EMAIL),
            user_name: or("TEST_USER_NAME", DEFAULT_USER_NAME),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

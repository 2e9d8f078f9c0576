use axum::http::HeaderValue;
use axum_test::TestServer;

use playground_api::config::ApiConfig;
use playground_api::router::build_router;
use playground_api::state::AppState;
use playground_core::middleware::cors_layer;
use playground_testing::auth::MockCredentials;

pub const TEST_SESSION: &str = "test-session-123";
pub const TEST_API_KEY: &str = "sk_test_12345";
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn test_config() -> ApiConfig {
    ApiConfig::default()
}

pub fn test_server_with(config: &ApiConfig) -> TestServer {
    let cors = cors_layer(HeaderValue::from_str(&config.cors_allowed_origin).unwrap());
    TestServer::new(build_router(AppState::from_config(config), cors)).unwrap()
}

pub fn test_server() -> TestServer {
    test_server_with(&test_config())
}

/// Credentials matching the default configuration.
pub fn valid_credentials() -> MockCredentials {
    MockCredentials::new(TEST_SESSION, TEST_API_KEY)
}

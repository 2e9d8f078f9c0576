use axum::http::{HeaderName, HeaderValue, Method, StatusCode, header};

use crate::helpers::{ALLOWED_ORIGIN, test_server, valid_credentials};

fn origin(value: &'static str) -> (HeaderName, HeaderValue) {
    (header::ORIGIN, HeaderValue::from_static(value))
}

#[tokio::test]
async fn should_allow_configured_origin_with_credentials() {
    let server = test_server();
    let (name, value) = origin(ALLOWED_ORIGIN);
    let (cookie_name, cookie_value) = valid_credentials().session_cookie();
    let response = server
        .get("/api/user")
        .add_header(name, value)
        .add_header(cookie_name, cookie_value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn should_attach_cors_headers_to_unauthorized_responses() {
    let server = test_server();
    let (name, value) = origin(ALLOWED_ORIGIN);
    let response = server.get("/api/weather").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ALLOWED_ORIGIN
    );
}

#[tokio::test]
async fn should_not_allow_other_origins() {
    let server = test_server();
    let (name, value) = origin("https://evil.example.com");
    let response = server.get("/healthz").add_header(name, value).await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn should_answer_preflight() {
    let server = test_server();
    let (name, value) = origin(ALLOWED_ORIGIN);
    let response = server
        .method(Method::OPTIONS, "/api/weather")
        .add_header(name, value)
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("GET"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("authorization"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("GET"), "allow-methods {methods}");
    let allowed_headers = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(
        allowed_headers.contains("authorization"),
        "allow-headers {allowed_headers}"
    );
}

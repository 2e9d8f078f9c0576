use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use serde_json::{Value, json};

use crate::helpers::{test_server, valid_credentials};

fn method_not_allowed_body() -> Value {
    json!({ "error": "Method not allowed", "message": "Only GET requests are supported" })
}

#[tokio::test]
async fn should_reject_non_get_methods_on_playground_routes() {
    let server = test_server();
    for path in ["/api/user", "/api/weather"] {
        for method in [Method::POST, Method::PUT, Method::PATCH, Method::DELETE] {
            let response = server.method(method.clone(), path).await;
            assert_eq!(
                response.status_code(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} {path}"
            );
            assert_eq!(response.json::<Value>(), method_not_allowed_body(), "{method} {path}");
        }
    }
}

#[tokio::test]
async fn should_reject_head_on_playground_routes() {
    let server = test_server();
    for path in ["/api/user", "/api/weather"] {
        let response = server.method(Method::HEAD, path).await;
        // HEAD responses carry no body, so only the status is checked.
        assert_eq!(
            response.status_code(),
            StatusCode::METHOD_NOT_ALLOWED,
            "HEAD {path}"
        );
    }
}

#[tokio::test]
async fn should_reject_head_even_with_valid_credentials() {
    let server = test_server();

    let (name, value) = valid_credentials().session_cookie();
    let response = server
        .method(Method::HEAD, "/api/user")
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let (name, value) = valid_credentials().bearer();
    let response = server
        .method(Method::HEAD, "/api/weather")
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn should_check_method_before_credentials() {
    let server = test_server();

    // Valid credentials do not turn a POST into a success.
    let (name, value) = valid_credentials().bearer();
    let response = server.post("/api/weather").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let (name, value) = valid_credentials().session_cookie();
    let response = server.post("/api/user").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn should_return_json_404_for_unknown_path() {
    let server = test_server();
    let response = server.get("/api/unknown").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Not found", "message": "No route matches the requested path" })
    );
}

#[tokio::test]
async fn should_answer_health_probes() {
    let server = test_server();
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_generate_request_id() {
    let server = test_server();
    let response = server.get("/healthz").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap();
    assert!(uuid_like(id), "request id {id}");
}

#[tokio::test]
async fn should_propagate_client_request_id() {
    let server = test_server();
    let response = server
        .get("/healthz")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-42"),
        )
        .await;

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

fn uuid_like(id: &str) -> bool {
    id.len() == 36 && id.chars().filter(|c| *c == '-').count() == 4
}

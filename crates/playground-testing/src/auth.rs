//! Credential header builders for integration tests.
//!
//! The portal logs the user in and forwards the `session` cookie; the API
//! playground then calls protected endpoints with `Authorization: Bearer <key>`.
//! `MockCredentials` produces both headers so tests don't hand-format them.

use axum::http::{HeaderName, HeaderValue, header};
use axum_extra::extract::cookie::Cookie;
use playground_auth::bearer::BEARER_SCHEME;
use playground_auth::cookie::SESSION_COOKIE;

/// Credentials a test client presents.
pub struct MockCredentials {
    pub session: String,
    pub api_key: String,
}

impl MockCredentials {
    pub fn new(session: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            api_key: api_key.into(),
        }
    }

    /// `Cookie: session=<session>`.
    pub fn session_cookie(&self) -> (HeaderName, HeaderValue) {
        let cookie = Cookie::new(SESSION_COOKIE, self.session.clone());
        (
            header::COOKIE,
            HeaderValue::from_str(&cookie.to_string()).unwrap(),
        )
    }

    /// `Cookie: <other>; session=<session>` with an unrelated cookie first.
    pub fn session_cookie_after(&self, name: &str, value: &str) -> (HeaderName, HeaderValue) {
        let other = Cookie::new(name.to_owned(), value.to_owned());
        let session = Cookie::new(SESSION_COOKIE, self.session.clone());
        (
            header::COOKIE,
            HeaderValue::from_str(&format!("{other}; {session}")).unwrap(),
        )
    }

    /// `Authorization: Bearer <api_key>`.
    pub fn bearer(&self) -> (HeaderName, HeaderValue) {
        authorization(&format!("{BEARER_SCHEME} {}", self.api_key))
    }
}

/// `Authorization: <raw>`, for malformed-header cases.
pub fn authorization(raw: &str) -> (HeaderName, HeaderValue) {
    (header::AUTHORIZATION, HeaderValue::from_str(raw).unwrap())
}

/// `Cookie: <raw>`.
pub fn cookie(raw: &str) -> (HeaderName, HeaderValue) {
    (header::COOKIE, HeaderValue::from_str(raw).unwrap())
}

//! Raw credential headers and their extractors.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::header::{AUTHORIZATION, COOKIE};
use http::request::Parts;
use http::{HeaderMap, HeaderValue};

use crate::cookie::COOKIE_SEPARATOR;

// Non-visible-ASCII values are kept as present but empty, so a garbled
// Authorization header is reported as malformed instead of missing.
fn value_str(value: &HeaderValue) -> &str {
    value.to_str().unwrap_or("")
}

/// All `Cookie` header values joined with `"; "`, or `None` when there are none.
///
/// HTTP/2 clients may send each cookie in its own header field.
pub fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers.get_all(COOKIE).iter().map(value_str).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.join(COOKIE_SEPARATOR))
}

/// First `Authorization` header value.
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).map(value_str)
}

/// The request's `Cookie` header, joined as by [`cookie_header`]. Never rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieHeader(pub Option<String>);

/// The request's `Authorization` header, as by [`authorization_header`]. Never rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationHeader(pub Option<String>);

// Values are read synchronously and moved into a 'static future; axum-core 0.5
// declares this method as returning `impl Future + Send`.
impl<S> FromRequestParts<S> for CookieHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let value = cookie_header(&parts.headers);
        async move { Ok(Self(value)) }
    }
}

impl<S> FromRequestParts<S> for AuthorizationHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let value = authorization_header(&parts.headers).map(str::to_owned);
        async move { Ok(Self(value)) }
    }
}

//! Bearer-token validation.

use crate::outcome::{AuthOutcome, UnauthorizedReason};

/// Authorization scheme accepted by [`validate_bearer`]. Matched case-sensitively.
pub const BEARER_SCHEME: &str = "Bearer";

/// API key accepted when no override is configured.
pub const DEFAULT_API_KEY: &str = "sk_test_12345";

/// Check an `Authorization` header value against `expected_token`.
///
/// The value must be exactly `Bearer <token>`: two parts separated by a single
/// space. Anything else is `MalformedHeader`, including extra spaces, a lowercase
/// `bearer`, or another scheme.
///
/// ```
/// use playground_auth::{validate_bearer, AuthOutcome, UnauthorizedReason};
///
/// assert_eq!(validate_bearer(Some("Bearer k"), "k"), AuthOutcome::Authorized);
/// assert_eq!(
///     validate_bearer(Some("Bearer other"), "k"),
///     AuthOutcome::Unauthorized(UnauthorizedReason::InvalidToken),
/// );
/// ```
pub fn validate_bearer(auth_header: Option<&str>, expected_token: &str) -> AuthOutcome {
    let Some(header) = auth_header else {
        return UnauthorizedReason::MissingHeader.into();
    };
    let mut parts = header.split(' ');
    let token = match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) => token,
        _ => return UnauthorizedReason::MalformedHeader.into(),
    };
    if token == expected_token {
        AuthOutcome::Authorized
    } else {
        UnauthorizedReason::InvalidToken.into()
    }
}

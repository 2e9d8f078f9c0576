//! Session-cookie validation.
//!
//! Cookies are always set by the documentation portal, never by this service, so
//! parsing only covers the simple `name=value; name=value` request form. Attributes,
//! percent-encoding and `Set-Cookie` semantics are not handled.

use std::collections::HashMap;

use crate::outcome::{AuthOutcome, UnauthorizedReason};

/// Name of the cookie carrying the session value.
pub const SESSION_COOKIE: &str = "session";

/// Separator between cookie pairs in a `Cookie` header.
pub const COOKIE_SEPARATOR: &str = "; ";

/// Cookies parsed from a single `Cookie` header, borrowing from it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CookieJar<'a> {
    entries: HashMap<&'a str, Option<&'a str>>,
}

impl<'a> CookieJar<'a> {
    /// Split `header` on `"; "`, then each pair on its first `=`.
    ///
    /// A pair without `=` is kept with no value. Later duplicates overwrite earlier ones.
    ///
    /// ```
    /// use playground_auth::cookie::CookieJar;
    ///
    /// let jar = CookieJar::parse("theme=dark; token=a=b; flag; theme=light");
    /// assert_eq!(jar.get("theme"), Some("light"));
    /// assert_eq!(jar.get("token"), Some("a=b"));
    /// assert!(jar.contains("flag"));
    /// assert_eq!(jar.get("flag"), None);
    /// ```
    pub fn parse(header: &'a str) -> Self {
        let entries = header
            .split(COOKIE_SEPARATOR)
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (pair, None),
            })
            .collect();
        Self { entries }
    }

    /// Value of the cookie `name`, if present and carrying a value.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.entries.get(name).copied().flatten()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

}

/// Check the `session` cookie in `cookie_header` against `expected_session`.
///
/// | Input | Outcome |
/// |-------|---------|
/// | no header, no `session` entry, or `session` without a value | `NoSession` |
/// | `session` equal to `expected_session` | `Authorized` |
/// | any other `session` value | `InvalidSession` |
///
/// An empty value (`session=`) counts as no session.
pub fn validate_session(cookie_header: Option<&str>, expected_session: &str) -> AuthOutcome {
    let Some(header) = cookie_header else {
        return UnauthorizedReason::NoSession.into();
    };
    match CookieJar::parse(header).get(SESSION_COOKIE) {
        None | Some("") => UnauthorizedReason::NoSession.into(),
        Some(session) if session == expected_session => AuthOutcome::Authorized,
        Some(_) => UnauthorizedReason::InvalidSession.into(),
    }
}

/// Why a credential check failed.
///
/// `Display` is the message sent back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnauthorizedReason {
    #[error("No active session. Please log in.")]
    NoSession,
    #[error("Invalid session. Please log in again.")]
    InvalidSession,
    #[error("Missing Authorization header")]
    MissingHeader,
    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    MalformedHeader,
    #[error("Invalid API key")]
    InvalidToken,
}

/// Result of a single credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authorized,
    Unauthorized(UnauthorizedReason),
}

impl AuthOutcome {
    /// Convert into a `Result` so handlers can bail out with `?`.
    pub fn into_result(self) -> Result<(), UnauthorizedReason> {
        match self {
            Self::Authorized => Ok(()),
            Self::Unauthorized(reason) => Err(reason),
        }
    }
}

impl From<UnauthorizedReason> for AuthOutcome {
    fn from(reason: UnauthorizedReason) -> Self {
        Self::Unauthorized(reason)
    }
}

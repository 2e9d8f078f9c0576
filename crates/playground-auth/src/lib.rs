//! Credential checks shared by the playground endpoints.
//!
//! Provides the session-cookie and Bearer-token validators, the [`AuthOutcome`]
//! they return, and extractors that pull the raw headers out of a request.
//! Every check is a pure function of its inputs; expected secrets are passed in
//! by the caller.

pub mod bearer;
pub mod cookie;
pub mod header;
pub mod outcome;

pub use bearer::validate_bearer;
pub use cookie::validate_session;
pub use outcome::{AuthOutcome, UnauthorizedReason};

//! Test utilities for playground services.
//!
//! Builds the credential headers a documentation portal would send.
//! Import from tests only, never from production code.

pub mod auth;

//! Shared HTTP plumbing for playground services.
//!
//! Error bodies, health probes, route fallbacks, middleware layers and
//! tracing setup.

pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;

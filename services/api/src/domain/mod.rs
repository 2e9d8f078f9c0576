//! Mock payloads returned by the playground endpoints.

pub mod prefill;
pub mod weather;

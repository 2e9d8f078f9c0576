pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

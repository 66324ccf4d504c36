//! userauth: pluggable bearer-token authentication with a stateless JWT strategy.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod server;
pub mod state;
pub mod strategy;
pub mod telemetry;
pub mod token;
pub mod users;

pub use error::{Error, Result};

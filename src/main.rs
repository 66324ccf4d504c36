//! userauth demo server.
//! Used by: binary entrypoint.

use std::sync::Arc;

use userauth::config::JwtConfig;
use userauth::users::memory::MemoryUserStore;
use userauth::{server, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = JwtConfig::from_env()?;
    let users = match std::env::var("AUTH_USERS_FILE") {
        Ok(path) => MemoryUserStore::from_json(&std::fs::read_to_string(&path)?)?,
        Err(_) => MemoryUserStore::new(),
    };
    tracing::info!(users = users.len()?, "user store loaded");

    let state = state::build_state(config, Arc::new(users));
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    tracing::info!("starting userauth on {}", addr);

    server::run(state, &addr).await?;
    Ok(())
}

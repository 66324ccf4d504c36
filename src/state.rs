//! Shared application state.

use std::sync::Arc;

use crate::config::JwtConfig;
use crate::strategy::{Authenticator, JwtStrategy};
use crate::telemetry::Metrics;
use crate::users::{User, UserStore};

pub struct AppStateInner {
    pub auth: Authenticator<User>,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state(config: JwtConfig, users: Arc<dyn UserStore<User>>) -> AppState {
    tracing::info!(
        algorithm = ?config.algorithm(),
        lifetime_seconds = config.lifetime_seconds(),
        "jwt strategy configured"
    );
    Arc::new(AppStateInner {
        auth: Authenticator::single(JwtStrategy::new(config), users),
        metrics: Metrics::new(),
    })
}

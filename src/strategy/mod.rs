//! Authentication strategies and the authenticator that binds them to a user store.
//! Used by: state, http.

pub mod jwt;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::users::{AuthUser, UserStore};

pub use jwt::JwtStrategy;

/// Body returned to a client after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
}

/// One way of turning a user into a credential and a credential back into a user.
///
/// `resolve` must report every rejection as [`Error::AuthenticationFailed`];
/// only infrastructure failures such as [`Error::Store`] may pass through.
#[async_trait]
pub trait AuthStrategy<U: AuthUser>: Send + Sync {
    fn name(&self) -> &'static str;

    fn login_response(&self, user: &U) -> Result<LoginResponse>;

    async fn resolve(&self, token: &str, users: &dyn UserStore<U>) -> Result<U>;
}

/// Strategies tried in order against one user store.
pub struct Authenticator<U: AuthUser> {
    strategies: Vec<Arc<dyn AuthStrategy<U>>>,
    users: Arc<dyn UserStore<U>>,
}

impl<U: AuthUser> Authenticator<U> {
    pub fn new(
        strategies: Vec<Arc<dyn AuthStrategy<U>>>,
        users: Arc<dyn UserStore<U>>,
    ) -> Result<Self> {
        if strategies.is_empty() {
            return Err(Error::Config("at least one authentication strategy is required".into()));
        }
        Ok(Self { strategies, users })
    }

    pub fn single(strategy: impl AuthStrategy<U> + 'static, users: Arc<dyn UserStore<U>>) -> Self {
        let strategy: Arc<dyn AuthStrategy<U>> = Arc::new(strategy);
        Self {
            strategies: vec![strategy],
            users,
        }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Issues credentials with the primary strategy.
    pub fn login_response(&self, user: &U) -> Result<LoginResponse> {
        let primary = &self.strategies[0];
        let response = primary.login_response(user)?;
        tracing::info!(strategy = primary.name(), user_id = %user.id(), "login token issued");
        Ok(response)
    }

    pub async fn resolve(&self, token: &str) -> Result<U> {
        for strategy in &self.strategies {
            match strategy.resolve(token, self.users.as_ref()).await {
                Ok(user) => return Ok(user),
                Err(err) if err.is_rejection() => continue,
                Err(err) => return Err(err),
            }
        }
        Err(Error::AuthenticationFailed)
    }
}

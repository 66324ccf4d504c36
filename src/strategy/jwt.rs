//! Stateless JWT strategy: any process holding the shared secret can validate any token.
//! Used by: strategy, state.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::JwtConfig;
use crate::error::{Error, Result};
use crate::strategy::{AuthStrategy, LoginResponse};
use crate::token::{self, Claims};
use crate::users::{AuthUser, UserStore};

#[derive(Debug, Clone)]
pub struct JwtStrategy {
    config: Arc<JwtConfig>,
}

impl JwtStrategy {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn issue(&self, claims: &Claims) -> Result<String> {
        token::encode(
            claims,
            self.config.lifetime_seconds(),
            self.config.secret(),
            self.config.algorithm(),
        )
    }

    async fn authorize<U: AuthUser>(&self, token: &str, users: &dyn UserStore<U>) -> Result<U> {
        let claims = token::decode(token, self.config.secret(), self.config.algorithm())?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| Error::ClaimMissing(token::claims::USER_ID.into()))?;
        let user = users.get_by_id(&user_id).await?.ok_or(Error::UserNotFound)?;
        if !user.is_active() {
            return Err(Error::UserInactive);
        }
        Ok(user)
    }
}

#[async_trait]
impl<U: AuthUser> AuthStrategy<U> for JwtStrategy {
    fn name(&self) -> &'static str {
        "jwt"
    }

    fn login_response(&self, user: &U) -> Result<LoginResponse> {
        let token = self.issue(&Claims::for_user(user.id()))?;
        Ok(LoginResponse { token })
    }

    async fn resolve(&self, token: &str, users: &dyn UserStore<U>) -> Result<U> {
        match self.authorize(token, users).await {
            Ok(user) => Ok(user),
            Err(err) if err.is_rejection() => {
                tracing::info!(strategy = "jwt", reason = %err, "authentication rejected");
                Err(Error::AuthenticationFailed)
            }
            Err(err) => Err(err),
        }
    }
}

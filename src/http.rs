//! Bearer-token binding for axum handlers.
//! Used by: handlers, server.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::users::User;

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(Error::AuthenticationFailed)?
        .to_str()
        .map_err(|_| Error::AuthenticationFailed)?;
    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(Error::AuthenticationFailed)?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(Error::AuthenticationFailed);
    }
    Ok(token)
}

/// The authenticated user, handed to handlers as an explicit argument.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let outcome = match bearer_token(&parts.headers) {
            Ok(token) => state.auth.resolve(token).await,
            Err(err) => {
                tracing::info!("authentication rejected: no bearer token");
                Err(err)
            }
        };
        match outcome {
            Ok(user) => {
                state.metrics.record_authorized();
                Ok(CurrentUser(user))
            }
            Err(err) if err.is_rejection() => {
                state.metrics.record_rejected();
                Err(Error::AuthenticationFailed)
            }
            Err(err) => {
                state.metrics.record_store_error();
                Err(err)
            }
        }
    }
}

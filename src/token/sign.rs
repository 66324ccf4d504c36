//! HMAC token signing.
//! Used by: strategy::jwt.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};

use crate::error::{Error, Result};
use crate::token::claims::{Claims, EXP};
use crate::token::{ensure_hmac, ensure_secret, expiry_after};

pub fn encode(
    claims: &Claims,
    lifetime_seconds: u64,
    secret: &str,
    algorithm: Algorithm,
) -> Result<String> {
    encode_at(claims, lifetime_seconds, secret, algorithm, Utc::now())
}

/// Signs `claims` with `exp = issued_at + lifetime_seconds`, overriding any `exp` already present.
pub fn encode_at(
    claims: &Claims,
    lifetime_seconds: u64,
    secret: &str,
    algorithm: Algorithm,
    issued_at: DateTime<Utc>,
) -> Result<String> {
    if lifetime_seconds == 0 {
        return Err(Error::Config("token lifetime must be positive".into()));
    }
    ensure_secret(secret)?;
    ensure_hmac(algorithm)?;

    let expires_at = expiry_after(issued_at, lifetime_seconds)?;

    let mut payload = claims.clone();
    if payload.insert(EXP, expires_at.timestamp()).is_some() {
        tracing::debug!("caller-supplied exp claim overridden");
    }

    jsonwebtoken::encode(
        &Header::new(algorithm),
        &payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Signing(e.to_string()))
}

//! JWT strategy configuration, validated once at startup.
//! Used by: strategy::jwt, main.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::Algorithm;

use crate::error::{Error, Result};
use crate::token::{ensure_hmac, ensure_secret, expiry_after, parse_algorithm, DEFAULT_ALGORITHM};

pub const DEFAULT_LIFETIME_SECONDS: i64 = 3600;

#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    lifetime_seconds: u64,
    algorithm: Algorithm,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, lifetime_seconds: i64) -> Result<Self> {
        Self::with_algorithm(secret, lifetime_seconds, DEFAULT_ALGORITHM)
    }

    pub fn with_algorithm(
        secret: impl Into<String>,
        lifetime_seconds: i64,
        algorithm: Algorithm,
    ) -> Result<Self> {
        let secret = secret.into();
        ensure_secret(&secret)?;
        ensure_hmac(algorithm)?;
        let lifetime_seconds = u64::try_from(lifetime_seconds)
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                Error::Config(format!("token lifetime must be positive, got {lifetime_seconds}"))
            })?;
        expiry_after(Utc::now(), lifetime_seconds)?;
        Ok(Self {
            secret,
            lifetime_seconds,
            algorithm,
        })
    }

    /// Reads `AUTH_SECRET`, `AUTH_LIFETIME_SECONDS` and `AUTH_ALGORITHM`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secret = lookup("AUTH_SECRET")
            .ok_or_else(|| Error::Config("AUTH_SECRET is not set".into()))?;
        let lifetime_seconds = match lookup("AUTH_LIFETIME_SECONDS") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
                Error::Config(format!("AUTH_LIFETIME_SECONDS is not an integer: {raw}"))
            })?,
            None => DEFAULT_LIFETIME_SECONDS,
        };
        let algorithm = match lookup("AUTH_ALGORITHM") {
            Some(name) => parse_algorithm(&name)?,
            None => DEFAULT_ALGORITHM,
        };
        Self::with_algorithm(secret, lifetime_seconds, algorithm)
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn lifetime_seconds(&self) -> u64 {
        self.lifetime_seconds
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("lifetime_seconds", &self.lifetime_seconds)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

//! Token creation, signing, and verification.
//! Used by: strategy::jwt, config.

pub mod claims;
pub mod sign;
pub mod verify;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::Algorithm;

use crate::error::{Error, Result};

pub use claims::Claims;
pub use sign::{encode, encode_at};
pub use verify::decode;

pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Parses an algorithm name, accepting only the shared-secret HMAC family.
pub fn parse_algorithm(name: &str) -> Result<Algorithm> {
    let algorithm: Algorithm = name
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("unknown signing algorithm: {name}")))?;
    ensure_hmac(algorithm)?;
    Ok(algorithm)
}

pub(crate) fn ensure_hmac(algorithm: Algorithm) -> Result<()> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(()),
        other => Err(Error::Config(format!(
            "unsupported signing algorithm: {other:?}"
        ))),
    }
}

/// `issued_at + lifetime_seconds`, or a config error when the result leaves chrono's range.
pub(crate) fn expiry_after(issued_at: DateTime<Utc>, lifetime_seconds: u64) -> Result<DateTime<Utc>> {
    i64::try_from(lifetime_seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .ok_or_else(|| Error::Config(format!("token lifetime out of range: {lifetime_seconds}")))
}

pub(crate) fn ensure_secret(secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(Error::Config("signing secret must not be empty".into()));
    }
    Ok(())
}

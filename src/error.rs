//! Unified error types for userauth.
//! Used by: token, strategy, users, http, handlers.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("invalid signature")]
    SignatureInvalid,

    #[error("token expired")]
    TokenExpired,

    #[error("missing claim: {0}")]
    ClaimMissing(String),

    #[error("user not found")]
    UserNotFound,

    #[error("user inactive")]
    UserInactive,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("signing error: {0}")]
    Signing(String),

    #[error("user store error: {0}")]
    Store(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for every outcome that must reach callers as `AuthenticationFailed`.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::MalformedToken(_)
                | Error::SignatureInvalid
                | Error::TokenExpired
                | Error::ClaimMissing(_)
                | Error::UserNotFound
                | Error::UserInactive
                | Error::AuthenticationFailed
        )
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => Error::TokenExpired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Error::SignatureInvalid,
            ErrorKind::MissingRequiredClaim(claim) => Error::ClaimMissing(claim.clone()),
            _ => Error::MalformedToken(err.to_string()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.is_rejection() {
            return (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                "unauthorized",
            )
                .into_response();
        }
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

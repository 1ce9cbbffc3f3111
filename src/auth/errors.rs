//! Authentication failure taxonomy.
//!
//! Internal variants stay distinct for logging; at the HTTP boundary every
//! credential-shaped failure collapses into one generic 401 so the response
//! never reveals whether the identifier exists, the password was wrong, or
//! the token was malformed vs. expired.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, warn};

/// Uniform body for every authentication rejection.
pub const GENERIC_AUTH_MESSAGE: &str = "invalid credentials";

#[derive(Debug)]
pub enum AuthError {
    /// No bearer token on the request.
    MissingCredential,
    /// Signature mismatch or structurally malformed token.
    InvalidSignature,
    /// Token past its expiry.
    Expired,
    /// Identifier not present in the credential store.
    UserNotFound,
    /// Password verification failed.
    BadCredentials,
    /// Credential store I/O failure. Fails closed.
    Store(anyhow::Error),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingCredential => write!(f, "missing credential"),
            AuthError::InvalidSignature => write!(f, "invalid token signature"),
            AuthError::Expired => write!(f, "token expired"),
            AuthError::UserNotFound => write!(f, "user not found"),
            AuthError::BadCredentials => write!(f, "bad credentials"),
            AuthError::Store(e) => write!(f, "credential store failure: {e}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Store(e) => {
                warn!("credential store failure: {e:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
            other => {
                // Internal cause is logged server-side only.
                debug!("authentication rejected: {other}");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": GENERIC_AUTH_MESSAGE })),
                )
                    .into_response()
            }
        }
    }
}

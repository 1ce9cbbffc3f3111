//! JWT Token Handler
//! Mission: Issue and validate signed, time-bounded identity tokens

use crate::auth::errors::AuthError;
use crate::auth::models::{AuthenticatedIdentity, Claims, User};
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// A freshly minted token plus its lifetime in seconds.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Issuer and validator for HS256 tokens.
///
/// Constructed once at startup from the process-wide signing secret and
/// immutable thereafter; validation is a pure function of the token and the
/// clock, so a single handler is shared across all requests.
pub struct JwtHandler {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl JwtHandler {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Mint a token for a verified user: sub = username, exp = now + TTL.
    pub fn issue(&self, user: &User) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.username.clone(),
            iat: now as usize,
            exp: (now + self.ttl_seconds) as usize,
        };

        debug!(
            "issuing token for {} (expires in {}s)",
            user.username, self.ttl_seconds
        );

        let token = encode(&Header::default(), &claims, &self.encoding)
            .context("Failed to sign token")?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl_seconds,
        })
    }

    /// Validate signature and expiry, then resolve the subject claim.
    ///
    /// The token alone is the source of truth for identity; no store lookup.
    /// Zero leeway: a token is rejected the moment now >= exp.
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedIdentity, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let decoded =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidSignature,
            })?;

        // The library's expiry check is exclusive (rejects only exp < now);
        // the validity window here is now < exp, so exp == now is already
        // dead.
        if decoded.claims.exp as i64 <= Utc::now().timestamp() {
            return Err(AuthError::Expired);
        }

        Ok(AuthenticatedIdentity {
            username: decoded.claims.sub,
        })
    }
}

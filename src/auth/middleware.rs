//! Authorization Gate
//! Mission: Keep unauthenticated requests away from protected handlers

use crate::auth::errors::AuthError;
use crate::auth::jwt::JwtHandler;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Gate middleware for protected routes.
///
/// Missing or unusable `Authorization: Bearer` header short-circuits with a
/// generic rejection before the wrapped handler runs. On success the
/// resolved identity is attached to the request's extensions for handlers
/// to extract. Stateless: each evaluation is independent.
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .ok_or(AuthError::MissingCredential)?;

    let identity = jwt_handler.authenticate(&token)?;
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

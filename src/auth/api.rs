//! Authentication API Endpoints
//! Mission: Registration, login, and identity echo

use crate::auth::{
    errors::{AuthError, GENERIC_AUTH_MESSAGE},
    jwt::JwtHandler,
    models::{
        AuthenticatedIdentity, LoginRequest, LoginResponse, RegisterRequest, UserResponse,
    },
    password::PasswordHasher,
    service::Authenticator,
    user_store::UserStore,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<UserStore>,
    pub authenticator: Authenticator,
    pub hasher: PasswordHasher,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(
        user_store: Arc<UserStore>,
        hasher: PasswordHasher,
        jwt_handler: Arc<JwtHandler>,
    ) -> Self {
        let authenticator = Authenticator::new(user_store.clone(), hasher);
        Self {
            user_store,
            authenticator,
            hasher,
            jwt_handler,
        }
    }
}

// bcrypt truncates input beyond 72 bytes
const MAX_PASSWORD_LEN: usize = 72;

/// Register endpoint - POST /api/users
///
/// Creates the account and returns the sanitized record. No token: login is
/// a separate step.
pub async fn register(
    State(state): State<AuthState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthApiError> {
    let username = require_field("username", payload.username)?;
    let password = require_field("password", payload.password)?;
    let display_name = require_field("display_name", payload.display_name)?;

    reject_untrimmed("username", &username)?;
    reject_untrimmed("password", &password)?;
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AuthApiError::Validation {
            field: "password",
            message: "must be at most 72 characters",
        });
    }

    // Duplicate check before insert; the UNIQUE constraint backs this up.
    let existing = state
        .user_store
        .find_by_username(&username)
        .map_err(AuthApiError::store)?;
    if existing.is_some() {
        return Err(AuthApiError::DuplicateUsername);
    }

    let password_hash = state.hasher.hash(&password).map_err(AuthApiError::store)?;
    let user = state
        .user_store
        .create_user(&username, &display_name, &password_hash)
        .map_err(AuthApiError::store)?;

    info!("registered user {}", user.username);

    Ok((StatusCode::CREATED, Json(UserResponse::from_user(&user))))
}

/// Login endpoint - POST /api/auth/login
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthApiError> {
    let user = state
        .authenticator
        .authenticate(&payload.username, &payload.password)?;

    let issued = state
        .jwt_handler
        .issue(&user)
        .map_err(AuthApiError::store)?;

    info!("login successful: {}", user.username);

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_in: issued.expires_in,
    }))
}

/// Current identity - GET /api/auth/me
///
/// Built from the token claims alone; no store lookup.
pub async fn get_current_user(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Json<AuthenticatedIdentity> {
    Json(identity)
}

fn require_field(field: &'static str, value: Option<String>) -> Result<String, AuthApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AuthApiError::Validation {
            field,
            message: "is required",
        }),
    }
}

fn reject_untrimmed(field: &'static str, value: &str) -> Result<(), AuthApiError> {
    if value.trim() != value {
        return Err(AuthApiError::Validation {
            field,
            message: "cannot start or end with whitespace",
        });
    }
    Ok(())
}

/// Auth API errors
#[derive(Debug)]
pub enum AuthApiError {
    /// Collapsed login failure: wrong password and unknown user look the same.
    InvalidCredentials,
    DuplicateUsername,
    Validation {
        field: &'static str,
        message: &'static str,
    },
    InternalError,
}

impl AuthApiError {
    fn store(e: anyhow::Error) -> Self {
        warn!("auth store failure: {e:#}");
        AuthApiError::InternalError
    }
}

impl From<AuthError> for AuthApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Store(e) => AuthApiError::store(e),
            other => {
                // Cause stays server-side; the response is uniform.
                warn!("failed login attempt: {other}");
                AuthApiError::InvalidCredentials
            }
        }
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        match self {
            AuthApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": GENERIC_AUTH_MESSAGE })),
            )
                .into_response(),
            AuthApiError::DuplicateUsername => (
                StatusCode::CONFLICT,
                Json(json!({ "error": "username already taken", "field": "username" })),
            )
                .into_response(),
            AuthApiError::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": format!("{field} {message}"), "field": field })),
            )
                .into_response(),
            AuthApiError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal server error" })),
            )
                .into_response(),
        }
    }
}

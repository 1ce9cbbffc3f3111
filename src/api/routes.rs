//! Router assembly.
//!
//! Public routes (health, registration, login) merge with the protected
//! routes behind the authorization gate; the gate attaches the identity
//! that protected handlers extract explicitly.

use axum::{
    http::{header, Method},
    middleware,
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::{api as auth_api, auth_middleware, models::AuthenticatedIdentity, AuthState};
use crate::list::{api as list_api, ListStore};
use crate::middleware::request_logging;
use crate::venues::{api as venues_api, VenueClient};

/// Shared application state for protected routes
#[derive(Clone)]
pub struct AppState {
    pub list_store: Arc<ListStore>,
    pub venues: Arc<VenueClient>,
}

/// Create the API router
pub fn create_router(auth_state: AuthState, app_state: AppState) -> Router {
    let jwt_handler = auth_state.jwt_handler.clone();

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/users", post(auth_api::register))
        .route("/api/auth/login", post(auth_api::login))
        .with_state(auth_state);

    let protected_routes = Router::new()
        .route("/api/protected", get(protected_data))
        .route("/api/auth/me", get(auth_api::get_current_user))
        .route(
            "/api/list",
            get(list_api::get_items).post(list_api::create_item),
        )
        .route(
            "/api/list/:id",
            put(list_api::update_item).delete(list_api::delete_item),
        )
        .route("/api/search", get(venues_api::search))
        .route("/api/searchmore", get(venues_api::search_more))
        .route("/api/searchphotos", get(venues_api::search_photos))
        .route_layer(middleware::from_fn_with_state(
            jwt_handler,
            auth_middleware,
        ))
        .with_state(app_state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer())
}

/// Any origin may call the API with the usual browser headers and verbs.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
}

// ===== Route Handlers =====

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Protected-data echo, reachable only through the gate
async fn protected_data(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        data: "rosebud".to_string(),
        username: identity.username,
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Serialize)]
struct ProtectedResponse {
    data: String,
    username: String,
}

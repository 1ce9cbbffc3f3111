//! Venuelist backend entry point.
//!
//! Loads configuration from the environment, wires the stores, token
//! handler and venue client into the router, and serves it.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use venuelist_backend::{
    api::{create_router, AppState},
    auth::{AuthState, JwtHandler, PasswordHasher, UserStore},
    config::Config,
    list::ListStore,
    venues::VenueClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Fatal on missing JWT_SECRET: the service never starts half-configured.
    let config = Config::from_env()?;

    let user_store = Arc::new(UserStore::new(&config.database_path)?);
    let list_store = Arc::new(ListStore::new(&config.database_path)?);
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let jwt_handler = Arc::new(JwtHandler::new(
        &config.jwt_secret,
        config.token_ttl_hours * 3600,
    ));
    let venues = Arc::new(VenueClient::new(
        config.venue_client_id.clone(),
        config.venue_client_secret.clone(),
        config.venue_api_version.clone(),
    )?);

    info!("stores initialized at {}", config.database_path);

    let auth_state = AuthState::new(user_store, hasher, jwt_handler);
    let app_state = AppState { list_store, venues };
    let app = create_router(auth_state, app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "venuelist_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

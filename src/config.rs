//! Service configuration, collected from the environment once at startup.

use anyhow::{Context, Result};
use bcrypt::DEFAULT_COST;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    /// Process-wide token signing secret. Required: startup fails without it.
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub venue_client_id: String,
    pub venue_client_secret: String,
    pub venue_api_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./venuelist.db".to_string());

        // Misconfiguration is fatal here, never a per-request error.
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        let token_ttl_hours = std::env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "168".to_string()) // 7 days
            .parse()
            .unwrap_or(168);

        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_COST);

        let venue_client_id = std::env::var("VENUE_CLIENT_ID").unwrap_or_default();
        let venue_client_secret = std::env::var("VENUE_CLIENT_SECRET").unwrap_or_default();
        let venue_api_version =
            std::env::var("VENUE_API_VERSION").unwrap_or_else(|_| "20180606".to_string());

        Ok(Self {
            port,
            database_path,
            jwt_secret,
            token_ttl_hours,
            bcrypt_cost,
            venue_client_id,
            venue_client_secret,
            venue_api_version,
        })
    }
}

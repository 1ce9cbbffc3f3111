//! Venuelist backend library.
//!
//! Backend-as-a-service for a venue-discovery app: user registration and
//! login, token-gated routes, per-user saved-venue lists, and a passthrough
//! proxy to the third-party venue API.

pub mod api;
pub mod auth;
pub mod config;
pub mod list;
pub mod middleware;
pub mod venues;

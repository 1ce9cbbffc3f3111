//! Authentication Module
//! Mission: Credential lifecycle and the authorization gate for protected routes

pub mod api;
pub mod errors;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;
pub mod user_store;

pub use api::AuthState;
pub use errors::AuthError;
pub use jwt::JwtHandler;
pub use middleware::auth_middleware;
pub use models::AuthenticatedIdentity;
pub use password::PasswordHasher;
pub use service::Authenticator;
pub use user_store::UserStore;

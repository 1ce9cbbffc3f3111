//! Saved-venue list module.
//!
//! Per-user CRUD over a SQLite-backed store. Every route is behind the
//! authorization gate; items are scoped to the authenticated username.

pub mod api;
pub mod store;

pub use store::{ListItem, ListStore};

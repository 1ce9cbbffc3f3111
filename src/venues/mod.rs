//! Venue-discovery proxy module.
//!
//! Thin passthrough to the third-party venue API: the client builds the
//! upstream request, the handlers forward the JSON body untouched.

pub mod api;
pub mod client;

pub use client::VenueClient;

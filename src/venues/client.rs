//! Venue API Client
//!
//! Outbound REST client for the venue-discovery service. Credentials ride
//! along as query parameters on every call, per the upstream API contract.

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const VENUE_API_BASE: &str = "https://api.foursquare.com/v2";

const EXPLORE_LIMIT: u32 = 10;
const PHOTOS_LIMIT: u32 = 20;

#[derive(Clone)]
pub struct VenueClient {
    client: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    version: String,
}

impl VenueClient {
    pub fn new(client_id: String, client_secret: String, version: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build VenueClient")?;

        Ok(Self {
            client,
            base_url: VENUE_API_BASE.to_string(),
            client_id,
            client_secret,
            version,
        })
    }

    /// Point the client at a different upstream, e.g. a local stand-in.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[inline]
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn credential_params(&self) -> [(&'static str, &str); 3] {
        [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("v", self.version.as_str()),
        ]
    }

    /// Recommended venues near a free-text location
    pub async fn explore(&self, near: &str) -> Result<Value> {
        let url = self.url("/venues/explore");
        let limit = EXPLORE_LIMIT.to_string();
        let qp = [("near", near), ("limit", limit.as_str())];

        self.get_json(&url, &qp).await
    }

    /// Full detail for a single venue
    pub async fn details(&self, venue_id: &str) -> Result<Value> {
        let url = self.url(&format!("/venues/{venue_id}"));

        self.get_json(&url, &[]).await
    }

    /// Photo listing for a single venue
    pub async fn photos(&self, venue_id: &str) -> Result<Value> {
        let url = self.url(&format!("/venues/{venue_id}/photos"));
        let limit = PHOTOS_LIMIT.to_string();
        let qp = [("limit", limit.as_str())];

        self.get_json(&url, &qp).await
    }

    async fn get_json(&self, url: &str, extra_params: &[(&str, &str)]) -> Result<Value> {
        let resp = self
            .client
            .get(url)
            .query(&self.credential_params())
            .query(extra_params)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("GET {url} {status}: {text}"));
        }

        resp.json::<Value>()
            .await
            .context("Failed to parse venue API response")
    }
}

//! Venue Proxy Endpoints
//! Mission: Forward search queries to the venue API for authenticated users

use crate::api::routes::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VenueQuery {
    #[serde(alias = "venueId")]
    pub venue_id: Option<String>,
}

/// GET /api/search?q=<location>
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>, VenueApiError> {
    let near = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or(VenueApiError::MissingParam("q"))?;

    let body = state
        .venues
        .explore(&near)
        .await
        .map_err(VenueApiError::upstream)?;

    Ok(Json(body))
}

/// GET /api/searchmore?venue_id=<id>
pub async fn search_more(
    State(state): State<AppState>,
    Query(params): Query<VenueQuery>,
) -> Result<Json<Value>, VenueApiError> {
    let venue_id = params
        .venue_id
        .filter(|v| !v.is_empty())
        .ok_or(VenueApiError::MissingParam("venue_id"))?;

    let body = state
        .venues
        .details(&venue_id)
        .await
        .map_err(VenueApiError::upstream)?;

    Ok(Json(body))
}

/// GET /api/searchphotos?venue_id=<id>
pub async fn search_photos(
    State(state): State<AppState>,
    Query(params): Query<VenueQuery>,
) -> Result<Json<Value>, VenueApiError> {
    let venue_id = params
        .venue_id
        .filter(|v| !v.is_empty())
        .ok_or(VenueApiError::MissingParam("venue_id"))?;

    let body = state
        .venues
        .photos(&venue_id)
        .await
        .map_err(VenueApiError::upstream)?;

    Ok(Json(body))
}

#[derive(Debug)]
pub enum VenueApiError {
    MissingParam(&'static str),
    Upstream,
}

impl VenueApiError {
    fn upstream(e: anyhow::Error) -> Self {
        warn!("venue API call failed: {e:#}");
        VenueApiError::Upstream
    }
}

impl IntoResponse for VenueApiError {
    fn into_response(self) -> Response {
        match self {
            VenueApiError::MissingParam(param) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": format!("{param} is required"), "field": param })),
            )
                .into_response(),
            VenueApiError::Upstream => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "venue service unavailable" })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            VenueApiError::MissingParam("q").into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            VenueApiError::Upstream.into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}

//! List API Endpoints
//! Mission: CRUD over the authenticated user's saved venues

use crate::api::routes::AppState;
use crate::auth::models::AuthenticatedIdentity;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use super::store::ListItem;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub venue_id: Option<String>,
    pub name: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub note: Option<String>,
}

#[derive(Serialize)]
pub struct ItemsResponse {
    pub count: usize,
    pub items: Vec<ListItem>,
}

/// GET /api/list
pub async fn get_items(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<Json<ItemsResponse>, ListApiError> {
    let items = state
        .list_store
        .items_for_user(&identity.username)
        .map_err(ListApiError::store)?;

    Ok(Json(ItemsResponse {
        count: items.len(),
        items,
    }))
}

/// POST /api/list
pub async fn create_item(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Json(payload): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ListItem>), ListApiError> {
    let venue_id = payload
        .venue_id
        .filter(|v| !v.is_empty())
        .ok_or(ListApiError::Validation { field: "venue_id" })?;
    let name = payload
        .name
        .filter(|n| !n.is_empty())
        .ok_or(ListApiError::Validation { field: "name" })?;

    let item = state
        .list_store
        .add_item(&identity.username, &venue_id, &name, payload.note.as_deref())
        .map_err(ListApiError::store)?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/list/:id
pub async fn update_item(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<Json<ListItem>, ListApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ListApiError::Validation { field: "id" })?;

    state
        .list_store
        .update_item(
            &identity.username,
            &id,
            payload.name.as_deref(),
            payload.note.as_deref(),
        )
        .map_err(ListApiError::store)?
        .map(Json)
        .ok_or(ListApiError::NotFound)
}

/// DELETE /api/list/:id
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<String>,
) -> Result<StatusCode, ListApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ListApiError::Validation { field: "id" })?;

    let removed = state
        .list_store
        .remove_item(&identity.username, &id)
        .map_err(ListApiError::store)?;

    if !removed {
        return Err(ListApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug)]
pub enum ListApiError {
    NotFound,
    Validation { field: &'static str },
    Internal,
}

impl ListApiError {
    fn store(e: anyhow::Error) -> Self {
        warn!("list store failure: {e:#}");
        ListApiError::Internal
    }
}

impl IntoResponse for ListApiError {
    fn into_response(self) -> Response {
        match self {
            ListApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "item not found" })),
            )
                .into_response(),
            ListApiError::Validation { field } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": format!("{field} is required"), "field": field })),
            )
                .into_response(),
            ListApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal server error" })),
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
            ListApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ListApiError::Validation { field: "name" }
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ListApiError::Internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

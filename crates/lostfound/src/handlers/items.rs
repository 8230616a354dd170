//! Item handlers.
//!
//! These handlers use the repository trait object for database access.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use lostfound_core::item::{CreateItemRequest, Item};
use lostfound_core::storage::RepositoryError;

use crate::{
    handlers::{error::error_response, AppError},
    state::AppState,
};

/// List all items (GET /api/items).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.item_repo.list_items().await?;

    tracing::debug!(count = items.len(), "Listed items");

    Ok(Json(items))
}

/// Register a found item (POST /api/items).
///
/// Any problem reading the body as a JSON object is a 400 `Invalid JSON`,
/// except bodies that can't be buffered (e.g. over the size limit), which keep
/// axum's status. Missing required fields are reported by name, also as a 400.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), Response> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!(rejection = %e, "Rejected create item body");
        match e {
            JsonRejection::BytesRejection(_) => error_response(e.status(), e.body_text()),
            _ => error_response(StatusCode::BAD_REQUEST, "Invalid JSON"),
        }
    })?;

    tracing::debug!(payload = ?payload, "Received create item request");

    let id = state
        .item_repo
        .create_item(payload)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(item_id = id, "Created new item");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Item created successfully" })),
    ))
}

/// Get a single item by ID (GET /api/items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, Response> {
    let Path(id) = id.map_err(|e| {
        tracing::debug!(rejection = %e, "Rejected item id");
        error_response(StatusCode::BAD_REQUEST, "Invalid item id")
    })?;

    let item = state
        .item_repo
        .get_item(id)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    match item {
        Some(item) => Ok(Json(item)),
        None => Err(AppError::from(RepositoryError::NotFound {
            entity_type: "Item",
            id: id.to_string(),
        })
        .into_response()),
    }
}

/// Search items by keyword (GET /api/items/search/{keyword}).
///
/// Matches `keyword` as a case-insensitive substring of the item name,
/// description or location.
pub async fn search_items(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.item_repo.search_items(&keyword).await?;

    tracing::debug!(keyword = %keyword, count = items.len(), "Searched items");

    Ok(Json(items))
}

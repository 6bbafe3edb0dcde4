//! Entry listing, rename, move, star, and delete handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use drivevault_core::error::AppError;

use crate::dto::request::{
    ListEntriesQuery, MoveEntryRequest, RenameEntryRequest, parse_parent_ref,
};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/entries?parentId=...
pub async fn list_entries(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListEntriesQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let parent_id = parse_parent_ref(params.parent_id.as_deref())?;
    let listing = state.entry_service.list(auth.user_id(), parent_id).await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": listing }),
    ))
}

/// GET /api/entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let entry = state.entry_service.get(auth.user_id(), id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": entry })))
}

/// PUT /api/entries/{id}/rename
pub async fn rename_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameEntryRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let entry = state
        .entry_service
        .rename(auth.user_id(), id, &req.name)
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": entry })))
}

/// PUT /api/entries/{id}/move
pub async fn move_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<MoveEntryRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let target = parse_parent_ref(req.target_parent_id.as_deref())?;

    let entry = state
        .entry_service
        .move_entry(auth.user_id(), id, target)
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": entry })))
}

/// PUT /api/entries/{id}/star
pub async fn toggle_star(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let entry = state.entry_service.toggle_star(auth.user_id(), id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": entry })))
}

/// DELETE /api/entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let deleted = state.entry_service.delete(auth.user_id(), id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "deleted": deleted } }),
    ))
}

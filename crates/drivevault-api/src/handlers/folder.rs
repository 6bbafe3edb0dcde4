//! Folder creation handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use drivevault_core::error::AppError;

use crate::dto::request::{CreateFolderRequest, parse_parent_ref};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let parent_id = parse_parent_ref(req.parent_id.as_deref())?;

    let folder = state
        .entry_service
        .create_folder(auth.user_id(), parent_id, &req.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": folder })),
    ))
}

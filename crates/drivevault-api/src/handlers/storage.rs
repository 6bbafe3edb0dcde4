//! Storage usage handler.

use axum::Json;
use axum::extract::State;

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/storage
pub async fn get_usage(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<serde_json::Value>> {
    let usage = state.usage_service.usage(auth.user_id()).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": usage })))
}

//! Entry search handler.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::request::SearchQuery;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/search?q=...
pub async fn search_entries(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let hits = state
        .search_service
        .search(auth.user_id(), &params.q)
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": hits })))
}

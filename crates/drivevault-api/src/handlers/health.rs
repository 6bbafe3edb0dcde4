//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/health
///
/// Reports healthy only after a successful entry store liveness probe.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    state.store.ping().await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": {
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        }
    })))
}

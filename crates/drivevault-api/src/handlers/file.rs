//! File registration, raw-body upload, and download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use uuid::Uuid;
use validator::Validate;

use drivevault_core::error::AppError;
use drivevault_service::entry::RegisterFile;

use crate::dto::request::{RegisterFileRequest, UploadQuery, parse_parent_ref};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/files
///
/// Records metadata for content that already lives in the blob store.
pub async fn register_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RegisterFileRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let parent_id = parse_parent_ref(req.parent_id.as_deref())?;

    let file = state
        .entry_service
        .register_file(
            auth.user_id(),
            RegisterFile {
                parent_id,
                name: req.name,
                extension: req.extension,
                size_bytes: req.size_bytes,
                mime_type: req.mime_type,
                storage_ref: req.storage_ref,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": file })),
    ))
}

/// POST /api/files/upload?name=...&parentId=...
///
/// Streams the raw request body into the blob store, then registers the
/// resulting file entry. The MIME type is taken from the Content-Type
/// request header.
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    params
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let parent_id = parse_parent_ref(params.parent_id.as_deref())?;

    let (name, extension) = split_file_name(&params.name);
    let mime_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let size_bytes = body.len() as i64;

    let storage_ref = state
        .blob_store
        .write(auth.user_id(), &params.name, body)
        .await?;

    let file = state
        .entry_service
        .register_file(
            auth.user_id(),
            RegisterFile {
                parent_id,
                name,
                extension,
                size_bytes,
                mime_type,
                storage_ref,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": file })),
    ))
}

/// GET /api/files/{id}/download
pub async fn download_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    let entry = state.entry_service.get(auth.user_id(), id).await?;
    if entry.is_folder() {
        return Err(AppError::invalid_operation("Folders cannot be downloaded").into());
    }

    let storage_ref = entry
        .storage_ref
        .as_deref()
        .ok_or_else(|| AppError::not_found("File has no stored content"))?;

    let stream = state.blob_store.read(storage_ref).await?;

    let content_type = entry
        .mime_type
        .clone()
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let filename = format!("{}{}", entry.name, entry.extension);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, entry.size_bytes.max(0))
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// Splits "photo.jpg" into ("photo", ".jpg"). Names without a dot keep an
/// empty extension; a leading dot is treated as part of the name.
fn split_file_name(full: &str) -> (String, String) {
    match full.rfind('.') {
        Some(idx) if idx > 0 => (full[..idx].to_string(), full[idx..].to_string()),
        _ => (full.to_string(), String::new()),
    }
}

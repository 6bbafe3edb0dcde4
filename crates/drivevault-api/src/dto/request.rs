//! Request DTOs with validation.
//!
//! Parent folder references accept the sentinel string `"root"` (or an
//! absent field) to mean the top level, matching what the web client
//! sends; anything else must be a valid entry UUID.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use drivevault_core::error::AppError;
use drivevault_core::result::AppResult;

/// Resolves a client-supplied parent reference into an optional folder ID.
pub fn parse_parent_ref(raw: Option<&str>) -> AppResult<Option<Uuid>> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() || s == "root" => Ok(None),
        Some(s) => s
            .parse::<Uuid>()
            .map(Some)
            .map_err(|_| AppError::validation(format!("Invalid folder reference '{s}'"))),
    }
}

/// Query parameters for listing folder contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesQuery {
    /// Parent folder reference ("root" or absent for top level).
    #[serde(alias = "folderId")]
    pub parent_id: Option<String>,
}

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Parent folder reference ("root" or absent for top level).
    #[serde(default, alias = "folderId")]
    pub parent_id: Option<String>,
}

/// Register file metadata request.
///
/// The content has already been stored; this records the resulting entry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFileRequest {
    /// File name without extension.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Extension including the leading dot.
    #[serde(default)]
    pub extension: String,
    /// Content size in bytes.
    #[serde(default)]
    pub size_bytes: i64,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Blob locator returned by the upload.
    #[validate(length(min = 1))]
    pub storage_ref: String,
    /// Parent folder reference ("root" or absent for top level).
    #[serde(default, alias = "folderId")]
    pub parent_id: Option<String>,
}

/// Query parameters for a raw-body file upload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadQuery {
    /// File name including extension.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Parent folder reference ("root" or absent for top level).
    #[serde(alias = "folderId")]
    pub parent_id: Option<String>,
}

/// Rename entry request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameEntryRequest {
    /// New name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Move entry request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEntryRequest {
    /// Target parent reference ("root" or absent for top level).
    #[serde(default, alias = "targetFolderId")]
    pub target_parent_id: Option<String>,
}

/// Search query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Search term.
    #[serde(default)]
    pub q: String,
}

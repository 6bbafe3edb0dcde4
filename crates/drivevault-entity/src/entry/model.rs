//! Unified entry model for files and folders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Discriminates the two entry variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "entry_kind", rename_all = "lowercase")]
pub enum EntryKind {
    /// A binary file with stored content.
    File,
    /// A container for other entries.
    Folder,
}

/// A file or folder in a user's virtual tree.
///
/// Files and folders share one record shape; folder-only fields are
/// zero/empty for files and vice versa. A `parent_id` of `None` means the
/// entry sits at the top level ("root" is virtual, never stored).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The owning user. Every operation is scoped to this.
    pub owner_id: Uuid,
    /// Parent folder ID (None for top-level entries).
    pub parent_id: Option<Uuid>,
    /// Display name (without extension for files).
    pub name: String,
    /// File or folder.
    pub kind: EntryKind,
    /// File extension including the leading dot; empty for folders.
    pub extension: String,
    /// Content size in bytes (0 for folders).
    pub size_bytes: i64,
    /// MIME type of the content (files only).
    pub mime_type: Option<String>,
    /// Opaque locator for the underlying blob (files only).
    pub storage_ref: Option<String>,
    /// Favorite flag.
    pub is_starred: bool,
    /// Soft-delete tombstone. Deleted entries are excluded from all
    /// listings, searches, and counts but the record is retained.
    pub is_deleted: bool,
    /// When the entry was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Check if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Case-insensitive substring match against name and (for files)
    /// extension.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || (self.kind == EntryKind::File
                && self.extension.to_lowercase().contains(needle_lower))
    }
}

/// Data required to create a new entry record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntry {
    /// The owning user.
    pub owner_id: Uuid,
    /// Parent folder (None for top level).
    pub parent_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// File or folder.
    pub kind: EntryKind,
    /// File extension; empty for folders.
    pub extension: String,
    /// Content size in bytes.
    pub size_bytes: i64,
    /// MIME type (files only).
    pub mime_type: Option<String>,
    /// Blob locator (files only).
    pub storage_ref: Option<String>,
}

impl CreateEntry {
    /// Shorthand for a folder record.
    pub fn folder(owner_id: Uuid, parent_id: Option<Uuid>, name: impl Into<String>) -> Self {
        Self {
            owner_id,
            parent_id,
            name: name.into(),
            kind: EntryKind::Folder,
            extension: String::new(),
            size_bytes: 0,
            mime_type: None,
            storage_ref: None,
        }
    }
}

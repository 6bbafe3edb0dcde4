//! Entry CRUD: listing, creation, rename, move, star, delete.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use drivevault_core::error::AppError;
use drivevault_core::result::AppResult;
use drivevault_database::store::EntryStore;
use drivevault_entity::entry::{CreateEntry, Entry, EntryKind, Listing};

use crate::tree::cascade::CascadeDeleter;
use crate::tree::cycle::CycleGuard;

/// Manages entry CRUD operations and dispatches to the tree algorithms.
#[derive(Debug, Clone)]
pub struct EntryService {
    /// Entry store.
    store: Arc<dyn EntryStore>,
    /// Move validation.
    cycle_guard: CycleGuard,
    /// Folder subtree deletion.
    cascade: CascadeDeleter,
}

/// Data for registering an uploaded file's metadata.
///
/// The upload transport has already streamed the content into the blob
/// store; the core only records the resulting `storage_ref`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterFile {
    /// Parent folder (None for top level).
    pub parent_id: Option<Uuid>,
    /// Display name without extension.
    pub name: String,
    /// Extension including the leading dot (may be empty).
    pub extension: String,
    /// Content size in bytes.
    pub size_bytes: i64,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Blob locator returned by the blob store.
    pub storage_ref: String,
}

impl EntryService {
    /// Creates a new entry service.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self {
            cycle_guard: CycleGuard::new(store.clone()),
            cascade: CascadeDeleter::new(store.clone()),
            store,
        }
    }

    /// Gets a live entry by ID.
    pub async fn get(&self, owner_id: Uuid, id: Uuid) -> AppResult<Entry> {
        self.store
            .find_by_id(owner_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Entry not found"))
    }

    /// Lists live direct children of a folder (None = top level),
    /// folders first, each group name-sorted case-insensitively.
    pub async fn list(&self, owner_id: Uuid, parent_id: Option<Uuid>) -> AppResult<Listing> {
        if let Some(parent_id) = parent_id {
            self.require_live_folder(owner_id, parent_id).await?;
        }

        let mut folders = self
            .store
            .find_children(owner_id, parent_id, Some(EntryKind::Folder))
            .await?;
        let mut files = self
            .store
            .find_children(owner_id, parent_id, Some(EntryKind::File))
            .await?;

        folders.sort_by_key(|e| e.name.to_lowercase());
        files.sort_by_key(|e| e.name.to_lowercase());

        Ok(Listing { folders, files })
    }

    /// Creates a new folder. Duplicate sibling folder names are rejected.
    pub async fn create_folder(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        name: &str,
    ) -> AppResult<Entry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name is required"));
        }

        if let Some(parent_id) = parent_id {
            self.require_live_folder(owner_id, parent_id).await?;
        }

        if self
            .store
            .find_folder_by_name(owner_id, parent_id, name)
            .await?
            .is_some()
        {
            return Err(AppError::invalid_operation(format!(
                "A folder named '{name}' already exists in this location"
            )));
        }

        let folder = self
            .store
            .insert(&CreateEntry::folder(owner_id, parent_id, name))
            .await?;

        info!(
            owner_id = %owner_id,
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );
        Ok(folder)
    }

    /// Records an uploaded file's metadata as a new file entry.
    pub async fn register_file(&self, owner_id: Uuid, data: RegisterFile) -> AppResult<Entry> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("File name is required"));
        }
        if data.size_bytes < 0 {
            return Err(AppError::validation("File size cannot be negative"));
        }

        if let Some(parent_id) = data.parent_id {
            self.require_live_folder(owner_id, parent_id).await?;
        }

        let file = self
            .store
            .insert(&CreateEntry {
                owner_id,
                parent_id: data.parent_id,
                name: name.to_string(),
                kind: EntryKind::File,
                extension: data.extension,
                size_bytes: data.size_bytes,
                mime_type: data.mime_type,
                storage_ref: Some(data.storage_ref),
            })
            .await?;

        info!(
            owner_id = %owner_id,
            file_id = %file.id,
            name = %file.name,
            size_bytes = file.size_bytes,
            "File registered"
        );
        Ok(file)
    }

    /// Renames a live entry. Renaming a folder onto an existing sibling
    /// folder name is rejected.
    pub async fn rename(&self, owner_id: Uuid, id: Uuid, new_name: &str) -> AppResult<Entry> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }

        let entry = self.get(owner_id, id).await?;

        if entry.is_folder() {
            if let Some(existing) = self
                .store
                .find_folder_by_name(owner_id, entry.parent_id, new_name)
                .await?
            {
                if existing.id != id {
                    return Err(AppError::invalid_operation(format!(
                        "A folder named '{new_name}' already exists in this location"
                    )));
                }
            }
        }

        let renamed = self.store.rename(owner_id, id, new_name).await?;

        info!(
            owner_id = %owner_id,
            entry_id = %id,
            new_name = %new_name,
            "Entry renamed"
        );
        Ok(renamed)
    }

    /// Moves a live entry under a new parent (None = top level).
    pub async fn move_entry(
        &self,
        owner_id: Uuid,
        id: Uuid,
        target_parent_id: Option<Uuid>,
    ) -> AppResult<Entry> {
        let entry = self.get(owner_id, id).await?;

        self.cycle_guard
            .ensure_move_allowed(owner_id, &entry, target_parent_id)
            .await?;

        // Moving a folder must not land it next to a same-named sibling.
        if entry.is_folder() && target_parent_id != entry.parent_id {
            if let Some(existing) = self
                .store
                .find_folder_by_name(owner_id, target_parent_id, &entry.name)
                .await?
            {
                if existing.id != id {
                    return Err(AppError::invalid_operation(format!(
                        "A folder named '{}' already exists in the target location",
                        entry.name
                    )));
                }
            }
        }

        let moved = self.store.reparent(owner_id, id, target_parent_id).await?;

        info!(
            owner_id = %owner_id,
            entry_id = %id,
            new_parent = ?target_parent_id,
            "Entry moved"
        );
        Ok(moved)
    }

    /// Flips the starred flag and returns the updated entry.
    pub async fn toggle_star(&self, owner_id: Uuid, id: Uuid) -> AppResult<Entry> {
        let entry = self.get(owner_id, id).await?;
        self.store
            .set_starred(owner_id, id, !entry.is_starred)
            .await
    }

    /// Soft-deletes an entry. Folder deletes cascade to the whole
    /// subtree. Returns the number of entries tombstoned.
    pub async fn delete(&self, owner_id: Uuid, id: Uuid) -> AppResult<u64> {
        let entry = self.get(owner_id, id).await?;

        if entry.is_folder() {
            return self.cascade.delete_subtree(owner_id, id).await;
        }

        if !self.store.mark_deleted(owner_id, id).await? {
            return Err(AppError::not_found("Entry not found"));
        }

        info!(owner_id = %owner_id, entry_id = %id, "File deleted");
        Ok(1)
    }

    /// Require that `id` is a live folder owned by `owner_id`.
    async fn require_live_folder(&self, owner_id: Uuid, id: Uuid) -> AppResult<Entry> {
        self.store
            .find_by_id(owner_id, id)
            .await?
            .filter(|e| e.is_folder())
            .ok_or_else(|| AppError::not_found("Parent folder not found"))
    }
}

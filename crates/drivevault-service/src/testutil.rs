//! Shared helpers for service tests.

use std::sync::Arc;

use uuid::Uuid;

use drivevault_database::memory::MemoryEntryStore;
use drivevault_database::store::EntryStore;
use drivevault_entity::entry::{CreateEntry, Entry, EntryKind};

/// Fresh in-memory store as the trait object the services expect.
pub fn memory_store() -> Arc<dyn EntryStore> {
    Arc::new(MemoryEntryStore::new())
}

/// Insert a folder and return the stored entry.
pub async fn mk_folder(
    store: &Arc<dyn EntryStore>,
    owner_id: Uuid,
    parent_id: Option<Uuid>,
    name: &str,
) -> Entry {
    store
        .insert(&CreateEntry::folder(owner_id, parent_id, name))
        .await
        .expect("insert folder")
}

/// Insert a small text file and return the stored entry.
pub async fn mk_file(
    store: &Arc<dyn EntryStore>,
    owner_id: Uuid,
    parent_id: Option<Uuid>,
    name: &str,
    extension: &str,
) -> Entry {
    mk_file_sized(store, owner_id, parent_id, name, extension, 42, "text/plain").await
}

/// Insert a file with explicit size and MIME type.
pub async fn mk_file_sized(
    store: &Arc<dyn EntryStore>,
    owner_id: Uuid,
    parent_id: Option<Uuid>,
    name: &str,
    extension: &str,
    size_bytes: i64,
    mime_type: &str,
) -> Entry {
    store
        .insert(&CreateEntry {
            owner_id,
            parent_id,
            name: name.to_string(),
            kind: EntryKind::File,
            extension: extension.to_string(),
            size_bytes,
            mime_type: Some(mime_type.to_string()),
            storage_ref: Some(format!("{owner_id}/{name}{extension}")),
        })
        .await
        .expect("insert file")
}

//! In-memory entry store.
//!
//! Backs tests and local development. Mutations lock one record at a
//! time, matching the per-record atomicity the Postgres store provides.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use drivevault_core::result::AppResult;
use drivevault_entity::entry::{CreateEntry, Entry, EntryKind};

use crate::store::EntryStore;

/// DashMap-backed entry store.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: DashMap<Uuid, Entry>,
}

impl MemoryEntryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn live(entry: &Entry, owner_id: Uuid) -> bool {
        entry.owner_id == owner_id && !entry.is_deleted
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> AppResult<Option<Entry>> {
        Ok(self
            .entries
            .get(&id)
            .filter(|e| Self::live(e, owner_id))
            .map(|e| e.clone()))
    }

    async fn find_children(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        kind: Option<EntryKind>,
    ) -> AppResult<Vec<Entry>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| {
                Self::live(e, owner_id)
                    && e.parent_id == parent_id
                    && kind.is_none_or(|k| e.kind == k)
            })
            .map(|e| e.clone())
            .collect())
    }

    async fn find_folder_by_name(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        name: &str,
    ) -> AppResult<Option<Entry>> {
        Ok(self
            .entries
            .iter()
            .find(|e| {
                Self::live(e, owner_id)
                    && e.kind == EntryKind::Folder
                    && e.parent_id == parent_id
                    && e.name == name
            })
            .map(|e| e.clone()))
    }

    async fn insert(&self, data: &CreateEntry) -> AppResult<Entry> {
        let now = Utc::now();
        let entry = Entry {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            parent_id: data.parent_id,
            name: data.name.clone(),
            kind: data.kind,
            extension: data.extension.clone(),
            size_bytes: data.size_bytes,
            mime_type: data.mime_type.clone(),
            storage_ref: data.storage_ref.clone(),
            is_starred: false,
            is_deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        self.entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn rename(&self, owner_id: Uuid, id: Uuid, new_name: &str) -> AppResult<Entry> {
        let mut entry = self
            .entries
            .get_mut(&id)
            .filter(|e| Self::live(e, owner_id))
            .ok_or_else(|| drivevault_core::AppError::not_found("Entry not found"))?;
        entry.name = new_name.to_string();
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn reparent(
        &self,
        owner_id: Uuid,
        id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> AppResult<Entry> {
        let mut entry = self
            .entries
            .get_mut(&id)
            .filter(|e| Self::live(e, owner_id))
            .ok_or_else(|| drivevault_core::AppError::not_found("Entry not found"))?;
        entry.parent_id = new_parent_id;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn set_starred(&self, owner_id: Uuid, id: Uuid, starred: bool) -> AppResult<Entry> {
        let mut entry = self
            .entries
            .get_mut(&id)
            .filter(|e| Self::live(e, owner_id))
            .ok_or_else(|| drivevault_core::AppError::not_found("Entry not found"))?;
        entry.is_starred = starred;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn mark_deleted(&self, owner_id: Uuid, id: Uuid) -> AppResult<bool> {
        match self.entries.get_mut(&id) {
            Some(mut entry) if Self::live(&entry, owner_id) => {
                let now = Utc::now();
                entry.is_deleted = true;
                entry.deleted_at = Some(now);
                entry.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn mark_files_deleted(&self, owner_id: Uuid, parent_id: Uuid) -> AppResult<u64> {
        let now = Utc::now();
        let mut count = 0u64;
        for mut entry in self.entries.iter_mut() {
            if Self::live(&entry, owner_id)
                && entry.kind == EntryKind::File
                && entry.parent_id == Some(parent_id)
            {
                entry.is_deleted = true;
                entry.deleted_at = Some(now);
                entry.updated_at = now;
                count += 1;
            }
        }
        Ok(count)
    }

    async fn search(&self, owner_id: Uuid, query: &str, limit: u32) -> AppResult<Vec<Entry>> {
        let needle = query.to_lowercase();
        let mut hits: Vec<Entry> = self
            .entries
            .iter()
            .filter(|e| Self::live(e, owner_id) && e.matches(&needle))
            .map(|e| e.clone())
            .collect();
        hits.sort_by(|a, b| {
            b.is_folder()
                .cmp(&a.is_folder())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        hits.truncate(limit as usize);
        Ok(hits)
    }

    async fn count_entries(&self, owner_id: Uuid) -> AppResult<u64> {
        Ok(self
            .entries
            .iter()
            .filter(|e| Self::live(e, owner_id))
            .count() as u64)
    }

    async fn find_files(&self, owner_id: Uuid) -> AppResult<Vec<Entry>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| Self::live(e, owner_id) && e.kind == EntryKind::File)
            .map(|e| e.clone())
            .collect())
    }
}

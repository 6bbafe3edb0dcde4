//! The entry store abstraction.
//!
//! Every query is scoped to an owner and, unless stated otherwise, sees
//! only live (non-tombstoned) entries. Mutations are atomic per record;
//! no cross-record transaction is promised.

use async_trait::async_trait;
use uuid::Uuid;

use drivevault_core::result::AppResult;
use drivevault_entity::entry::{CreateEntry, Entry, EntryKind};

/// Persistent collection of file/folder entries.
#[async_trait]
pub trait EntryStore: Send + Sync + std::fmt::Debug + 'static {
    /// Backend liveness probe, surfaced through the health endpoint.
    async fn ping(&self) -> AppResult<()>;

    /// Point-get a live entry by owner and id.
    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> AppResult<Option<Entry>>;

    /// List live direct children of a parent (None = top level),
    /// optionally restricted to one kind. Unordered; callers sort.
    async fn find_children(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        kind: Option<EntryKind>,
    ) -> AppResult<Vec<Entry>>;

    /// Find a live folder by exact name under a parent. Used to enforce
    /// sibling folder name uniqueness.
    async fn find_folder_by_name(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        name: &str,
    ) -> AppResult<Option<Entry>>;

    /// Insert a new entry and return the stored record.
    async fn insert(&self, data: &CreateEntry) -> AppResult<Entry>;

    /// Rename a live entry. Fails with NotFound if the entry is missing
    /// or tombstoned.
    async fn rename(&self, owner_id: Uuid, id: Uuid, new_name: &str) -> AppResult<Entry>;

    /// Reparent a live entry. The caller is responsible for cycle
    /// validation before calling this.
    async fn reparent(
        &self,
        owner_id: Uuid,
        id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> AppResult<Entry>;

    /// Set the starred flag on a live entry.
    async fn set_starred(&self, owner_id: Uuid, id: Uuid, starred: bool) -> AppResult<Entry>;

    /// Tombstone a single live entry. Returns `false` if it was missing
    /// or already tombstoned.
    async fn mark_deleted(&self, owner_id: Uuid, id: Uuid) -> AppResult<bool>;

    /// Tombstone every live file directly under a folder. Returns the
    /// number of files marked.
    async fn mark_files_deleted(&self, owner_id: Uuid, parent_id: Uuid) -> AppResult<u64>;

    /// Case-insensitive substring search over name and (files) extension,
    /// folders first then name ascending, capped at `limit`.
    async fn search(&self, owner_id: Uuid, query: &str, limit: u32) -> AppResult<Vec<Entry>>;

    /// Count all live entries for an owner. Used as the walk bound for
    /// the tree algorithms.
    async fn count_entries(&self, owner_id: Uuid) -> AppResult<u64>;

    /// List every live file for an owner (usage statistics).
    async fn find_files(&self, owner_id: Uuid) -> AppResult<Vec<Entry>>;
}

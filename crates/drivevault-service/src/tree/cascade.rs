//! Recursive soft-delete of a folder subtree.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use drivevault_core::result::AppResult;
use drivevault_database::store::EntryStore;
use drivevault_entity::entry::EntryKind;

/// Soft-deletes a folder and everything reachable under it.
#[derive(Debug, Clone)]
pub struct CascadeDeleter {
    store: Arc<dyn EntryStore>,
}

impl CascadeDeleter {
    /// Creates a new cascade deleter.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Tombstone the folder and its entire subtree, returning the number
    /// of entries affected (the folder itself included).
    ///
    /// Depth-first with an explicit stack; children are enumerated one
    /// folder at a time so a large subtree is never held in memory at
    /// once. Each mark is durable on its own — a store failure midway
    /// leaves already-marked entries tombstoned and surfaces the error.
    pub async fn delete_subtree(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<u64> {
        let mut affected = 0u64;
        let mut stack = vec![folder_id];

        while let Some(current) = stack.pop() {
            affected += self.store.mark_files_deleted(owner_id, current).await?;

            let subfolders = self
                .store
                .find_children(owner_id, Some(current), Some(EntryKind::Folder))
                .await?;
            stack.extend(subfolders.iter().map(|f| f.id));

            if self.store.mark_deleted(owner_id, current).await? {
                affected += 1;
            }
        }

        info!(
            owner_id = %owner_id,
            folder_id = %folder_id,
            affected,
            "Folder subtree deleted"
        );
        Ok(affected)
    }
}

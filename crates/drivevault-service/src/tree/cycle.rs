//! Move validation: rejects moves that would create a parent cycle.

use std::sync::Arc;

use uuid::Uuid;

use drivevault_core::error::AppError;
use drivevault_core::result::AppResult;
use drivevault_database::store::EntryStore;
use drivevault_entity::entry::Entry;

/// Validates proposed reparent operations.
#[derive(Debug, Clone)]
pub struct CycleGuard {
    store: Arc<dyn EntryStore>,
}

impl CycleGuard {
    /// Creates a new cycle guard.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Validate moving `entry` under `target_parent_id` (None = top level).
    ///
    /// Rules, in order:
    /// 1. an entry cannot be moved into itself;
    /// 2. the target, when given, must be a live folder of the same owner;
    /// 3. files can never form a cycle and are allowed anywhere;
    /// 4. a folder is rejected if the target sits inside its own subtree,
    ///    detected by walking the target's parent chain upward.
    ///
    /// Moving to the entry's current parent passes validation; the move is
    /// an idempotent no-op at the store level.
    pub async fn ensure_move_allowed(
        &self,
        owner_id: Uuid,
        entry: &Entry,
        target_parent_id: Option<Uuid>,
    ) -> AppResult<()> {
        if target_parent_id == Some(entry.id) {
            return Err(AppError::invalid_operation(
                "Cannot move an entry into itself",
            ));
        }

        let target = match target_parent_id {
            Some(target_id) => {
                let target = self
                    .store
                    .find_by_id(owner_id, target_id)
                    .await?
                    .filter(|t| t.is_folder())
                    .ok_or_else(|| AppError::not_found("Target folder not found"))?;
                Some(target)
            }
            None => None,
        };

        // Files have no descendants and cannot form cycles.
        if !entry.is_folder() {
            return Ok(());
        }

        let Some(target) = target else {
            // Top level is never inside any subtree.
            return Ok(());
        };

        // Walk up from the target. Reaching the moved folder means the
        // target is one of its descendants. The walk is capped at the
        // owner's entry count so a corrupted cyclic chain surfaces as an
        // internal error instead of an infinite loop.
        let bound = self.store.count_entries(owner_id).await?;
        let mut cursor = target.parent_id;
        let mut steps = 0u64;

        while let Some(ancestor_id) = cursor {
            if ancestor_id == entry.id {
                return Err(AppError::invalid_operation(
                    "Cannot move a folder into its own subtree",
                ));
            }
            steps += 1;
            if steps > bound {
                return Err(AppError::internal(
                    "Parent chain longer than entry count; tree may be cyclic",
                ));
            }
            cursor = match self.store.find_by_id(owner_id, ancestor_id).await? {
                Some(ancestor) => ancestor.parent_id,
                None => None,
            };
        }

        Ok(())
    }
}

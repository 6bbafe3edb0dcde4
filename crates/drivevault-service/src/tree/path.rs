//! Full-path resolution by walking parent links.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use drivevault_core::result::AppResult;
use drivevault_database::store::EntryStore;
use drivevault_entity::entry::Entry;

/// Label for the virtual root node.
const ROOT_LABEL: &str = "Home";

/// Separator between segments in display paths.
const PATH_SEPARATOR: &str = " / ";

/// Resolves an entry's full display path from the virtual root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    store: Arc<dyn EntryStore>,
}

impl PathResolver {
    /// Creates a new path resolver.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Resolve the ordered name segments from the virtual root to the
    /// entry inclusive, starting with the implicit "Home" label.
    ///
    /// A missing parent reference stops the walk at that point instead of
    /// failing: listings and search must keep working even if the store
    /// holds an orphaned entry. The walk is additionally capped at the
    /// owner's total entry count so a corrupted cyclic chain cannot spin
    /// forever.
    pub async fn resolve(&self, owner_id: Uuid, entry: &Entry) -> AppResult<Vec<String>> {
        let mut segments = vec![entry.name.clone()];
        let mut cursor = entry.parent_id;

        let bound = self.store.count_entries(owner_id).await?;
        let mut steps = 0u64;

        while let Some(parent_id) = cursor {
            steps += 1;
            if steps > bound {
                warn!(
                    owner_id = %owner_id,
                    entry_id = %entry.id,
                    "Parent chain longer than entry count; stopping path walk"
                );
                break;
            }
            match self.store.find_by_id(owner_id, parent_id).await? {
                Some(parent) => {
                    segments.push(parent.name.clone());
                    cursor = parent.parent_id;
                }
                // Dangling reference: treat this point as an orphan root.
                None => break,
            }
        }

        segments.push(ROOT_LABEL.to_string());
        segments.reverse();
        Ok(segments)
    }

    /// Resolve the entry's path as a single display string,
    /// e.g. `Home / docs / reports / q3`.
    pub async fn display(&self, owner_id: Uuid, entry: &Entry) -> AppResult<String> {
        Ok(self.resolve(owner_id, entry).await?.join(PATH_SEPARATOR))
    }
}

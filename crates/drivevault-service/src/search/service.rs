//! Entry search service.

use std::sync::Arc;

use uuid::Uuid;

use drivevault_core::result::AppResult;
use drivevault_database::store::EntryStore;
use drivevault_entity::entry::SearchHit;

use crate::tree::path::PathResolver;

/// Searches a user's live entries by name and extension.
#[derive(Debug, Clone)]
pub struct SearchService {
    /// Entry store.
    store: Arc<dyn EntryStore>,
    /// Path annotation for hits.
    resolver: PathResolver,
    /// Maximum number of results per search.
    result_limit: u32,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(store: Arc<dyn EntryStore>, result_limit: u32) -> Self {
        Self {
            resolver: PathResolver::new(store.clone()),
            store,
            result_limit,
        }
    }

    /// Case-insensitive substring search over name and (files) extension.
    ///
    /// An empty or whitespace-only query returns an empty result set, not
    /// an error. Results come back folders first, then name ascending,
    /// capped at the configured limit, each annotated with its resolved
    /// full path for display.
    pub async fn search(&self, owner_id: Uuid, query: &str) -> AppResult<Vec<SearchHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.store.search(owner_id, query, self.result_limit).await?;

        let mut hits = Vec::with_capacity(entries.len());
        for entry in entries {
            let full_path = self.resolver.display(owner_id, &entry).await?;
            hits.push(SearchHit { entry, full_path });
        }
        Ok(hits)
    }
}

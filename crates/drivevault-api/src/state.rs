//! Application state shared across all handlers.

use std::sync::Arc;

use drivevault_core::config::AppConfig;
use drivevault_core::traits::blob::BlobStore;
use drivevault_database::store::EntryStore;
use drivevault_service::{EntryService, SearchService, UsageService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Entry store
    pub store: Arc<dyn EntryStore>,
    /// Blob storage backend
    pub blob_store: Arc<dyn BlobStore>,
    /// Entry CRUD and tree service
    pub entry_service: Arc<EntryService>,
    /// Search service
    pub search_service: Arc<SearchService>,
    /// Storage usage service
    pub usage_service: Arc<UsageService>,
}

impl AppState {
    /// Wires services over the given store and blob backend.
    pub fn new(
        config: Arc<AppConfig>,
        store: Arc<dyn EntryStore>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        let entry_service = Arc::new(EntryService::new(store.clone()));
        let search_service = Arc::new(SearchService::new(
            store.clone(),
            config.search.result_limit,
        ));
        let usage_service = Arc::new(UsageService::new(store.clone(), config.storage.quota_bytes));

        Self {
            config,
            store,
            blob_store,
            entry_service,
            search_service,
            usage_service,
        }
    }
}

//! Storage usage statistics against the configured quota.

use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use drivevault_core::result::AppResult;
use drivevault_database::store::EntryStore;
use drivevault_entity::usage::{MimeTypeUsage, StorageUsage};

/// Computes a user's storage usage.
#[derive(Debug, Clone)]
pub struct UsageService {
    /// Entry store.
    store: Arc<dyn EntryStore>,
    /// Per-user quota in bytes.
    quota_bytes: u64,
}

impl UsageService {
    /// Creates a new usage service.
    pub fn new(store: Arc<dyn EntryStore>, quota_bytes: u64) -> Self {
        Self { store, quota_bytes }
    }

    /// Total bytes, file count, and per-MIME-type breakdown over the
    /// owner's live files.
    pub async fn usage(&self, owner_id: Uuid) -> AppResult<StorageUsage> {
        let files = self.store.find_files(owner_id).await?;

        let mut used_bytes = 0u64;
        let mut by_type: BTreeMap<String, MimeTypeUsage> = BTreeMap::new();

        for file in &files {
            let size = file.size_bytes.max(0) as u64;
            used_bytes += size;

            let top_level = file
                .mime_type
                .as_deref()
                .and_then(|m| m.split('/').next())
                .filter(|t| !t.is_empty())
                .unwrap_or("other");
            let bucket = by_type.entry(top_level.to_string()).or_default();
            bucket.count += 1;
            bucket.size_bytes += size;
        }

        let percentage = if self.quota_bytes == 0 {
            0.0
        } else {
            let raw = used_bytes as f64 / self.quota_bytes as f64 * 100.0;
            (raw * 100.0).round() / 100.0
        };

        Ok(StorageUsage {
            used_bytes,
            limit_bytes: self.quota_bytes,
            percentage,
            file_count: files.len() as u64,
            by_type,
        })
    }
}

//! Blob storage and quota configuration.

use serde::{Deserialize, Serialize};

/// Blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for locally stored blobs.
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
    /// Per-user storage quota in bytes.
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            quota_bytes: default_quota_bytes(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_root_dir() -> String {
    "./data/blobs".to_string()
}

/// 1 GiB.
fn default_quota_bytes() -> u64 {
    1_073_741_824
}

/// 50 MiB.
fn default_max_upload() -> u64 {
    52_428_800
}

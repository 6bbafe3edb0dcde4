//! Storage usage statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-MIME-top-level-type usage bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MimeTypeUsage {
    /// Number of live files of this type.
    pub count: u64,
    /// Total bytes of this type.
    pub size_bytes: u64,
}

/// A user's storage usage against their configured quota.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageUsage {
    /// Bytes used by live files.
    pub used_bytes: u64,
    /// Configured quota in bytes.
    pub limit_bytes: u64,
    /// Used percentage of the quota (0.0–100.0, may exceed 100).
    pub percentage: f64,
    /// Number of live files.
    pub file_count: u64,
    /// Usage grouped by MIME top-level type ("image", "video", ...;
    /// "other" for files without a recognizable type).
    pub by_type: BTreeMap<String, MimeTypeUsage>,
}

//! Display-side shapes built from entries.

use serde::{Deserialize, Serialize};

use super::model::Entry;

/// Direct children of a folder, folders first, each group name-sorted
/// case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Child folders.
    pub folders: Vec<Entry>,
    /// Child files.
    pub files: Vec<Entry>,
}

/// A search result annotated with its resolved full path for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matching entry.
    #[serde(flatten)]
    pub entry: Entry,
    /// Full display path from the virtual root, e.g. `Home / docs / report`.
    pub full_path: String,
}

//! # drivevault-service
//!
//! Domain services over the entry store: the tree-integrity algorithms
//! (path resolution, cycle guarding, cascade deletion), entry CRUD,
//! listing/search, and storage usage.

pub mod entry;
pub mod search;
pub mod tree;
pub mod usage;

#[cfg(test)]
pub(crate) mod testutil;

pub use entry::service::EntryService;
pub use search::service::SearchService;
pub use tree::cascade::CascadeDeleter;
pub use tree::cycle::CycleGuard;
pub use tree::path::PathResolver;
pub use usage::UsageService;

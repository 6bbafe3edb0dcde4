//! # drivevault-entity
//!
//! Domain entities for DriveVault: the unified file/folder [`entry::Entry`]
//! record and the display-side types built from it.

pub mod entry;
pub mod usage;

pub use entry::{CreateEntry, Entry, EntryKind, Listing, SearchHit};
pub use usage::{MimeTypeUsage, StorageUsage};

//! Entry CRUD operations.

pub mod service;

pub use service::{EntryService, RegisterFile};

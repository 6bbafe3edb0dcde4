//! Name/extension search with full-path annotation.

pub mod service;

pub use service::SearchService;

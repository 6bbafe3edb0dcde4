//! HTTP request handlers, organized by domain.

pub mod entry;
pub mod file;
pub mod folder;
pub mod health;
pub mod search;
pub mod storage;

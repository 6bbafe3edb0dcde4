//! HTTP integration tests running the full router over the in-memory
//! entry store and a temp-dir blob store.

mod helpers;

mod entry_test;
mod file_test;
mod health_test;
mod search_test;
mod storage_test;
mod tree_test;

//! # drivevault-database
//!
//! The [`store::EntryStore`] trait and its two implementations: a
//! PostgreSQL store backed by sqlx, and a DashMap-backed in-memory store
//! used by tests and local development.

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryEntryStore;
pub use postgres::PgEntryStore;
pub use store::EntryStore;

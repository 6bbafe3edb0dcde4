//! # drivevault-storage
//!
//! Blob store implementations. Currently a single local-filesystem
//! provider; the [`drivevault_core::traits::BlobStore`] trait leaves room
//! for remote backends.

pub mod local;

pub use local::LocalBlobStore;

//! Blob store trait for pluggable binary content backends.
//!
//! The entry tree never holds blob bytes; it only records the opaque
//! storage ref returned by [`BlobStore::write`] and hands it back to the
//! transport layer for streaming downloads.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use uuid::Uuid;

use crate::result::AppResult;

/// A byte stream type used for reading blob contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for binary blob storage backends.
///
/// The `BlobStore` trait is defined here in `drivevault-core` and
/// implemented in `drivevault-storage` (local filesystem provider).
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Write blob content for an owner and return its opaque storage ref.
    ///
    /// The file name is used only to keep refs human-debuggable; uniqueness
    /// is guaranteed by the provider.
    async fn write(&self, owner_id: Uuid, file_name: &str, data: Bytes) -> AppResult<String>;

    /// Read blob content back as a byte stream.
    async fn read(&self, storage_ref: &str) -> AppResult<ByteStream>;

    /// Delete blob content.
    async fn delete(&self, storage_ref: &str) -> AppResult<()>;

    /// Check whether a blob exists for the given storage ref.
    async fn exists(&self, storage_ref: &str) -> AppResult<bool>;
}

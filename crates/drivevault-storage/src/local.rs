//! Local filesystem blob store.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::debug;
use uuid::Uuid;

use drivevault_core::error::{AppError, ErrorKind};
use drivevault_core::result::AppResult;
use drivevault_core::traits::blob::{BlobStore, ByteStream};

/// Blob store rooted at a local directory.
///
/// Storage refs have the shape `{owner_id}/{uuid}-{file_name}` so blobs
/// are grouped per user and never collide on name.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a new local blob store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a storage ref to an absolute path within the root.
    fn resolve(&self, storage_ref: &str) -> PathBuf {
        let clean = storage_ref.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Strip path separators from a user-supplied file name.
    fn sanitize(file_name: &str) -> String {
        file_name
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect()
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn write(&self, owner_id: Uuid, file_name: &str, data: Bytes) -> AppResult<String> {
        let storage_ref = format!("{owner_id}/{}-{}", Uuid::new_v4(), Self::sanitize(file_name));
        let full_path = self.resolve(&storage_ref);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create blob directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let mut file = fs::File::create(&full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create blob: {storage_ref}"),
                e,
            )
        })?;
        file.write_all(&data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {storage_ref}"),
                e,
            )
        })?;
        file.flush().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to flush blob: {storage_ref}"),
                e,
            )
        })?;

        debug!(storage_ref = %storage_ref, bytes = data.len(), "Blob written");
        Ok(storage_ref)
    }

    async fn read(&self, storage_ref: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(storage_ref);
        let file = fs::File::open(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {storage_ref}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open blob: {storage_ref}"),
                    e,
                )
            }
        })?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream.map(|r| r.map(|b| b.into()))))
    }

    async fn delete(&self, storage_ref: &str) -> AppResult<()> {
        let full_path = self.resolve(storage_ref);
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(storage_ref = %storage_ref, "Blob deleted");
                Ok(())
            }
            // Deleting a missing blob is a no-op.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete blob: {storage_ref}"),
                e,
            )),
        }
    }

    async fn exists(&self, storage_ref: &str) -> AppResult<bool> {
        Ok(fs::try_exists(self.resolve(storage_ref)).await.unwrap_or(false))
    }
}

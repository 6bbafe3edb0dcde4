//! PostgreSQL entry store implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use drivevault_core::error::{AppError, ErrorKind};
use drivevault_core::result::AppResult;
use drivevault_entity::entry::{CreateEntry, Entry, EntryKind};

use crate::store::EntryStore;

/// Entry store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgEntryStore {
    pool: PgPool,
}

impl PgEntryStore {
    /// Create a new Postgres entry store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards in a user-supplied search term.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))?;
        Ok(())
    }

    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> AppResult<Option<Entry>> {
        sqlx::query_as::<_, Entry>(
            "SELECT * FROM entries WHERE id = $1 AND owner_id = $2 AND NOT is_deleted",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find entry", e))
    }

    async fn find_children(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        kind: Option<EntryKind>,
    ) -> AppResult<Vec<Entry>> {
        sqlx::query_as::<_, Entry>(
            "SELECT * FROM entries \
             WHERE owner_id = $1 AND parent_id IS NOT DISTINCT FROM $2 \
               AND NOT is_deleted \
               AND ($3::entry_kind IS NULL OR kind = $3)",
        )
        .bind(owner_id)
        .bind(parent_id)
        .bind(kind)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn find_folder_by_name(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        name: &str,
    ) -> AppResult<Option<Entry>> {
        sqlx::query_as::<_, Entry>(
            "SELECT * FROM entries \
             WHERE owner_id = $1 AND parent_id IS NOT DISTINCT FROM $2 \
               AND name = $3 AND kind = 'folder' AND NOT is_deleted",
        )
        .bind(owner_id)
        .bind(parent_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find folder by name", e)
        })
    }

    async fn insert(&self, data: &CreateEntry) -> AppResult<Entry> {
        sqlx::query_as::<_, Entry>(
            "INSERT INTO entries \
             (owner_id, parent_id, name, kind, extension, size_bytes, mime_type, storage_ref) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.parent_id)
        .bind(&data.name)
        .bind(data.kind)
        .bind(&data.extension)
        .bind(data.size_bytes)
        .bind(&data.mime_type)
        .bind(&data.storage_ref)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("uniq_entries_live_folder_name") =>
            {
                AppError::invalid_operation(format!(
                    "A folder named '{}' already exists in this location",
                    data.name
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create entry", e),
        })
    }

    async fn rename(&self, owner_id: Uuid, id: Uuid, new_name: &str) -> AppResult<Entry> {
        sqlx::query_as::<_, Entry>(
            "UPDATE entries SET name = $3, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 AND NOT is_deleted RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(new_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename entry", e))?
        .ok_or_else(|| AppError::not_found("Entry not found"))
    }

    async fn reparent(
        &self,
        owner_id: Uuid,
        id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> AppResult<Entry> {
        sqlx::query_as::<_, Entry>(
            "UPDATE entries SET parent_id = $3, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 AND NOT is_deleted RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(new_parent_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move entry", e))?
        .ok_or_else(|| AppError::not_found("Entry not found"))
    }

    async fn set_starred(&self, owner_id: Uuid, id: Uuid, starred: bool) -> AppResult<Entry> {
        sqlx::query_as::<_, Entry>(
            "UPDATE entries SET is_starred = $3, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 AND NOT is_deleted RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(starred)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to star entry", e))?
        .ok_or_else(|| AppError::not_found("Entry not found"))
    }

    async fn mark_deleted(&self, owner_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE entries SET is_deleted = TRUE, deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 AND NOT is_deleted",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete entry", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn mark_files_deleted(&self, owner_id: Uuid, parent_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE entries SET is_deleted = TRUE, deleted_at = NOW(), updated_at = NOW() \
             WHERE owner_id = $1 AND parent_id = $2 AND kind = 'file' AND NOT is_deleted",
        )
        .bind(owner_id)
        .bind(parent_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete files", e))?;
        Ok(result.rows_affected())
    }

    async fn search(&self, owner_id: Uuid, query: &str, limit: u32) -> AppResult<Vec<Entry>> {
        let pattern = format!("%{}%", escape_like(query));
        sqlx::query_as::<_, Entry>(
            "SELECT * FROM entries \
             WHERE owner_id = $1 AND NOT is_deleted \
               AND (name ILIKE $2 OR (kind = 'file' AND extension ILIKE $2)) \
             ORDER BY (kind = 'folder')::int DESC, LOWER(name) ASC \
             LIMIT $3",
        )
        .bind(owner_id)
        .bind(pattern)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search entries", e))
    }

    async fn count_entries(&self, owner_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM entries WHERE owner_id = $1 AND NOT is_deleted",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count entries", e))?;
        Ok(count as u64)
    }

    async fn find_files(&self, owner_id: Uuid) -> AppResult<Vec<Entry>> {
        sqlx::query_as::<_, Entry>(
            "SELECT * FROM entries WHERE owner_id = $1 AND kind = 'file' AND NOT is_deleted",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }
}

use crate::error::{Result, StorageError};
use ingest_core::types::{CreateKnownFile, KnownFile, KnownFileId};
use sqlx::SqlitePool;

type KnownFileRow = (i64, String, Option<String>, Option<String>, String);

fn from_row((id, md5, filename, track_type_code, created_at): KnownFileRow) -> KnownFile {
    KnownFile {
        id,
        md5,
        filename,
        track_type_code,
        created_at,
    }
}

/// Get a known file by ID
pub async fn get_by_id(pool: &SqlitePool, id: KnownFileId) -> Result<Option<KnownFile>> {
    let row = sqlx::query_as::<_, KnownFileRow>(
        "SELECT id, md5, filename, track_type_code, created_at
         FROM files
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(from_row))
}

/// Find known files with the given content hash
pub async fn find_by_hash(pool: &SqlitePool, md5: &str) -> Result<Vec<KnownFile>> {
    let rows = sqlx::query_as::<_, KnownFileRow>(
        "SELECT id, md5, filename, track_type_code, created_at
         FROM files
         WHERE md5 = ?
         ORDER BY id",
    )
    .bind(md5)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(from_row).collect())
}

/// Check whether any file with this content hash is already known
pub async fn exists_by_hash(pool: &SqlitePool, md5: &str) -> Result<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM files WHERE md5 = ? LIMIT 1")
        .bind(md5)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}

/// Record a known file
pub async fn create(pool: &SqlitePool, file: CreateKnownFile) -> Result<KnownFile> {
    let result = sqlx::query(
        "INSERT INTO files (md5, filename, track_type_code)
         VALUES (?, ?, ?)",
    )
    .bind(&file.md5)
    .bind(&file.filename)
    .bind(&file.track_type_code)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("File", id.to_string()))
}

/// Count known files
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

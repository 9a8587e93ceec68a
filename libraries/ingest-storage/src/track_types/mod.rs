use crate::error::{Result, StorageError};
use ingest_core::types::{CreateTrackType, TrackType, TrackTypeId};
use sqlx::SqlitePool;

type TrackTypeRow = (i64, String, String, String, bool);

fn from_row((id, code, type_name, description, visibility): TrackTypeRow) -> TrackType {
    TrackType {
        id,
        code,
        type_name,
        description,
        visibility,
    }
}

/// Get all track types ordered by code
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<TrackType>> {
    let rows = sqlx::query_as::<_, TrackTypeRow>(
        "SELECT id, code, type_name, description, visibility
         FROM track_types
         ORDER BY code",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(from_row).collect())
}

/// Get a track type by ID
pub async fn get_by_id(pool: &SqlitePool, id: TrackTypeId) -> Result<Option<TrackType>> {
    let row = sqlx::query_as::<_, TrackTypeRow>(
        "SELECT id, code, type_name, description, visibility
         FROM track_types
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(from_row))
}

/// Get a track type by its code
pub async fn get_by_code(pool: &SqlitePool, code: &str) -> Result<Option<TrackType>> {
    let row = sqlx::query_as::<_, TrackTypeRow>(
        "SELECT id, code, type_name, description, visibility
         FROM track_types
         WHERE code = ?",
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(from_row))
}

/// Check whether a track type with this code exists.
///
/// Codes are compared exactly: "mus" does not match "MUS".
pub async fn exists_by_code(pool: &SqlitePool, code: &str) -> Result<bool> {
    let found: Option<i64> =
        sqlx::query_scalar("SELECT 1 FROM track_types WHERE code = ? LIMIT 1")
            .bind(code)
            .fetch_optional(pool)
            .await?;

    Ok(found.is_some())
}

/// Create a new track type
pub async fn create(pool: &SqlitePool, track_type: CreateTrackType) -> Result<TrackType> {
    let result = sqlx::query(
        "INSERT INTO track_types (code, type_name, description)
         VALUES (?, ?, ?)",
    )
    .bind(&track_type.code)
    .bind(&track_type.type_name)
    .bind(&track_type.description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("Track type", id.to_string()))
}

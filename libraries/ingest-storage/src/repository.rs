use crate::{files, track_types};
use async_trait::async_trait;
use ingest_core::{ImportRepository, Result};
use sqlx::SqlitePool;

/// [`ImportRepository`] backed by the local `SQLite` database
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ImportRepository for SqliteRepository {
    async fn exists_by_hash(&self, hash: &str) -> Result<bool> {
        Ok(files::exists_by_hash(&self.pool, hash).await?)
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool> {
        Ok(track_types::exists_by_code(&self.pool, code).await?)
    }
}

//! Ingest Storage
//!
//! `SQLite` persistence for the records the importer consults: track types and
//! files already known to the media library.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each table owns its own queries (`track_types`, `files`)
//! - **Read-mostly**: The importer only asks existence questions through
//!   [`SqliteRepository`]; the `create` functions exist for tooling and fixtures
//!
//! # Example
//!
//! ```rust,no_run
//! use ingest_core::ImportRepository;
//! use ingest_storage::{create_pool, run_migrations, SqliteRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://ingest.db").await?;
//! run_migrations(&pool).await?;
//!
//! let repository = SqliteRepository::new(pool);
//! let known = repository.exists_by_code("MUS").await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod repository;

// Vertical slices
pub mod files;
pub mod track_types;

pub use error::{Result, StorageError};
pub use repository::SqliteRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://ingest.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

//! Command implementations

use crate::config::IngestConfig;
use crate::error::Result;
use ingest_client::{ClientConfig, MediaClient};
use ingest_core::TrackType;
use ingest_importer::{ImportSummary, Importer, UploadFailurePolicy};
use ingest_storage::SqliteRepository;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments of one bulk import run
#[derive(Debug, Clone, Default)]
pub struct BulkImportArgs {
    pub path: PathBuf,
    pub track_type: Option<String>,
    /// Falls back to the configured extensions when empty
    pub allowed_extensions: Vec<String>,
    pub delete_after_upload: bool,
    pub delete_if_exists: bool,
    pub continue_on_error: bool,
    pub follow_links: bool,
}

/// Upload every matching file under `args.path`
pub async fn bulk_import(config: &IngestConfig, args: &BulkImportArgs) -> Result<ImportSummary> {
    config.validate()?;

    let pool = ingest_storage::create_pool(&config.storage.database_url).await?;
    ingest_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    let client = MediaClient::new(
        ClientConfig::new(&config.api.url, &config.api.key).with_timeout(config.api.timeout_secs),
    )?;
    tracing::info!(url = %client.url(), "Media client initialized");

    let extensions: &[String] = if args.allowed_extensions.is_empty() {
        &config.import.allowed_extensions
    } else {
        &args.allowed_extensions
    };

    let failure_policy = if args.continue_on_error {
        UploadFailurePolicy::Continue
    } else {
        UploadFailurePolicy::Abort
    };

    let importer = Importer::new(Arc::new(SqliteRepository::new(pool)), Arc::new(client))
        .delete_after_upload(args.delete_after_upload)
        .delete_if_exists(args.delete_if_exists)
        .follow_links(args.follow_links)
        .on_upload_failure(failure_policy);

    let summary = importer
        .import_dir(&args.path, args.track_type.as_deref(), extensions)
        .await?;

    Ok(summary)
}

/// List the track types known to the local database
pub async fn list_track_types(config: &IngestConfig) -> Result<Vec<TrackType>> {
    let pool = ingest_storage::create_pool(&config.storage.database_url).await?;
    ingest_storage::run_migrations(&pool).await?;

    Ok(ingest_storage::track_types::get_all(&pool).await?)
}

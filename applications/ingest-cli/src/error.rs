/// Application error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] ingest_storage::StorageError),

    #[error("Client error: {0}")]
    Client(#[from] ingest_client::ClientError),

    #[error(transparent)]
    Import(#[from] ingest_importer::ImportError),
}

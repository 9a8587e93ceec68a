//! Error types for the importer

use ingest_core::IngestError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("provided track type {0} does not exist")]
    TrackTypeNotFound(String),

    #[error("could not upload {}: {}", .path.display(), .source)]
    Upload {
        path: PathBuf,
        source: IngestError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Traversal error: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("{0}")]
    Ingest(#[from] IngestError),

    #[error("Invalid file path: {0}")]
    InvalidPath(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl ImportError {
    /// Whether this error came from the upload step of a single file
    pub fn is_upload_failure(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }
}

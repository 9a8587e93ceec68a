//! Error types for the media client.

use ingest_core::IngestError;
use thiserror::Error;

/// Errors that can occur when talking to the media endpoint.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// API key was refused
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// File not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Track type code unusable as a cookie value
    #[error("Invalid track type code: {0:?}")]
    InvalidTrackType(String),

    /// IO error while reading the upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for media client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for IngestError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ServerError { status, message } => IngestError::Upload { status, message },
            ClientError::AuthFailed(msg) => IngestError::Auth(msg),
            ClientError::InvalidUrl(msg) => IngestError::invalid_input(msg),
            ClientError::InvalidTrackType(code) => {
                IngestError::invalid_input(format!("invalid track type code {code:?}"))
            }
            ClientError::FileNotFound(path) => IngestError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            )),
            ClientError::Io(e) => IngestError::Io(e),
            ClientError::ServerUnreachable(msg) => IngestError::transport(msg),
            ClientError::Request(e) => IngestError::transport(e.to_string()),
        }
    }
}

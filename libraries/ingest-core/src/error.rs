/// Core error types for Ingest
use thiserror::Error;

/// Result type alias using `IngestError`
pub type Result<T> = std::result::Result<T, IngestError>;

/// Core error type shared by every collaborator of the importer
#[derive(Error, Debug)]
pub enum IngestError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The media endpoint answered with a non-success status
    #[error("Upload rejected ({status}): {message}")]
    Upload {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// The request never produced a response (connect, timeout, TLS...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Credentials were refused by the media endpoint
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

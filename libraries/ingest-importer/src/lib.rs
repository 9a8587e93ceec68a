//! Ingest Bulk Importer
//!
//! This crate walks a directory tree and uploads the media files it finds to a
//! remote media endpoint, skipping anything the remote library already knows.
//!
//! # Features
//!
//! - Recursive directory scanning with an extension filter
//! - Duplicate detection via MD5 content hashing
//! - Upload through any [`ingest_core::MediaUploader`]
//! - Optional deletion after upload or when a duplicate is found
//! - Configurable handling of upload failures (abort or continue)
//!
//! # Architecture
//!
//! - `scanner`: Filesystem scanning for candidate files
//! - `hashing`: MD5 hashing and deletion on the local filesystem
//! - `importer`: Orchestration of the import process

mod error;
mod types;

pub mod hashing;
pub mod importer;
pub mod scanner;

pub use error::ImportError;
pub use hashing::Filesystem;
pub use importer::Importer;
pub use types::*;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ImportError>;

//! Ingest CLI Library
//!
//! Configuration loading and command implementations for the `ingest` binary.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use commands::BulkImportArgs;
pub use config::IngestConfig;
pub use error::{AppError, Result};

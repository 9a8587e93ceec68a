//! Ingest Core
//!
//! Shared types, capability traits, and error handling for the Ingest bulk importer.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `TrackType`, `KnownFile`
//! - **Core Traits**: `ImportRepository`, `MediaUploader`, `LocalFiles`
//! - **Error Handling**: Unified `IngestError` and `Result` types
//!
//! Storage, HTTP and filesystem implementations live in their own crates and
//! plug into the importer through the traits defined here.
//!
//! # Example
//!
//! ```rust
//! use ingest_core::types::TrackType;
//!
//! let music = TrackType::new("MUS", "Music");
//! assert_eq!(music.code, "MUS");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{IngestError, Result};
pub use traits::{ImportRepository, LocalFiles, MediaUploader};
pub use types::{CreateKnownFile, CreateTrackType, KnownFile, KnownFileId, TrackType, TrackTypeId};

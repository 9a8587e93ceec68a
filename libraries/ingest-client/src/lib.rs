//! Ingest Media Client
//!
//! HTTP client library for the media upload endpoint.
//!
//! # Features
//!
//! - **Authentication**: HTTP basic auth with an API key
//! - **Upload**: Multipart upload of a single media file tagged with a track type
//!
//! # Example
//!
//! ```ignore
//! use ingest_client::{ClientConfig, MediaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://radio.example.com", "api-key");
//!     let client = MediaClient::new(config)?;
//!
//!     client
//!         .upload_file(std::path::Path::new("song.mp3"), Some("MUS"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod upload;

pub use client::MediaClient;
pub use error::{ClientError, Result};
pub use types::ClientConfig;
pub use upload::{UploadClient, MEDIA_PATH, TRACK_TYPE_COOKIE};

//! Main media endpoint client.

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;
use crate::upload::UploadClient;
use async_trait::async_trait;
use ingest_core::MediaUploader;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Client for the media upload endpoint.
///
/// Holds the normalized base URL, the API key and a configured HTTP client.
///
/// # Example
///
/// ```ignore
/// use ingest_client::{ClientConfig, MediaClient};
///
/// let client = MediaClient::new(ClientConfig::new("https://radio.example.com", "key"))?;
/// client.upload_file(Path::new("song.mp3"), Some("MUS")).await?;
/// ```
pub struct MediaClient {
    http: Client,
    config: ClientConfig,
}

impl MediaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = ClientConfig { url, ..config };

        let http = Client::builder()
            .timeout(Duration::from_secs(normalized_config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("ingest/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: normalized_config,
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Get an upload client.
    pub fn uploads(&self) -> UploadClient<'_> {
        UploadClient::new(&self.http, &self.config.url, &self.config.api_key)
    }

    /// Upload a single file, tagged with an optional track type code.
    pub async fn upload_file(&self, path: &Path, track_type: Option<&str>) -> Result<()> {
        self.uploads().upload_file(path, track_type).await
    }
}

#[async_trait]
impl MediaUploader for MediaClient {
    async fn upload(&self, path: &Path, track_type: Option<&str>) -> ingest_core::Result<()> {
        Ok(self.upload_file(path, track_type).await?)
    }
}

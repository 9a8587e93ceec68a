//! Media upload operation.

use crate::error::{ClientError, Result};
use reqwest::header::COOKIE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Endpoint path, relative to the base URL, that accepts uploads.
pub const MEDIA_PATH: &str = "/rest/media";

/// Cookie the media endpoint reads the track type from.
pub const TRACK_TYPE_COOKIE: &str = "tt_upload";

/// Upload client for the media endpoint.
pub struct UploadClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    api_key: &'a str,
}

impl<'a> UploadClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, api_key: &'a str) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Upload a single media file.
    ///
    /// # Arguments
    /// * `file_path` - Path to the media file
    /// * `track_type` - Optional track type code to tag the upload with
    ///
    /// # Returns
    /// `Ok(())` on any 2xx response, an error otherwise.
    pub async fn upload_file(&self, file_path: &Path, track_type: Option<&str>) -> Result<()> {
        if !file_path.is_file() {
            return Err(ClientError::FileNotFound(file_path.display().to_string()));
        }

        if let Some(code) = track_type {
            validate_track_type(code)?;
        }

        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(file = %file_path.display(), track_type = ?track_type, "Uploading file");

        // The handle is dropped as soon as the bytes are in memory
        let contents = {
            let mut file = File::open(file_path).await?;
            let mut contents = Vec::new();
            file.read_to_end(&mut contents).await?;
            contents
        };

        let file_size = contents.len();

        let file_part = Part::bytes(contents)
            .file_name(file_name.clone())
            .mime_str(mime_type_for_file(file_path))?;

        let mut form = Form::new().part("file", file_part);
        if let Some(code) = track_type {
            form = form.text("track_type", code.to_string());
        }

        let url = format!("{}{}", self.base_url, MEDIA_PATH);

        let mut request = self
            .http
            .post(&url)
            .basic_auth(self.api_key, Some(""))
            .multipart(form);

        if let Some(code) = track_type {
            request = request.header(COOKIE, format!("{}={}", TRACK_TYPE_COOKIE, code));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            info!(
                file = %file_name,
                size = file_size,
                track_type = ?track_type,
                status = status.as_u16(),
                "File uploaded"
            );
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::AuthFailed(format!(
                "{} {}",
                status.as_u16(),
                error_text
            )))
        } else if status == StatusCode::PAYLOAD_TOO_LARGE {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: "File too large".to_string(),
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

/// Reject track type codes that cannot travel as a cookie value.
fn validate_track_type(code: &str) -> Result<()> {
    let invalid = code.chars().any(|c| {
        c.is_whitespace() || c.is_control() || matches!(c, ';' | '=' | ',' | '"' | '\\')
    });

    if code.is_empty() || invalid {
        return Err(ClientError::InvalidTrackType(code.to_string()));
    }

    Ok(())
}

/// Get MIME type for a media file.
fn mime_type_for_file(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("opus") => "audio/opus",
        Some("wav") => "audio/wav",
        Some("m4a" | "aac") => "audio/mp4",
        _ => "application/octet-stream",
    }
}

//! Domain types shared across crates

use serde::{Deserialize, Serialize};

pub type TrackTypeId = i64;
pub type KnownFileId = i64;

/// A classification code attached to uploaded media (e.g. "MUS" for music)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackType {
    pub id: TrackTypeId,
    pub code: String,
    pub type_name: String,
    pub description: String,
    pub visibility: bool,
}

impl TrackType {
    /// Build an unsaved track type with the given code and display name
    pub fn new(code: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            code: code.into(),
            type_name: type_name.into(),
            description: String::new(),
            visibility: true,
        }
    }
}

/// Data for creating a new track type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrackType {
    pub code: String,
    pub type_name: String,
    pub description: String,
}

/// A file already known to the remote system, keyed by content hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownFile {
    pub id: KnownFileId,
    pub md5: String,
    pub filename: Option<String>,
    pub track_type_code: Option<String>,
    pub created_at: String,
}

/// Data for recording a known file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKnownFile {
    pub md5: String,
    pub filename: Option<String>,
    pub track_type_code: Option<String>,
}

/// Core traits for Ingest
///
/// These are the seams between the importer pipeline and the outside world.
/// Each one can be swapped for a test double.
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Lookup of what the remote system already knows.
///
/// The importer only ever asks existence questions; it never writes through
/// this trait.
#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// Whether a file with this content hash (hex MD5) was already imported
    async fn exists_by_hash(&self, hash: &str) -> Result<bool>;

    /// Whether a track type with this code exists
    async fn exists_by_code(&self, code: &str) -> Result<bool>;
}

/// Remote media endpoint accepting file uploads.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload a single file, tagged with an optional track type code.
    ///
    /// # Errors
    /// Any non-success response or transport failure is an error.
    async fn upload(&self, path: &Path, track_type: Option<&str>) -> Result<()>;
}

/// Local filesystem operations performed on each discovered file.
pub trait LocalFiles: Send + Sync {
    /// Compute the content hash used as dedup key (hex-encoded MD5)
    fn hash(&self, path: &Path) -> Result<String>;

    /// Remove the file. A file that is already gone counts as removed.
    fn delete(&self, path: &Path) -> Result<()>;
}

//! Main importer orchestration - scanning, dedup, upload and deletion

use crate::{
    hashing::Filesystem, scanner::FileScanner, FileOutcome, ImportError, ImportSummary, Result,
    UploadFailurePolicy,
};
use ingest_core::{ImportRepository, LocalFiles, MediaUploader};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Bulk importer orchestrator
///
/// Files are handled strictly one after the other: a file is hashed, checked
/// against the repository and uploaded to completion before the next one is
/// looked at.
pub struct Importer {
    repository: Arc<dyn ImportRepository>,
    uploader: Arc<dyn MediaUploader>,
    files: Arc<dyn LocalFiles>,
    delete_after_upload: bool,
    delete_if_exists: bool,
    follow_links: bool,
    failure_policy: UploadFailurePolicy,
}

impl Importer {
    /// Create a new importer working on the real filesystem.
    ///
    /// Both deletion flags start disabled and upload failures abort the run.
    pub fn new(repository: Arc<dyn ImportRepository>, uploader: Arc<dyn MediaUploader>) -> Self {
        Self {
            repository,
            uploader,
            files: Arc::new(Filesystem),
            delete_after_upload: false,
            delete_if_exists: false,
            follow_links: false,
            failure_policy: UploadFailurePolicy::default(),
        }
    }

    /// Remove each file once its upload has been accepted
    pub fn delete_after_upload(mut self, enabled: bool) -> Self {
        self.delete_after_upload = enabled;
        self
    }

    /// Remove files whose content is already known instead of leaving them
    pub fn delete_if_exists(mut self, enabled: bool) -> Self {
        self.delete_if_exists = enabled;
        self
    }

    /// Descend into symlinked directories while scanning
    pub fn follow_links(mut self, enabled: bool) -> Self {
        self.follow_links = enabled;
        self
    }

    /// Choose between aborting and continuing when an upload fails
    pub fn on_upload_failure(mut self, policy: UploadFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Replace the hashing/deletion backend
    pub fn with_local_files(mut self, files: Arc<dyn LocalFiles>) -> Self {
        self.files = files;
        self
    }

    /// Import every file under `root` whose suffix is in `extensions`.
    ///
    /// The track type, when given, is checked before anything on disk or on
    /// the network is touched. An empty code counts as no track type.
    ///
    /// # Errors
    ///
    /// - [`ImportError::TrackTypeNotFound`] if the track type code is unknown
    /// - [`ImportError::Upload`] on the first failed upload, unless the
    ///   failure policy is [`UploadFailurePolicy::Continue`]
    /// - filesystem, traversal and repository errors as they occur
    pub async fn import_dir<S: AsRef<str>>(
        &self,
        root: &Path,
        track_type: Option<&str>,
        extensions: &[S],
    ) -> Result<ImportSummary> {
        let track_type = track_type.filter(|code| !code.is_empty());

        if let Some(code) = track_type {
            if !self.repository.exists_by_code(code).await? {
                return Err(ImportError::TrackTypeNotFound(code.to_string()));
            }
        }

        let start_time = Instant::now();
        let scanner = FileScanner::new(extensions).follow_links(self.follow_links);
        let files = scanner.scan_directory(root)?;

        info!(
            root = %root.display(),
            track_type = ?track_type,
            extensions = ?scanner.extensions(),
            files = files.len(),
            "Starting import"
        );

        let mut summary = ImportSummary::new(files.len());

        for file_path in files {
            let result = self.handle_file(&file_path, track_type).await;
            match result {
                Ok(outcome) => summary.record(outcome),
                Err(err)
                    if err.is_upload_failure()
                        && self.failure_policy == UploadFailurePolicy::Continue =>
                {
                    error!(file = %file_path.display(), error = %err, "Upload failed, continuing");
                    summary.record_failure(file_path, err.to_string());
                }
                Err(err) => {
                    error!(file = %file_path.display(), error = %err, "Import aborted");
                    return Err(err);
                }
            }
        }

        summary.duration_seconds = start_time.elapsed().as_secs();
        info!("{}", summary.summary_text());

        Ok(summary)
    }

    /// Hash, dedup, upload and maybe delete a single file
    async fn handle_file(&self, file_path: &Path, track_type: Option<&str>) -> Result<FileOutcome> {
        debug!(file = %file_path.display(), "Handling file");

        let hash = self.files.hash(file_path)?;

        if self.repository.exists_by_hash(&hash).await? {
            info!(file = %file_path.display(), md5 = %hash, "Found similar md5sum, skipping");
            let deleted = self.delete_if_exists;
            if deleted {
                self.delete_file(file_path)?;
            }
            return Ok(FileOutcome::Duplicate { deleted });
        }

        self.uploader
            .upload(file_path, track_type)
            .await
            .map_err(|source| ImportError::Upload {
                path: file_path.to_path_buf(),
                source,
            })?;

        let deleted = self.delete_after_upload;
        if deleted {
            self.delete_file(file_path)?;
        }

        Ok(FileOutcome::Uploaded { deleted })
    }

    fn delete_file(&self, file_path: &Path) -> Result<()> {
        self.files.delete(file_path)?;
        info!(file = %file_path.display(), "Deleted file");
        Ok(())
    }
}

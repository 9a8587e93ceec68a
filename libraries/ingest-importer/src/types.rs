//! Common types for the importer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do when a single file fails to upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UploadFailurePolicy {
    /// Stop the run and return the error
    #[default]
    Abort,

    /// Record the failure and move on to the next file
    Continue,
}

/// Final state of a file that was handled without error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    /// Hash already known; nothing uploaded
    Duplicate { deleted: bool },

    /// Upload accepted by the endpoint
    Uploaded { deleted: bool },
}

impl FileOutcome {
    pub fn deleted(&self) -> bool {
        match self {
            Self::Duplicate { deleted } | Self::Uploaded { deleted } => *deleted,
        }
    }
}

/// Summary of an import operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Files matching the extension filter
    pub total_files: usize,

    /// Successfully uploaded
    pub uploaded: usize,

    /// Skipped because their hash was already known
    pub duplicates: usize,

    /// Removed from disk (after upload or as duplicates)
    pub deleted: usize,

    /// Failed to upload
    pub failed: usize,

    /// Error messages for failed uploads
    pub errors: Vec<(PathBuf, String)>,

    /// Duration of import operation
    pub duration_seconds: u64,
}

impl ImportSummary {
    pub(crate) fn new(total_files: usize) -> Self {
        Self {
            total_files,
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Duplicate { .. } => self.duplicates += 1,
            FileOutcome::Uploaded { .. } => self.uploaded += 1,
        }
        if outcome.deleted() {
            self.deleted += 1;
        }
    }

    pub(crate) fn record_failure(&mut self, path: PathBuf, message: String) {
        self.failed += 1;
        self.errors.push((path, message));
    }

    pub fn processed(&self) -> usize {
        self.uploaded + self.duplicates + self.failed
    }

    pub fn summary_text(&self) -> String {
        format!(
            "Import complete: {} uploaded, {} duplicates skipped, {} deleted, {} failed",
            self.uploaded, self.duplicates, self.deleted, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_outcomes() {
        let mut summary = ImportSummary::new(4);
        summary.record(FileOutcome::Uploaded { deleted: false });
        summary.record(FileOutcome::Uploaded { deleted: true });
        summary.record(FileOutcome::Duplicate { deleted: true });
        summary.record_failure(PathBuf::from("/music/a.mp3"), "boom".to_string());

        assert_eq!(summary.uploaded, 2);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(summary.deleted, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.processed(), 4);
        assert_eq!(
            summary.summary_text(),
            "Import complete: 2 uploaded, 1 duplicates skipped, 2 deleted, 1 failed"
        );
    }

    #[test]
    fn test_default_policy_aborts() {
        assert_eq!(UploadFailurePolicy::default(), UploadFailurePolicy::Abort);
    }
}

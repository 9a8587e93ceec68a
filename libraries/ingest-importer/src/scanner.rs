//! File scanning for importable media files

use crate::{ImportError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scanner for files with one of a set of extensions
pub struct FileScanner {
    /// Lower-cased suffixes, each with a leading dot
    extensions: Vec<String>,

    /// Whether to follow symbolic links
    follow_links: bool,
}

impl FileScanner {
    /// Create a scanner accepting the given suffixes.
    ///
    /// Suffixes may be given with or without the leading dot (`.mp3` or `mp3`).
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| normalize_extension(ext.as_ref()))
                .filter(|ext| ext.len() > 1)
                .collect(),
            follow_links: false,
        }
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// The normalized extension filter
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Scan a directory recursively for matching files.
    ///
    /// Traversal errors (unreadable directories, broken entries) are returned,
    /// not skipped.
    pub fn scan_directory(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        if !path.is_dir() {
            return Err(ImportError::InvalidPath(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(path).follow_links(self.follow_links) {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            if self.matches(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Check if a path ends with one of the accepted suffixes (case-insensitive)
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .is_some_and(|suffix| self.extensions.contains(&suffix))
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_matches() {
        let scanner = FileScanner::new(&[".mp3", "flac"]);

        assert!(scanner.matches(Path::new("test.mp3")));
        assert!(scanner.matches(Path::new("test.MP3")));
        assert!(scanner.matches(Path::new("test.flac")));
        assert!(!scanner.matches(Path::new("test.ogg")));
        assert!(!scanner.matches(Path::new("test")));
        assert!(!scanner.matches(Path::new(".mp3")));
    }

    #[test]
    fn test_normalized_extensions() {
        let scanner = FileScanner::new(&[".MP3", "ogg", " .wav ", ""]);
        assert_eq!(scanner.extensions(), &[".mp3", ".ogg", ".wav"]);
    }

    #[test]
    fn test_scan_directory() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();

        fs::write(base.join("song1.mp3"), b"fake mp3").unwrap();
        fs::write(base.join("song2.flac"), b"fake flac").unwrap();
        fs::write(base.join("readme.txt"), b"not audio").unwrap();

        let subdir = base.join("dir1/dir2");
        fs::create_dir_all(&subdir).unwrap();
        fs::write(subdir.join("song3.mp3"), b"fake mp3 again").unwrap();

        let scanner = FileScanner::new(&[".mp3"]);
        let files = scanner.scan_directory(base).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("song1.mp3")));
        assert!(files.iter().any(|p| p.ends_with("dir1/dir2/song3.mp3")));
        assert!(!files.iter().any(|p| p.ends_with("song2.flac")));
        assert!(!files.iter().any(|p| p.ends_with("readme.txt")));
    }

    #[test]
    fn test_directory_named_like_media_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("album.mp3")).unwrap();

        let files = FileScanner::new(&[".mp3"])
            .scan_directory(temp.path())
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let result = FileScanner::new(&[".mp3"]).scan_directory(Path::new("/nonexistent/dir"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_scan_file_instead_of_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("song.mp3");
        fs::write(&file, b"data").unwrap();

        let result = FileScanner::new(&[".mp3"]).scan_directory(&file);
        assert!(matches!(result, Err(ImportError::InvalidPath(_))));
    }
}

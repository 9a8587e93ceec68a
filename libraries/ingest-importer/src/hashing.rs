//! Content hashing and removal of local files

use ingest_core::LocalFiles;
use md5::{Digest, Md5};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Calculate the MD5 digest of a file's full contents, hex-encoded
pub fn calculate_file_hash(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// [`LocalFiles`] on the real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct Filesystem;

impl LocalFiles for Filesystem {
    fn hash(&self, path: &Path) -> ingest_core::Result<String> {
        Ok(calculate_file_hash(path)?)
    }

    fn delete(&self, path: &Path) -> ingest_core::Result<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_known_digests() {
        let temp = TempDir::new().unwrap();

        let empty = temp.path().join("empty.mp3");
        fs::write(&empty, b"").unwrap();
        assert_eq!(
            calculate_file_hash(&empty).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );

        let abc = temp.path().join("abc.mp3");
        fs::write(&abc, b"abc").unwrap();
        assert_eq!(
            calculate_file_hash(&abc).unwrap(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn test_hash_spans_multiple_buffers() {
        let temp = TempDir::new().unwrap();
        let big = temp.path().join("big.flac");
        fs::write(&big, vec![7u8; 8192 * 3 + 17]).unwrap();

        let mut hasher = Md5::new();
        hasher.update(vec![7u8; 8192 * 3 + 17]);
        let expected = hex::encode(hasher.finalize());

        assert_eq!(Filesystem.hash(&big).unwrap(), expected);
    }

    #[test]
    fn test_hash_missing_file() {
        assert!(Filesystem.hash(Path::new("/nonexistent/song.mp3")).is_err());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("song.mp3");
        fs::write(&file, b"data").unwrap();

        Filesystem.delete(&file).unwrap();
        assert!(!file.exists());

        // Already gone
        Filesystem.delete(&file).unwrap();
    }
}

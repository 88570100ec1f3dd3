//! File-based marker storage.

use super::{MarkerStorage, StorageError, StorageResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores the marker text in a single file.
///
/// The directory is created lazily on the first save. Saves go through a
/// temporary file in the same directory which is then renamed over the
/// target, so a crash mid-write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding the marker file.
    directory: PathBuf,
    /// File name inside `directory`.
    file_name: String,
}

impl FileStorage {
    /// Create a file storage for `directory/file_name`.
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    /// Full path of the marker file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn write_atomic(&self, contents: &str) -> std::io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.directory)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path()).map_err(|e| e.error)?;
        Ok(())
    }
}

impl MarkerStorage for FileStorage {
    fn load(&self) -> StorageResult<Option<String>> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn save(&self, contents: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.directory).map_err(|e| {
            StorageError::Io(format!(
                "Failed to create storage directory {}: {}",
                self.directory.display(),
                e
            ))
        })?;

        self.write_atomic(contents).map_err(|e| {
            StorageError::Io(format!("Failed to write {}: {}", self.path().display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_missing_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path(), "markers.txt");
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_save_load() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path(), "markers.txt");

        storage.save("1\n2\n3\n").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("1\n2\n3\n"));
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("app").join("prefs");
        let storage = FileStorage::new(&nested, "markers.txt");

        storage.save("0\n").unwrap();
        assert!(nested.join("markers.txt").is_file());
    }

    #[test]
    fn test_file_storage_overwrites_without_leftovers() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path(), "markers.txt");

        storage.save("2\n1\n2\n3\n4\n").unwrap();
        storage.save("0\n").unwrap();

        assert_eq!(storage.load().unwrap().as_deref(), Some("0\n"));
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_file_storage_save_fails_when_directory_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("prefs");
        fs::write(&blocker, "not a directory").unwrap();

        let storage = FileStorage::new(&blocker, "markers.txt");
        assert!(matches!(storage.save("0\n"), Err(StorageError::Io(_))));
    }

    #[test]
    fn test_file_storage_describe() {
        let storage = FileStorage::new("/data/prefs", "markers.txt");
        assert_eq!(storage.path(), PathBuf::from("/data/prefs/markers.txt"));
        assert!(storage.describe().ends_with("markers.txt"));
    }
}

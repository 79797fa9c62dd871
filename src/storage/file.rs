//! File Store
//!
//! Persistent backing store: one JSON file per key inside a cache
//! directory. Entries survive process restarts, which is what lets the
//! UI paint a "last known" state before any network round-trip.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{CacheError, Result};
use crate::storage::CacheStore;

/// Directory-backed store with one `<key>.json` file per entry.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            CacheError::StorageUnavailable(format!(
                "cannot create cache dir {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    /// The directory holding the cache files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CacheStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::StorageUnavailable(format!(
                "cannot read entry {key}: {e}"
            ))),
        }
    }

    fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        // Write via a temp file then rename, so a concurrent reader never
        // sees a partially written envelope.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));

        fs::write(&tmp, raw).map_err(|e| {
            CacheError::StorageUnavailable(format!("cannot write entry {key}: {e}"))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            CacheError::StorageUnavailable(format!("cannot write entry {key}: {e}"))
        })?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::StorageUnavailable(format!(
                "cannot remove entry {key}: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested/cache");

        let store = FileStore::open(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir);
    }

    #[test]
    fn test_open_fails_when_dir_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("occupied");
        fs::write(&blocker, "not a directory").unwrap();

        let result = FileStore::open(blocker.join("cache"));
        assert!(matches!(result, Err(CacheError::StorageUnavailable(_))));
    }

    #[test]
    fn test_set_get_remove_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();

        store.set("cmdrProfile", r#"{"written_at":1,"value":null}"#).unwrap();
        assert_eq!(
            store.get("cmdrProfile").unwrap(),
            Some(r#"{"written_at":1,"value":null}"#.to_string())
        );
        assert!(tmp.path().join("cmdrProfile.json").is_file());

        store.remove("cmdrProfile").unwrap();
        assert_eq!(store.get("cmdrProfile").unwrap(), None);
        assert!(!tmp.path().join("cmdrProfile.json").exists());
    }

    #[test]
    fn test_get_missing_key_is_none_not_error() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        assert_eq!(store.get("neverWritten").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();

        assert!(store.remove("neverWritten").is_ok());
    }

    #[test]
    fn test_set_replaces_existing_file() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();

        store.set("key", "old").unwrap();
        store.set("key", "new").unwrap();

        assert_eq!(store.get("key").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_operations_fail_when_directory_vanishes() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("cache");
        let mut store = FileStore::open(&dir).unwrap();

        fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(
            store.set("key", "raw"),
            Err(CacheError::StorageUnavailable(_))
        ));
    }
}

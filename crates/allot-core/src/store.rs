//! Client-local key-value storage for in-progress snapshots.
//!
//! The wizard depends on the [`KeyValueStore`] trait only. [`MemoryStore`]
//! backs tests and short-lived sessions; [`FileStore`] keeps one file per key
//! in a directory so that an abandoned wizard survives a restart.

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{AllotError, Result};

/// Minimal string key-value storage.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never set or has
    /// been cleared.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Clearing a missing key is not an error.
    fn clear(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        (**self).clear(key)
    }
}

/// Store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store writing each key to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Uses `dir`, creating it on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AllotError::invalid_input("key")
                .with_reason(format!("'{key}' is not a valid store key")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AllotError::file_system(path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| AllotError::file_system(&self.dir, e))?;
        fs::write(&path, value).map_err(|e| AllotError::file_system(&path, e))?;
        debug!("Stored {} bytes at {}", value.len(), path.display());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AllotError::file_system(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        store.clear("k").unwrap();
        assert!(!store.contains("k"));
        store.clear("k").unwrap();
    }

    #[test]
    fn test_file_store_round_trip() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested").join("store"));
        assert_eq!(store.get("wizard").unwrap(), None);

        store.set("wizard", "{\"a\":1}").unwrap();
        assert!(tmp.path().join("nested/store/wizard.json").exists());
        assert_eq!(store.get("wizard").unwrap().as_deref(), Some("{\"a\":1}"));

        store.clear("wizard").unwrap();
        assert_eq!(store.get("wizard").unwrap(), None);
        store.clear("wizard").unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path());
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
        assert!(store.clear("a/b").is_err());
    }

    #[test]
    fn test_mut_ref_is_a_store() {
        fn write<S: KeyValueStore>(mut store: S) {
            store.set("k", "v").unwrap();
        }
        let mut store = MemoryStore::new();
        write(&mut store);
        assert!(store.contains("k"));
    }
}

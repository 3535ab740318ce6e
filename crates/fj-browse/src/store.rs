//! Key-value persistence for user preferences.
//!
//! The browser only needs a tiny string store (the theme flag). Reads never
//! fail: a missing or unreadable value is simply absent. Writes may fail,
//! and callers are expected to carry on in memory when they do.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// File name of the preferences store inside the config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// A string key-value store.
pub trait KeyValueStore {
    /// Read a value; `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Store kept in memory; optionally refuses writes to model missing storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    available: bool,
}

impl MemoryStore {
    /// Create an empty, writable store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            available: true,
        }
    }

    /// Create a store whose writes always fail and whose reads are empty.
    pub fn unavailable() -> Self {
        Self {
            values: HashMap::new(),
            available: false,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Store backed by a flat TOML table on disk.
///
/// The whole table is rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at the default location.
    pub fn open_default() -> Self {
        Self::open(&Self::default_path())
    }

    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store; a corrupt file is logged and
    /// treated as empty, to be overwritten on the next write.
    pub fn open(path: &Path) -> Self {
        let values = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "Ignoring unreadable preferences: {}", e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "Could not read preferences: {}", e);
                BTreeMap::new()
            }
        };

        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the default preferences file path.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "FlavorJourney", "FlavorJourney")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
            .unwrap_or_else(|| PathBuf::from(PREFERENCES_FILE))
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content =
            toml::to_string(&self.values).map_err(|source| StoreError::Serialize { source })?;

        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_unavailable_store_rejects_writes() {
        let mut store = MemoryStore::unavailable();
        assert!(matches!(store.set("k", "v"), Err(StoreError::Unavailable)));
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("flavorjourney-theme"), None);
        store.set("flavorjourney-theme", "dark").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("flavorjourney-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "this is = = not toml").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("flavorjourney-theme"), None);

        store.set("flavorjourney-theme", "light").unwrap();
        assert_eq!(
            FileStore::open(&path).get("flavorjourney-theme").as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_file_store_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("blocked");
        std::fs::create_dir(&path).unwrap();

        let mut store = FileStore::open(&path);
        assert!(matches!(store.set("k", "v"), Err(StoreError::Io { .. })));
        // The in-memory value is still updated.
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}

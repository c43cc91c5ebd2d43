//! Key-value storage medium, in-memory or file-backed.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};
use crate::storage::StorageAdapter;

/// A per-key string store, the `localStorage` analogue.
///
/// Keys are fully independent. `clear()` wipes the entire store - that is
/// the natural semantic of this medium, in contrast to the cookie medium's
/// namespace-scoped clear.
///
/// By default the store lives in memory. [`open`](KeyValueStorage::open)
/// attaches a JSON snapshot file so the choice survives process restarts:
/// the snapshot is loaded once at open and rewritten after every mutation.
///
/// # Example
///
/// ```rust
/// use duotone::storage::{KeyValueStorage, StorageAdapter};
///
/// let mut storage = KeyValueStorage::in_memory();
/// storage.write("theme-preference", "dark").unwrap();
/// assert_eq!(storage.read("theme-preference").as_deref(), Some("dark"));
///
/// storage.clear().unwrap();
/// assert_eq!(storage.read("theme-preference"), None);
/// ```
#[derive(Debug, Default)]
pub struct KeyValueStorage {
    entries: HashMap<String, String>,
    path: Option<PathBuf>,
}

impl KeyValueStorage {
    /// Creates an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens a store backed by a JSON snapshot file.
    ///
    /// A missing or unparseable snapshot starts the store empty rather than
    /// failing - reads never block resolution. The file is created on the
    /// first write.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let entries = load_snapshot(&path).unwrap_or_default();
        Self {
            entries,
            path: Some(path),
        }
    }

    /// The snapshot path, if this store is file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json).map_err(|source| StorageError::Persist {
            path: path.clone(),
            source,
        })
    }
}

fn load_snapshot(path: &Path) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

impl StorageAdapter for KeyValueStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn erase(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        self.flush()
    }

    /// Wipes the **entire** store, every key.
    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.flush()
    }
}

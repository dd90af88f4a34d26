//! Key-value persistence for the entry collection

use crate::domain::JournalEntry;
use crate::error::{JournalError, Result};
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key under which the whole entry list is stored
pub const ENTRIES_KEY: &str = "entries";

/// Minimal string key-value store.
///
/// `set_item` must either replace the value in full or leave the previous
/// value in place.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

/// One JSON file per key inside a store directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        FileKeyValueStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let storage_err = |e: std::io::Error| {
            JournalError::Storage(format!("Failed to write {}: {}", path.display(), e))
        };

        fs::create_dir_all(&self.dir).map_err(storage_err)?;

        let tmp_path = self
            .dir
            .join(format!("{}.json.tmp-{}", key, std::process::id()));
        // The previous value stays untouched on failure; only the temp file goes
        let written = fs::write(&tmp_path, value).and_then(|_| fs::rename(&tmp_path, &path));
        if let Err(e) = written {
            remove_temp_file(&tmp_path);
            return Err(storage_err(e));
        }

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JournalError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

fn remove_temp_file(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("Could not remove temp file {}: {}", tmp_path.display(), e),
    }
}

/// In-process store, mainly for tests. Writes can be made to fail.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        MemoryKeyValueStore::default()
    }

    /// Make every following `set_item`/`remove_item` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.get() {
            return Err(JournalError::Storage("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// The entry collection stored as one JSON array under [`ENTRIES_KEY`]
#[derive(Debug)]
pub struct RecordStore<K> {
    backend: K,
}

impl<K: KeyValueStore> RecordStore<K> {
    pub fn new(backend: K) -> Self {
        RecordStore { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Load the persisted collection. A key that was never written loads as
    /// an empty list.
    pub fn load(&self) -> Result<Vec<JournalEntry>> {
        match self.backend.get_item(ENTRIES_KEY)? {
            None => {
                debug!("No stored entries yet");
                Ok(Vec::new())
            }
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                JournalError::Storage(format!("Stored entries are unreadable: {}", e))
            }),
        }
    }

    /// Replace the whole persisted collection
    pub fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        let raw = serde_json::to_string(entries).map_err(|e| {
            JournalError::Storage(format!("Failed to serialize entries: {}", e))
        })?;
        self.backend.set_item(ENTRIES_KEY, &raw)?;
        debug!("Saved {} entries", entries.len());
        Ok(())
    }

    /// Drop the whole persisted collection
    pub fn clear(&self) -> Result<()> {
        self.backend.remove_item(ENTRIES_KEY)
    }
}

//! Session-scoped key-value storage.
//!
//! The recency queue persists through this capability instead of touching
//! the filesystem directly, so it can run against `MemoryStore` in tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Namespaced get/set storage for small serialized values.
pub trait KeyValueStore: std::fmt::Debug + Send {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: String);
    /// Drop every stored value.
    fn clear(&mut self);
}

/// Process-local storage; forgotten on exit.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    /// Stored slots.
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.slots.insert(key.to_string(), value);
    }

    fn clear(&mut self) {
        self.slots.clear();
    }
}

/// JSON-object file holding every slot; rewritten on each `set`.
///
/// Write failures are logged and otherwise ignored so a read-only config
/// directory never interrupts browsing.
#[derive(Debug)]
pub struct FileStore {
    /// Backing file.
    path: PathBuf,
    /// In-memory mirror of the file.
    slots: BTreeMap<String, String>,
}

impl FileStore {
    /// What: Open the store at `path`, reading existing slots if the file is valid.
    ///
    /// Inputs:
    /// - `path`: JSON file location (created on first write)
    ///
    /// Output:
    /// - Store seeded from disk; missing or unreadable files start empty.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        let slots = match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str::<BTreeMap<String, String>>(&s).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[Persist] Session file is not valid JSON; starting empty"
                );
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: path.to_path_buf(),
            slots,
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all slots to disk.
    fn flush(&self) {
        let Ok(s) = serde_json::to_string(&self.slots) else {
            return;
        };
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "[Persist] Failed to create parent directory for session file"
            );
            return;
        }
        match fs::write(&self.path, &s) {
            Ok(()) => {
                tracing::debug!(
                    path = %self.path.display(),
                    bytes = s.len(),
                    "[Persist] Session file written"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "[Persist] Failed to write session file"
                );
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.slots.insert(key.to_string(), value);
        self.flush();
    }

    fn clear(&mut self) {
        self.slots.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::info!(path = %self.path.display(), "[Persist] Session cleared"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "[Persist] Failed to remove session file"
            ),
        }
    }
}

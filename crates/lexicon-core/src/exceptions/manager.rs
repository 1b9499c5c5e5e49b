use indexmap::IndexMap;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::store::{self, Result};

/// In-memory exception messages backed by a JSON file.
///
/// Entries keep document order on load and insertion order afterwards.
/// Values of a loaded file are kept as-is, so a hand-written `404` stays a
/// number on the next save; [`get`](Self::get) only returns string messages.
#[derive(Debug)]
pub struct ExceptionManager {
    path: PathBuf,
    exceptions: IndexMap<String, Value>,
}

impl ExceptionManager {
    /// Open the store at `path` and load it. A missing or malformed file gives
    /// an empty store; nothing is written until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut manager = Self {
            path: path.into(),
            exceptions: IndexMap::new(),
        };
        manager.load();
        manager
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload from disk, replacing the in-memory mapping.
    pub fn load(&mut self) {
        self.exceptions = store::load_object(&self.path).unwrap_or_default();
        tracing::debug!(
            path = %self.path.display(),
            count = self.exceptions.len(),
            "loaded exceptions"
        );
    }

    /// Write the whole mapping back to disk.
    pub fn save(&self) -> Result<()> {
        store::save_pretty(&self.path, &self.exceptions)
    }

    /// Insert or overwrite `key`. Returns true if the key was new.
    ///
    /// An overwritten key keeps its position.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) -> Result<bool> {
        let previous = self
            .exceptions
            .insert(key.into(), Value::String(message.into()));
        self.save()?;
        Ok(previous.is_none())
    }

    /// Remove `key`. Returns false (and writes nothing) when it was absent.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        if self.exceptions.shift_remove(key).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Message stored under `key`; `None` when absent or not a JSON string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.exceptions.get(key).and_then(Value::as_str)
    }

    /// Raw stored value, whatever its JSON type.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.exceptions.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.exceptions.contains_key(key)
    }

    /// Copy of every entry, in stored order.
    pub fn get_all(&self) -> IndexMap<String, Value> {
        self.exceptions.clone()
    }

    /// Current keys, in stored order.
    pub fn keys(&self) -> Vec<String> {
        self.exceptions.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.exceptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty()
    }
}

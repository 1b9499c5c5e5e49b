use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::{UrlComponents, UrlEntry};
use crate::store::{self, Result, StoreError};

/// Result of [`UrlManager::add_url`].
///
/// Advisory only: the entry is written in both cases, so `AlreadyExists`
/// means the previous value was overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added => f.write_str("Added"),
            AddOutcome::AlreadyExists => f.write_str("Already exists"),
        }
    }
}

/// URL store with an open/closed lifecycle.
///
/// Entries keep document order on load and insertion order afterwards; an
/// overwritten key keeps its position. Every mutation rewrites the file
/// before returning. Once closed the
/// manager cannot be reopened; create a new one from the same path instead.
#[derive(Debug)]
pub struct UrlManager {
    path: PathBuf,
    urls: IndexMap<String, UrlEntry>,
    active: bool,
}

impl UrlManager {
    /// Open the store at `path`.
    ///
    /// An existing file is loaded (malformed content gives an empty store).
    /// A missing file is created immediately as an empty object, which is the
    /// only way this can fail.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut manager = Self {
            urls: IndexMap::new(),
            active: true,
            path,
        };
        if manager.path.exists() {
            manager.urls = store::load_object(&manager.path).unwrap_or_default();
            tracing::debug!(
                path = %manager.path.display(),
                count = manager.urls.len(),
                "loaded urls"
            );
        } else {
            manager.save()?;
            tracing::info!(path = %manager.path.display(), "created empty url store");
        }
        Ok(manager)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn ensure_active(&self) -> Result<()> {
        if self.active {
            Ok(())
        } else {
            Err(StoreError::Closed)
        }
    }

    fn save(&self) -> Result<()> {
        store::save_pretty(&self.path, &self.urls)
    }

    /// Close the manager, optionally saving first. Closing twice is a no-op.
    ///
    /// If the final save fails the error is returned and the manager stays
    /// open with its entries intact.
    pub fn close(&mut self, save: bool) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        if save {
            self.save()?;
        }
        self.urls.clear();
        self.active = false;
        tracing::debug!(path = %self.path.display(), saved = save, "url manager closed");
        Ok(())
    }

    /// Store `base_or_full` under `key` and save.
    ///
    /// Non-empty `components` make a modular entry, otherwise the string is
    /// stored as a legacy full URL. An existing key is always overwritten.
    pub fn add_url(
        &mut self,
        key: impl Into<String>,
        base_or_full: impl Into<String>,
        components: Option<UrlComponents>,
    ) -> Result<AddOutcome> {
        self.ensure_active()?;
        let entry = UrlEntry::from_parts(base_or_full, components);
        let outcome = match self.urls.insert(key.into(), entry) {
            None => AddOutcome::Added,
            Some(_) => AddOutcome::AlreadyExists,
        };
        self.save()?;
        Ok(outcome)
    }

    /// Remove `key` and save. Returns false (and writes nothing) when absent.
    pub fn remove_url(&mut self, key: &str) -> Result<bool> {
        self.ensure_active()?;
        if self.urls.shift_remove(key).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Compose the URL stored under `key` from the caller's component selections.
    ///
    /// See [`UrlEntry::resolve`] for the composition rules.
    pub fn get_url(
        &self,
        key: &str,
        selections: &HashMap<String, String>,
    ) -> Result<Option<String>> {
        self.ensure_active()?;
        Ok(self.urls.get(key).and_then(|entry| entry.resolve(selections)))
    }

    /// Copy of every stored entry, in stored order.
    pub fn get_all_urls(&self) -> Result<IndexMap<String, UrlEntry>> {
        self.ensure_active()?;
        Ok(self.urls.clone())
    }
}

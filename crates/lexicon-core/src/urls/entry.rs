//! Stored URL entries and URL composition.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::UrlComponents;

/// One value of the URL store.
///
/// Serialized untagged, so the file keeps its plain shape: a string for
/// legacy entries, an object with `base` and `components` for modular ones.
/// Any other value found in a loaded file (a number, a list, an object whose
/// `base` is not a string) is kept verbatim as `Unrecognized` and never
/// resolves to a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlEntry {
    /// Full URL, returned as-is.
    Legacy(String),
    /// Base URL plus named path components.
    Modular(ModularUrl),
    Unrecognized(Value),
}

/// Base URL with ordered path components.
///
/// Both fields are optional in the file; an entry without a usable base
/// resolves to nothing. Fields other than `base` and `components` are kept
/// in `extra` and written back on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModularUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<UrlComponents>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ModularUrl {
    pub fn new(base: impl Into<String>, components: UrlComponents) -> Self {
        Self {
            base: Some(base.into()),
            components: Some(components),
            extra: IndexMap::new(),
        }
    }

    /// Join the base with the selected component values.
    ///
    /// Components are visited in stored order; names missing from
    /// `selections` are skipped. Returns `None` when the base is missing or
    /// empty.
    pub fn resolve(&self, selections: &HashMap<String, String>) -> Option<String> {
        let base = self.base.as_deref().filter(|b| !b.is_empty())?;
        let segments: Vec<&str> = self
            .components
            .iter()
            .flat_map(|c| c.names())
            .filter_map(|name| selections.get(name).map(String::as_str))
            .collect();
        if segments.is_empty() {
            return Some(base.to_string());
        }
        Some(format!("{}/{}", base, segments.join("/")))
    }
}

impl UrlEntry {
    /// Build the entry stored by `add_url`: modular when components are given
    /// and non-empty, legacy otherwise.
    pub fn from_parts(base_or_full: impl Into<String>, components: Option<UrlComponents>) -> Self {
        match components.filter(|c| !c.is_empty()) {
            Some(components) => UrlEntry::Modular(ModularUrl::new(base_or_full, components)),
            None => UrlEntry::Legacy(base_or_full.into()),
        }
    }

    /// Compose the full URL for this entry.
    ///
    /// Legacy entries ignore `selections`. Empty legacy strings, modular
    /// entries without a usable base, and unrecognized values give `None`.
    pub fn resolve(&self, selections: &HashMap<String, String>) -> Option<String> {
        match self {
            UrlEntry::Legacy(url) if url.is_empty() => None,
            UrlEntry::Legacy(url) => Some(url.clone()),
            UrlEntry::Modular(modular) => modular.resolve(selections),
            UrlEntry::Unrecognized(_) => None,
        }
    }
}

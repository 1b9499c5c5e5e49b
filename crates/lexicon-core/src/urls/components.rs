//! Ordered component-name → candidate-values mapping of a modular URL.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path components of a modular URL, kept in the order they were defined.
///
/// The order matters: composed URLs list segments in this order no matter how
/// the caller orders its selections. Only the names take part in composition;
/// the candidate values are informational and kept exactly as loaded (usually
/// a list of strings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlComponents {
    entries: IndexMap<String, Value>,
}

impl UrlComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate values for `name`. A new name is appended; an
    /// existing one keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.entries.insert(name.into(), Value::from(values));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Component names in stored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for UrlComponents {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut components = Self::new();
        for (name, values) in iter {
            components.insert(name, values);
        }
        components
    }
}

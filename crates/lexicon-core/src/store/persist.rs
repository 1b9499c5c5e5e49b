//! Load/save of a store file (one JSON object, 4-space indentation).

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

use super::{Result, StoreError};

const INDENT: &[u8] = b"    ";

/// Read the JSON object stored at `path`.
///
/// Returns `None` when the file is missing, cannot be read, is not valid JSON,
/// or its top-level value is not an object. The caller starts from an empty
/// mapping in every one of those cases. Keys keep their document order.
pub fn load_object<T: DeserializeOwned>(path: &Path) -> Option<IndexMap<String, T>> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store file missing; starting empty");
            return None;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "could not read store file: {}", e);
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(map) => Some(map),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                "store file is not a JSON object ({}); starting empty",
                e
            );
            None
        }
    }
}

/// Serialize `value` and overwrite the file at `path` (creates the parent dir if needed).
pub fn save_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, buf).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "store saved");
    Ok(())
}

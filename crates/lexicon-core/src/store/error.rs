//! Error type shared by the stores.

use std::io;
use std::path::PathBuf;

/// Errors returned by store operations.
///
/// Missing keys are never errors; they surface as `false` / `None` returns.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The URL manager was closed and can no longer be used.
    #[error("URL manager is closed")]
    Closed,
    /// Creating the parent directory or writing the store file failed.
    #[error("write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The in-memory mapping could not be encoded as JSON.
    #[error("serialize store")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

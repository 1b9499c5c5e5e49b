//! Shared JSON document persistence for the exception and URL stores.
//!
//! Both stores keep a single JSON object on disk. Loading never fails: a
//! missing, unreadable or malformed file (or one whose top-level value is not
//! an object) is treated as "no data". Saving overwrites the whole file with a
//! pretty-printed document indented by four spaces.

mod error;
mod persist;

pub use error::{Result, StoreError};
pub use persist::{load_object, save_pretty};

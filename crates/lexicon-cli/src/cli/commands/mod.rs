//! CLI command handlers, one file per store.

mod completions;
mod exception;
mod url;

pub use completions::run_completions;
pub use exception::run_exception;
pub use url::run_url;

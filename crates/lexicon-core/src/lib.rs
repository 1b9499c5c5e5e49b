//! Lexicon: small JSON-backed key-value stores.
//!
//! - [`exceptions::ExceptionManager`] maps keys to exception messages.
//! - [`urls::UrlManager`] maps keys to URL templates (full URLs, or a base URL
//!   plus ordered path components).
//!
//! Both keep the whole document in memory and rewrite the file after every
//! mutation. They are single-writer, single-process stores.

pub mod config;
pub mod exceptions;
pub mod logging;
pub mod store;
pub mod urls;

pub use exceptions::ExceptionManager;
pub use store::StoreError;
pub use urls::{AddOutcome, UrlComponents, UrlEntry, UrlManager};

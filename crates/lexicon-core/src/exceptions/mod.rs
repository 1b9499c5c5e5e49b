//! Keyed exception messages persisted as a flat JSON object.
//!
//! The file looks like `{ "<key>": "<message>", ... }`. It is read once when
//! the manager is opened and rewritten in full after every mutation. Opening
//! never writes; the file only appears after the first `add`.

mod manager;

pub use manager::ExceptionManager;

#[cfg(test)]
mod tests;

//! URL templates persisted as a flat JSON object.
//!
//! Each key maps either to a plain URL string (legacy entries) or to a base
//! URL plus an ordered set of named path components:
//!
//! ```json
//! {
//!     "listing": "https://example.com/listing",
//!     "category": {
//!         "base": "https://example.com",
//!         "components": { "language": ["en", "hy"], "category": ["4"] }
//!     }
//! }
//! ```
//!
//! Full URLs are composed by [`UrlManager::get_url`]: the base is joined with
//! every caller-selected component value, in the order the components are
//! stored. The manager has an explicit lifecycle; after [`UrlManager::close`]
//! every operation fails with [`crate::store::StoreError::Closed`].

mod components;
mod entry;
mod manager;

pub use components::UrlComponents;
pub use entry::{ModularUrl, UrlEntry};
pub use manager::{AddOutcome, UrlManager};

//! Content model and snapshot store for the Nodemap navigator.
//!
//! The navigator treats content as a process-wide read-only snapshot: each
//! collection is fetched exactly once at store load and never invalidated.
//! Fetch failures degrade to empty collections and are never surfaced to the
//! navigator.

mod model;
mod provider;
mod store;

pub use model::{CollectionKind, ContentItem};
pub use provider::{ContentProvider, ProviderError};
pub use store::{ContentSnapshot, ContentStore};

//! Content provider boundary.

use thiserror::Error;

use crate::model::{CollectionKind, ContentItem};

/// Errors a provider may report. These never cross the store boundary; the
/// store logs them and falls back to an empty collection.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("content backend unavailable: {0}")]
    Unavailable(String),
    #[error("malformed content payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read-only source of content collections.
///
/// Implementations are queried once per collection when the store loads.
pub trait ContentProvider {
    fn fetch(&self, kind: CollectionKind) -> Result<Vec<ContentItem>, ProviderError>;
}

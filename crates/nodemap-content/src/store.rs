//! Fetch-once content store.

use crate::model::{CollectionKind, ContentItem};
use crate::provider::ContentProvider;

/// Immutable view of all collections, valid for the process lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentSnapshot {
    projects: Vec<ContentItem>,
    posts: Vec<ContentItem>,
}

impl ContentSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(projects: Vec<ContentItem>, posts: Vec<ContentItem>) -> Self {
        Self { projects, posts }
    }

    pub fn collection(&self, kind: CollectionKind) -> &[ContentItem] {
        match kind {
            CollectionKind::Projects => &self.projects,
            CollectionKind::Posts => &self.posts,
        }
    }
}

/// Explicit fetch-once cache over a [`ContentProvider`].
///
/// Each collection is fetched exactly once at load. There is no invalidation:
/// the snapshot is a process-wide read-only view. A failed fetch is logged at
/// warn level and degrades to an empty collection; no retries.
#[derive(Clone, Debug)]
pub struct ContentStore {
    snapshot: ContentSnapshot,
}

impl ContentStore {
    pub fn load(provider: &dyn ContentProvider) -> Self {
        let [projects, posts] = CollectionKind::ALL.map(|kind| match provider.fetch(kind) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("content fetch for {kind:?} failed, using empty list: {err}");
                Vec::new()
            }
        });
        Self {
            snapshot: ContentSnapshot::new(projects, posts),
        }
    }

    pub fn snapshot(&self) -> &ContentSnapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> ContentSnapshot {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use std::cell::RefCell;

    struct CountingProvider {
        calls: RefCell<Vec<CollectionKind>>,
        fail: bool,
    }

    impl CountingProvider {
        fn new(fail: bool) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl ContentProvider for CountingProvider {
        fn fetch(&self, kind: CollectionKind) -> Result<Vec<ContentItem>, ProviderError> {
            self.calls.borrow_mut().push(kind);
            if self.fail {
                return Err(ProviderError::Unavailable("offline".into()));
            }
            Ok(vec![ContentItem {
                id: format!("{kind:?}-1"),
                title: "one".into(),
                ..ContentItem::default()
            }])
        }
    }

    #[test]
    fn load_fetches_each_collection_exactly_once() {
        let provider = CountingProvider::new(false);
        let store = ContentStore::load(&provider);
        assert_eq!(
            provider.calls.borrow().as_slice(),
            &[CollectionKind::Projects, CollectionKind::Posts]
        );
        assert_eq!(store.snapshot().collection(CollectionKind::Projects).len(), 1);
        assert_eq!(store.snapshot().collection(CollectionKind::Posts).len(), 1);
    }

    #[test]
    fn fetch_failure_degrades_to_empty_collections() {
        let provider = CountingProvider::new(true);
        let store = ContentStore::load(&provider);
        assert!(store.snapshot().collection(CollectionKind::Projects).is_empty());
        assert!(store.snapshot().collection(CollectionKind::Posts).is_empty());
    }
}

//! Testing harness for the Nodemap navigator.
//!
//! Wires a [`Navigator`] to scripted content and a [`GestureAdapter`] so
//! tests can drive full navigation sessions without a render surface. The
//! harness stands in for the surface: `settle` plays its layout-ready
//! callback for the current epoch.

use nodemap_content::{
    CollectionKind, ContentItem, ContentProvider, ContentStore, ProviderError,
};
use nodemap_core::{Point, Size};
use nodemap_input::{GestureAdapter, PointerEvent, PointerEventKind};
use nodemap_nav::{NavTarget, Navigator};

/// Provider with canned collections, optionally scripted to fail.
pub struct ScriptedProvider {
    projects: Vec<ContentItem>,
    posts: Vec<ContentItem>,
    fail: bool,
}

impl ScriptedProvider {
    pub fn with_collections(projects: Vec<ContentItem>, posts: Vec<ContentItem>) -> Self {
        Self {
            projects,
            posts,
            fail: false,
        }
    }

    /// Every fetch reports the backend as unavailable.
    pub fn failing() -> Self {
        Self {
            projects: Vec::new(),
            posts: Vec::new(),
            fail: true,
        }
    }
}

impl ContentProvider for ScriptedProvider {
    fn fetch(&self, kind: CollectionKind) -> Result<Vec<ContentItem>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Unavailable("scripted failure".into()));
        }
        Ok(match kind {
            CollectionKind::Projects => self.projects.clone(),
            CollectionKind::Posts => self.posts.clone(),
        })
    }
}

/// A content item with plausible defaults for tests.
pub fn sample_item(id: &str) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: format!("Item {id}"),
        excerpt: format!("Excerpt for {id}"),
        media: vec![format!("{id}-cover.webp")],
        link: Some(format!("https://example.dev/{id}")),
        technologies: vec!["rust".into(), "wasm".into()],
        date: Some("2024-06".into()),
    }
}

/// `n` sample items with ids `prefix0..prefix{n-1}`.
pub fn sample_items(prefix: &str, n: usize) -> Vec<ContentItem> {
    (0..n).map(|i| sample_item(&format!("{prefix}{i}"))).collect()
}

/// Navigator under test plus the pieces a render surface would own.
pub struct TestNavigator {
    pub navigator: Navigator,
    adapter: GestureAdapter,
    viewport: Size,
    next_pointer_id: u64,
}

impl TestNavigator {
    pub fn new(provider: &dyn ContentProvider) -> Self {
        Self::with_viewport(provider, Size::new(1280.0, 800.0))
    }

    pub fn with_viewport(provider: &dyn ContentProvider, viewport: Size) -> Self {
        let store = ContentStore::load(provider);
        Self {
            navigator: Navigator::new(store.into_snapshot()),
            adapter: GestureAdapter::new(),
            viewport,
            next_pointer_id: 1,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Plays the render surface's layout-ready callback for the current
    /// node set.
    pub fn settle(&mut self) {
        let epoch = self.navigator.current_epoch();
        self.navigator.layout_ready(epoch, self.viewport);
    }

    /// Transition and settle in one step, as an idle UI would.
    pub fn navigate_and_settle(&mut self, target: NavTarget) {
        self.navigator.navigate(target);
        self.settle();
    }

    /// Activates a node by id and settles if the activation navigated.
    pub fn activate_and_settle(&mut self, id: &str) {
        if self.navigator.activate(id).is_some() {
            self.settle();
        }
    }

    /// One complete drag gesture: down at `from`, a single move by `delta`,
    /// up.
    pub fn drag(&mut self, from: Point, delta: (f32, f32)) {
        let id = self.next_pointer_id;
        self.next_pointer_id += 1;
        let to = Point::new(from.x + delta.0, from.y + delta.1);
        for event in [
            PointerEvent::new(id, PointerEventKind::Down, from),
            PointerEvent::new(id, PointerEventKind::Move, to),
            PointerEvent::new(id, PointerEventKind::Up, to),
        ] {
            self.adapter.on_pointer_event(event, &mut self.navigator);
        }
    }

    /// A two-finger pinch with `moves` spreading (positive) or closing
    /// (negative) move events.
    pub fn pinch(&mut self, moves: i32) {
        let a = self.next_pointer_id;
        let b = a + 1;
        self.next_pointer_id += 2;
        let anchor = Point::new(400.0, 400.0);
        let mut x = 900.0;
        self.adapter.on_pointer_event(
            PointerEvent::new(a, PointerEventKind::Down, anchor),
            &mut self.navigator,
        );
        self.adapter.on_pointer_event(
            PointerEvent::new(b, PointerEventKind::Down, Point::new(x, 400.0)),
            &mut self.navigator,
        );
        let step = if moves >= 0 { 20.0 } else { -20.0 };
        for _ in 0..moves.unsigned_abs() {
            x += step;
            self.adapter.on_pointer_event(
                PointerEvent::new(b, PointerEventKind::Move, Point::new(x, 400.0)),
                &mut self.navigator,
            );
        }
        for id in [a, b] {
            self.adapter.on_pointer_event(
                PointerEvent::new(id, PointerEventKind::Up, anchor),
                &mut self.navigator,
            );
        }
    }

    pub fn wheel(&mut self, delta: f32) {
        self.adapter.on_wheel(delta, &mut self.navigator);
    }
}

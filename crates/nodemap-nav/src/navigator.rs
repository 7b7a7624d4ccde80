//! Navigator orchestration.
//!
//! [`Navigator`] is the single owner of navigation state, the current node
//! set, and the viewport transform. The render surface reads `(nodes,
//! transform)` and reports back through [`Navigator::layout_ready`] once a
//! freshly generated set has settled; an epoch guard makes sure a centering
//! computed for a superseded node set is dropped instead of applied.

use rustc_hash::FxHashSet;
use web_time::Instant;

use nodemap_content::ContentSnapshot;
use nodemap_core::{Size, TransformSink, TransformState, ViewportTransform};

use crate::generate::generate;
use crate::layout::center_for;
use crate::node::{NodeAction, NodeId, NodeSet};
use crate::state::{NavTarget, NavigationState};

#[derive(Debug)]
struct PendingCenter {
    epoch: u64,
    requested_at: Instant,
}

/// Owner of all mutable navigator state.
pub struct Navigator {
    state: NavigationState,
    snapshot: ContentSnapshot,
    nodes: NodeSet,
    transform: TransformState,
    /// Node ids whose expanded display state is toggled on. Cleared on every
    /// transition together with the node set they belong to.
    expanded: FxHashSet<NodeId>,
    epoch: u64,
    pending_center: Option<PendingCenter>,
    has_centered: bool,
}

impl Navigator {
    /// Starts at the main level with the given content snapshot.
    ///
    /// The initial node set also awaits a `layout_ready` call before it is
    /// centered.
    pub fn new(snapshot: ContentSnapshot) -> Self {
        let state = NavigationState::Main;
        let nodes = generate(&state, &snapshot);
        Self {
            state,
            snapshot,
            nodes,
            transform: TransformState::new(),
            expanded: FxHashSet::default(),
            epoch: 0,
            pending_center: Some(PendingCenter {
                epoch: 0,
                requested_at: Instant::now(),
            }),
            has_centered: false,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Snapshot of the current viewport transform.
    pub fn transform(&self) -> ViewportTransform {
        self.transform.get()
    }

    /// Shared handle for the render surface.
    pub fn transform_state(&self) -> TransformState {
        self.transform.clone()
    }

    /// Whether the current node set has been centered since generation.
    pub fn has_centered(&self) -> bool {
        self.has_centered
    }

    /// The epoch of the current node set. Bumped on every transition.
    pub fn current_epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Runs a transition: new state, regenerated node set, new epoch, and a
    /// pending centering request for that epoch. Returns the new epoch so the
    /// render surface can echo it back from `layout_ready`.
    ///
    /// # Panics
    ///
    /// Panics if `target` is not a valid transition from the current state.
    pub fn navigate(&mut self, target: NavTarget) -> u64 {
        self.state = self.state.go_to(target);
        self.nodes = generate(&self.state, &self.snapshot);
        self.expanded.clear();
        self.epoch += 1;
        self.pending_center = Some(PendingCenter {
            epoch: self.epoch,
            requested_at: Instant::now(),
        });
        self.has_centered = false;
        log::debug!(
            "navigated to {:?} (epoch {}, {} nodes)",
            self.state.level(),
            self.epoch,
            self.nodes.len()
        );
        self.epoch
    }

    /// Activates a node: runs its navigation action or toggles its expanded
    /// display state. Unknown ids and action-less nodes are ignored — the
    /// render surface may deliver taps for nodes of an already replaced set.
    ///
    /// Returns the new epoch when the activation navigated.
    pub fn activate(&mut self, id: &str) -> Option<u64> {
        let action = self.nodes.get(id)?.action.clone()?;
        match action {
            NodeAction::Navigate(target) => Some(self.navigate(target)),
            NodeAction::ToggleExpanded => {
                if !self.expanded.remove(id) {
                    self.expanded.insert(id.to_string());
                }
                None
            }
        }
    }

    /// Called by the render surface once the node set of `epoch` has settled
    /// and the viewport can be measured. Applies the centering transform for
    /// the current epoch; a stale epoch means another transition raced in and
    /// the latest transition's centering wins instead.
    pub fn layout_ready(&mut self, epoch: u64, viewport: Size) {
        if epoch != self.epoch {
            log::warn!(
                "dropping stale centering for epoch {epoch} (current {})",
                self.epoch
            );
            return;
        }
        if let Some(pending) = self.pending_center.take() {
            log::debug!(
                "centering epoch {} after {:?}",
                pending.epoch,
                pending.requested_at.elapsed()
            );
        }
        self.transform.set(center_for(&self.nodes, viewport));
        self.has_centered = true;
    }
}

impl TransformSink for Navigator {
    fn pan_by(&mut self, dx: f32, dy: f32) {
        self.transform.apply_pan(dx, dy);
    }

    fn zoom_by(&mut self, delta: f32) {
        self.transform.apply_zoom(delta);
    }
}

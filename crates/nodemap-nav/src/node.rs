//! Node and node-set value types.
//!
//! A [`NodeSet`] is regenerated wholesale on every navigation transition and
//! treated as an immutable value for the duration of one rendered frame.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use nodemap_content::CollectionKind;
use nodemap_core::Point;

use crate::state::NavTarget;

/// Node identifier, unique within one generated set.
pub type NodeId = String;

/// The sub-component a detail node stands for.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailPart {
    Title,
    Summary { text: String },
    Tags { tags: Vec<String> },
    Link { url: String },
    Gallery { media: Vec<String> },
}

/// Per-kind node payload. Each variant carries only the fields relevant to
/// it, so there is no "metadata missing" state to defend against.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Main-level entry point into a collection.
    CategoryRoot { collection: CollectionKind },
    /// One collection entry on the category ring.
    Category {
        item_id: String,
        date: Option<String>,
    },
    /// The focused item's card at item level.
    LeafItem {
        technologies: Vec<String>,
        link: Option<String>,
    },
    /// One sub-component of the expanded item.
    LeafSubcomponent(DetailPart),
    /// Returns one level up.
    NavigationBack,
}

/// What activating a node does. A node either navigates or toggles its
/// expanded display state, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeAction {
    Navigate(NavTarget),
    ToggleExpanded,
}

/// A positioned, displayable content card.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    pub description: String,
    /// Position in abstract content-space, not pixels.
    pub position: Point,
    pub kind: NodeKind,
    /// Ids of nodes this one is drawn connected to. Undirected, render-only.
    pub connections: SmallVec<[NodeId; 4]>,
    /// Hierarchy depth of the level this node was generated for.
    pub level: u8,
    pub action: Option<NodeAction>,
}

/// An immutable set of nodes for one frame, indexed by id in generation
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeSet {
    nodes: IndexMap<NodeId, Node>,
}

impl NodeSet {
    /// Builds a set from generated nodes.
    ///
    /// Ids must be unique (checked with a debug assertion; the generator is
    /// the only producer). Connection entries that refer to ids absent from
    /// the set are filtered out here: a dangling edge target is a rendering
    /// concern, never a fatal condition.
    pub fn new(nodes: Vec<Node>) -> Self {
        let ids: FxHashSet<NodeId> = nodes.iter().map(|n| n.id.clone()).collect();
        debug_assert_eq!(ids.len(), nodes.len(), "duplicate node id in generated set");

        let mut indexed = IndexMap::with_capacity(nodes.len());
        for mut node in nodes {
            let before = node.connections.len();
            node.connections.retain(|target| ids.contains(target));
            if node.connections.len() < before {
                log::debug!(
                    "filtered {} dangling connection(s) from node {}",
                    before - node.connections.len(),
                    node.id
                );
            }
            indexed.insert(node.id.clone(), node);
        }
        Self { nodes: indexed }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Nodes in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Undirected edges, deduplicated, in generation order.
    pub fn edges(&self) -> Vec<(&Node, &Node)> {
        let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
        let mut edges = Vec::new();
        for node in self.nodes.values() {
            for target_id in &node.connections {
                let Some(target) = self.nodes.get(target_id.as_str()) else {
                    continue;
                };
                let key = if node.id.as_str() <= target.id.as_str() {
                    (node.id.as_str(), target.id.as_str())
                } else {
                    (target.id.as_str(), node.id.as_str())
                };
                if seen.insert(key) {
                    edges.push((node, target));
                }
            }
        }
        edges
    }
}

//! Node set generation.
//!
//! `generate` is a pure function of the navigation state and the content
//! snapshot. Main-level nodes sit at designer-chosen offsets, category-level
//! items are spread evenly on a ring, and item/detail levels use a fixed
//! micro-layout chained left to right.

use std::f32::consts::TAU;

use smallvec::smallvec;

use nodemap_content::{CollectionKind, ContentItem, ContentSnapshot};
use nodemap_core::Point;

use crate::node::{DetailPart, Node, NodeAction, NodeId, NodeKind, NodeSet};
use crate::state::{NavTarget, NavigationState};

/// Radius of the category-level ring, in content-space units.
pub const RING_RADIUS: f32 = 420.0;

/// Designer offsets for the main-level category roots.
const MAIN_OFFSETS: [(CollectionKind, Point); 2] = [
    (CollectionKind::Projects, Point { x: -380.0, y: -40.0 }),
    (CollectionKind::Posts, Point { x: 380.0, y: -40.0 }),
];

/// Generates the node set for the given state.
///
/// The returned set is a value object: callers replace their previous set
/// wholesale, they never patch it.
pub fn generate(state: &NavigationState, snapshot: &ContentSnapshot) -> NodeSet {
    let nodes = match state {
        NavigationState::Main => main_nodes(),
        NavigationState::Category(kind) => category_nodes(snapshot.collection(*kind)),
        NavigationState::Item(_, item) => item_nodes(item),
        NavigationState::ItemDetail(_, item) => detail_nodes(item),
    };
    NodeSet::new(nodes)
}

fn main_nodes() -> Vec<Node> {
    let mut nodes: Vec<Node> = MAIN_OFFSETS
        .iter()
        .map(|(collection, position)| Node {
            id: root_id(*collection),
            title: collection.label().to_string(),
            description: String::new(),
            position: *position,
            kind: NodeKind::CategoryRoot {
                collection: *collection,
            },
            connections: smallvec![],
            level: 0,
            action: Some(NodeAction::Navigate(NavTarget::Category(*collection))),
        })
        .collect();
    // The roots are drawn joined to each other.
    let ids: Vec<NodeId> = nodes.iter().map(|n| n.id.clone()).collect();
    chain(&mut nodes, &ids);
    nodes
}

fn category_nodes(items: &[ContentItem]) -> Vec<Node> {
    let mut nodes = vec![back_node(Point::ZERO, 1)];
    // Even ring layout: node i sits at angle 2π·i/n. Rotationally uniform for
    // any collection size; an empty collection leaves just the back node.
    let count = items.len();
    for (i, item) in items.iter().enumerate() {
        let theta = TAU * i as f32 / count as f32;
        nodes.push(Node {
            id: format!("item-{}", item.id),
            title: item.title.clone(),
            description: item.excerpt.clone(),
            position: Point::new(RING_RADIUS * theta.cos(), RING_RADIUS * theta.sin()),
            kind: NodeKind::Category {
                item_id: item.id.clone(),
                date: item.date.clone(),
            },
            connections: smallvec![BACK_ID.to_string()],
            level: 1,
            action: Some(NodeAction::Navigate(NavTarget::Item(item.clone()))),
        });
    }
    nodes
}

fn item_nodes(item: &ContentItem) -> Vec<Node> {
    let mut nodes = vec![
        back_node(Point::new(-460.0, -220.0), 2),
        Node {
            id: "card".to_string(),
            title: item.title.clone(),
            description: item.excerpt.clone(),
            position: Point::new(0.0, -40.0),
            kind: NodeKind::LeafItem {
                technologies: item.technologies.clone(),
                link: item.link.clone(),
            },
            connections: smallvec![],
            level: 2,
            action: Some(NodeAction::Navigate(NavTarget::ItemDetail)),
        },
    ];
    if !item.media.is_empty() {
        nodes.push(Node {
            id: "gallery".to_string(),
            title: "Gallery".to_string(),
            description: String::new(),
            position: Point::new(420.0, 180.0),
            kind: NodeKind::LeafSubcomponent(DetailPart::Gallery {
                media: item.media.clone(),
            }),
            connections: smallvec![],
            level: 2,
            action: Some(NodeAction::ToggleExpanded),
        });
    }
    let ids: Vec<NodeId> = nodes.iter().map(|n| n.id.clone()).collect();
    chain(&mut nodes, &ids);
    nodes
}

fn detail_nodes(item: &ContentItem) -> Vec<Node> {
    let mut nodes = vec![
        back_node(Point::new(-460.0, -260.0), 3),
        subcomponent(
            "title",
            item.title.clone(),
            Point::new(0.0, -260.0),
            DetailPart::Title,
            None,
        ),
        subcomponent(
            "summary",
            "Summary".to_string(),
            Point::new(400.0, -60.0),
            DetailPart::Summary {
                text: item.excerpt.clone(),
            },
            None,
        ),
    ];
    if !item.technologies.is_empty() {
        nodes.push(subcomponent(
            "tags",
            "Technologies".to_string(),
            Point::new(200.0, 200.0),
            DetailPart::Tags {
                tags: item.technologies.clone(),
            },
            None,
        ));
    }
    if let Some(url) = &item.link {
        nodes.push(subcomponent(
            "link",
            "Visit".to_string(),
            Point::new(-200.0, 280.0),
            DetailPart::Link { url: url.clone() },
            None,
        ));
    }
    if !item.media.is_empty() {
        nodes.push(subcomponent(
            "gallery",
            "Gallery".to_string(),
            Point::new(-460.0, 60.0),
            DetailPart::Gallery {
                media: item.media.clone(),
            },
            Some(NodeAction::ToggleExpanded),
        ));
    }
    let ids: Vec<NodeId> = nodes.iter().map(|n| n.id.clone()).collect();
    chain(&mut nodes, &ids);
    nodes
}

const BACK_ID: &str = "back";

fn root_id(collection: CollectionKind) -> NodeId {
    match collection {
        CollectionKind::Projects => "root-projects".to_string(),
        CollectionKind::Posts => "root-posts".to_string(),
    }
}

fn back_node(position: Point, level: u8) -> Node {
    Node {
        id: BACK_ID.to_string(),
        title: "Back".to_string(),
        description: String::new(),
        position,
        kind: NodeKind::NavigationBack,
        connections: smallvec![],
        level,
        action: Some(NodeAction::Navigate(NavTarget::Back)),
    }
}

fn subcomponent(
    id: &str,
    title: String,
    position: Point,
    part: DetailPart,
    action: Option<NodeAction>,
) -> Node {
    Node {
        id: id.to_string(),
        title,
        description: String::new(),
        position,
        kind: NodeKind::LeafSubcomponent(part),
        connections: smallvec![],
        level: 3,
        action,
    }
}

/// Links consecutive nodes into a single open chain (no cycles).
fn chain(nodes: &mut [Node], ids: &[NodeId]) {
    for (node, next_id) in nodes.iter_mut().zip(ids.iter().skip(1)) {
        node.connections.push(next_id.clone());
    }
}

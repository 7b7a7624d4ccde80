//! Centering engine.
//!
//! Computes the viewport transform that fits a generated node set in the
//! middle of the host viewport. Scale always resets to 1.0 on recentering:
//! navigation returns to the default zoom by design.

use nodemap_core::{Point, Rect, Size, ViewportTransform};

use crate::node::NodeSet;

/// Assumed on-screen footprint of a node card, content-space units.
pub const NODE_WIDTH: f32 = 320.0;
pub const NODE_HEIGHT: f32 = 160.0;

/// Returns the transform centering `nodes` in a viewport of `viewport` size.
///
/// Every node position is expanded by the card footprint, the boxes are
/// unioned, and the pan offset maps the union's midpoint to the viewport
/// midpoint. Pure and idempotent; a single-node set works without any
/// division by node count. An empty set yields the identity transform.
pub fn center_for(nodes: &NodeSet, viewport: Size) -> ViewportTransform {
    let mut iter = nodes.iter();
    let Some(first) = iter.next() else {
        return ViewportTransform::IDENTITY;
    };
    let mut bounds = footprint(first.position);
    for node in iter {
        bounds = bounds.union(&footprint(node.position));
    }
    let content_center = bounds.center();
    ViewportTransform {
        pan_x: viewport.width / 2.0 - content_center.x,
        pan_y: viewport.height / 2.0 - content_center.y,
        scale: 1.0,
    }
}

fn footprint(position: Point) -> Rect {
    Rect::from_center(position, NODE_WIDTH, NODE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use crate::state::NavigationState;
    use nodemap_content::{CollectionKind, ContentItem, ContentSnapshot};

    const VIEWPORT: Size = Size {
        width: 1280.0,
        height: 800.0,
    };

    fn category_set(n: usize) -> NodeSet {
        let items = (0..n)
            .map(|i| ContentItem {
                id: format!("p{i}"),
                title: format!("P{i}"),
                ..ContentItem::default()
            })
            .collect();
        generate(
            &NavigationState::Category(CollectionKind::Projects),
            &ContentSnapshot::new(items, Vec::new()),
        )
    }

    fn content_center(nodes: &NodeSet) -> Point {
        let mut iter = nodes.iter();
        let mut bounds = footprint(iter.next().unwrap().position);
        for node in iter {
            bounds = bounds.union(&footprint(node.position));
        }
        bounds.center()
    }

    #[test]
    fn centering_is_idempotent() {
        let set = category_set(4);
        let first = center_for(&set, VIEWPORT);
        let second = center_for(&set, VIEWPORT);
        assert_eq!(first, second);
    }

    #[test]
    fn content_center_maps_to_viewport_center() {
        for n in [1, 3, 8] {
            let set = category_set(n);
            let transform = center_for(&set, VIEWPORT);
            let center = content_center(&set);
            assert!((center.x + transform.pan_x - VIEWPORT.width / 2.0).abs() < 1e-3);
            assert!((center.y + transform.pan_y - VIEWPORT.height / 2.0).abs() < 1e-3);
        }
    }

    #[test]
    fn scale_resets_to_default_on_recentering() {
        let transform = center_for(&category_set(2), VIEWPORT);
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn single_node_set_yields_a_finite_transform() {
        let set = category_set(0);
        assert_eq!(set.len(), 1);
        let transform = center_for(&set, VIEWPORT);
        assert!(transform.pan_x.is_finite());
        assert!(transform.pan_y.is_finite());
        // The back node is at the origin, so it maps straight to the middle.
        assert_eq!(transform.pan_x, VIEWPORT.width / 2.0);
        assert_eq!(transform.pan_y, VIEWPORT.height / 2.0);
    }

    #[test]
    fn empty_set_returns_identity() {
        assert_eq!(
            center_for(&NodeSet::default(), VIEWPORT),
            ViewportTransform::IDENTITY
        );
    }
}

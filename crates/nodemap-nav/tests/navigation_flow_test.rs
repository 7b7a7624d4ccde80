//! End-to-end navigation sessions driven through the test harness:
//! content load, level transitions, centering, and gesture input working
//! together the way a render surface would exercise them.

use nodemap_content::CollectionKind;
use nodemap_core::{Point, Size, MAX_SCALE, MIN_SCALE};
use nodemap_nav::{center_for, Level, NavTarget, NodeKind};
use nodemap_testing::{sample_items, ScriptedProvider, TestNavigator};
use pretty_assertions::assert_eq;

fn provider() -> ScriptedProvider {
    ScriptedProvider::with_collections(sample_items("p", 6), sample_items("b", 2))
}

#[test]
fn full_session_walks_down_and_back_up() {
    let provider = provider();
    let mut t = TestNavigator::new(&provider);
    t.settle();
    assert_eq!(t.navigator.state().level(), Level::Main);

    t.navigate_and_settle(NavTarget::Category(CollectionKind::Projects));
    assert_eq!(t.navigator.nodes().len(), 7); // back + 6 projects

    t.activate_and_settle("item-p2");
    assert_eq!(t.navigator.state().level(), Level::Item);
    assert_eq!(t.navigator.state().context().unwrap().id, "p2");

    t.activate_and_settle("card");
    assert_eq!(t.navigator.state().level(), Level::ItemDetail);

    t.activate_and_settle("back");
    assert_eq!(t.navigator.state().level(), Level::Item);

    t.navigate_and_settle(NavTarget::Main);
    assert_eq!(t.navigator.state().level(), Level::Main);
    assert_eq!(t.navigator.state().context(), None);
}

#[test]
fn every_settled_transition_centers_the_new_set() {
    let provider = provider();
    let mut t = TestNavigator::new(&provider);
    let viewport = t.viewport();
    for target in [
        NavTarget::Category(CollectionKind::Posts),
        NavTarget::Item(sample_items("b", 2)[1].clone()),
        NavTarget::ItemDetail,
        NavTarget::Back,
        NavTarget::Main,
    ] {
        t.navigate_and_settle(target);
        assert!(t.navigator.has_centered());
        assert_eq!(
            t.navigator.transform(),
            center_for(t.navigator.nodes(), viewport)
        );
    }
}

#[test]
fn drag_after_centering_offsets_the_centered_transform() {
    let provider = provider();
    let mut t = TestNavigator::new(&provider);
    t.navigate_and_settle(NavTarget::Category(CollectionKind::Projects));
    let centered = t.navigator.transform();

    t.drag(Point::new(600.0, 400.0), (40.0, -25.0));
    t.drag(Point::new(300.0, 300.0), (10.0, 5.0));

    let t_after = t.navigator.transform();
    assert_eq!(t_after.pan_x, centered.pan_x + 50.0);
    assert_eq!(t_after.pan_y, centered.pan_y - 20.0);
    assert_eq!(t_after.scale, centered.scale);
}

#[test]
fn extreme_pinch_and_wheel_input_stays_clamped() {
    let provider = provider();
    let mut t = TestNavigator::new(&provider);
    t.settle();

    t.pinch(100);
    assert_eq!(t.navigator.transform().scale, MAX_SCALE);

    for _ in 0..200 {
        t.wheel(-1.0);
    }
    assert_eq!(t.navigator.transform().scale, MIN_SCALE);
}

#[test]
fn failed_fetch_degrades_to_the_empty_category_layout() {
    let provider = ScriptedProvider::failing();
    let mut t = TestNavigator::new(&provider);
    t.navigate_and_settle(NavTarget::Category(CollectionKind::Projects));

    let nodes = t.navigator.nodes();
    assert_eq!(nodes.len(), 1);
    assert!(matches!(
        nodes.iter().next().unwrap().kind,
        NodeKind::NavigationBack
    ));

    let transform = t.navigator.transform();
    assert!(transform.pan_x.is_finite() && transform.pan_y.is_finite());
    assert_eq!(transform.scale, 1.0);
}

#[test]
fn viewport_resize_does_not_retrigger_centering() {
    let provider = provider();
    let mut t = TestNavigator::with_viewport(&provider, Size::new(800.0, 600.0));
    t.navigate_and_settle(NavTarget::Category(CollectionKind::Projects));
    let before = t.navigator.transform();

    // The host grows; nothing recenters until the next transition settles.
    let grown = Size::new(1920.0, 1080.0);
    assert_eq!(t.navigator.transform(), before);
    t.navigator.navigate(NavTarget::Main);
    t.navigator
        .layout_ready(t.navigator.current_epoch(), grown);
    assert_eq!(
        t.navigator.transform(),
        center_for(t.navigator.nodes(), grown)
    );
}

#[test]
fn back_from_detail_reuses_the_same_focused_item() {
    let provider = provider();
    let mut t = TestNavigator::new(&provider);
    t.navigate_and_settle(NavTarget::Category(CollectionKind::Projects));
    t.activate_and_settle("item-p4");
    t.activate_and_settle("card");
    let focused_before = t.navigator.state().context().unwrap().clone();
    t.navigate_and_settle(NavTarget::Back);
    assert_eq!(t.navigator.state().context(), Some(&focused_before));
}

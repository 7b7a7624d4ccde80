//! Headless demo session.
//!
//! Drives the navigator through a full browse session and logs the node sets
//! and transforms a render surface would draw. Run with
//! `RUST_LOG=debug cargo run -p portfolio-demo` for the navigator's own logs.

mod content;

use anyhow::{bail, Result};
use nodemap_content::{CollectionKind, ContentStore};
use nodemap_core::{Point, Size};
use nodemap_input::{GestureAdapter, PointerEvent, PointerEventKind};
use nodemap_nav::{NavTarget, Navigator};

const VIEWPORT: Size = Size {
    width: 1440.0,
    height: 900.0,
};

fn main() -> Result<()> {
    env_logger::init();

    let store = ContentStore::load(&content::EmbeddedProvider);
    let mut navigator = Navigator::new(store.into_snapshot());
    let mut adapter = GestureAdapter::new();

    settle(&mut navigator);
    report("main", &navigator);

    navigator.navigate(NavTarget::Category(CollectionKind::Projects));
    settle(&mut navigator);
    report("projects", &navigator);

    // Open the first project card on the ring.
    let first = navigator
        .nodes()
        .iter()
        .find(|n| n.id.starts_with("item-"))
        .map(|n| n.id.clone());
    let Some(first) = first else {
        bail!("no project nodes were generated");
    };
    navigator.activate(&first);
    settle(&mut navigator);
    report("item", &navigator);

    navigator.activate("card");
    settle(&mut navigator);
    report("detail", &navigator);

    // A user drags the canvas and zooms with the wheel.
    let events = [
        PointerEvent::new(1, PointerEventKind::Down, Point::new(700.0, 450.0)),
        PointerEvent::new(1, PointerEventKind::Move, Point::new(760.0, 420.0)),
        PointerEvent::new(1, PointerEventKind::Up, Point::new(760.0, 420.0)),
    ];
    for event in events {
        adapter.on_pointer_event(event, &mut navigator);
    }
    adapter.on_wheel(1.0, &mut navigator);
    adapter.on_wheel(1.0, &mut navigator);
    report("after input", &navigator);

    navigator.navigate(NavTarget::Main);
    settle(&mut navigator);
    report("home again", &navigator);

    Ok(())
}

fn settle(navigator: &mut Navigator) {
    navigator.layout_ready(navigator.current_epoch(), VIEWPORT);
}

fn report(stage: &str, navigator: &Navigator) {
    let t = navigator.transform();
    log::info!(
        "{stage}: level {:?}, {} nodes, {} edges, pan ({:.1}, {:.1}), scale {:.2}",
        navigator.state().level(),
        navigator.nodes().len(),
        navigator.nodes().edges().len(),
        t.pan_x,
        t.pan_y,
        t.scale
    );
}

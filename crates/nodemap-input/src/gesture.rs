//! Drag, pinch, and wheel recognition.

use rustc_hash::FxHashMap;

use nodemap_core::{Point, TransformSink};

use crate::pointer::{PointerEvent, PointerEventKind, PointerId};

/// Scale change per pinch move event.
///
/// The step is a fixed magnitude regardless of how far the contacts moved;
/// only the sign follows the distance change. Kept as-is from the original
/// product behavior (see DESIGN.md open questions).
pub const ZOOM_STEP: f32 = 0.1;

/// Scale change per wheel event; sign follows the wheel delta.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Stateful gesture recognizer.
///
/// Tracks active contacts and emits transform deltas into a
/// [`TransformSink`]. One contact pans; exactly two pinch-zoom; further
/// contacts are tracked but do not drive the transform.
#[derive(Debug, Default)]
pub struct GestureAdapter {
    pointers: FxHashMap<PointerId, Point>,
    /// Inter-contact distance at the previous pinch event, armed while
    /// exactly two contacts are down.
    pinch_distance: Option<f32>,
}

impl GestureAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts currently down.
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// Feeds one pointer primitive through the recognizer.
    pub fn on_pointer_event(&mut self, event: PointerEvent, sink: &mut dyn TransformSink) {
        match event.kind {
            PointerEventKind::Down => {
                self.pointers.insert(event.id, event.position);
                self.rearm_pinch();
            }
            PointerEventKind::Move => self.on_move(event, sink),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.pointers.remove(&event.id).is_none() {
                    log::debug!("ignoring release of unknown pointer {}", event.id);
                }
                // Dropping from two contacts to one resumes panning anchored
                // at the survivor's last position, with no jump delta.
                self.rearm_pinch();
            }
        }
    }

    fn on_move(&mut self, event: PointerEvent, sink: &mut dyn TransformSink) {
        let Some(previous) = self.pointers.get(&event.id).copied() else {
            // Moves for contacts we never saw go down (e.g. hover) are not
            // part of any gesture.
            return;
        };
        self.pointers.insert(event.id, event.position);

        match self.pointers.len() {
            1 => {
                sink.pan_by(event.position.x - previous.x, event.position.y - previous.y);
            }
            2 => {
                let distance = self.contact_distance();
                if let Some(previous_distance) = self.pinch_distance {
                    let diff = distance - previous_distance;
                    if diff > 0.0 {
                        sink.zoom_by(ZOOM_STEP);
                    } else if diff < 0.0 {
                        sink.zoom_by(-ZOOM_STEP);
                    }
                }
                self.pinch_distance = Some(distance);
            }
            _ => {}
        }
    }

    /// Wheel input: one fixed-magnitude zoom step per event, sign taken from
    /// the wheel delta. A zero delta emits nothing.
    pub fn on_wheel(&mut self, delta: f32, sink: &mut dyn TransformSink) {
        if delta == 0.0 {
            return;
        }
        sink.zoom_by(WHEEL_ZOOM_STEP * delta.signum());
    }

    fn rearm_pinch(&mut self) {
        self.pinch_distance = if self.pointers.len() == 2 {
            Some(self.contact_distance())
        } else {
            None
        };
    }

    fn contact_distance(&self) -> f32 {
        let mut values = self.pointers.values();
        match (values.next(), values.next()) {
            (Some(a), Some(b)) => a.distance_to(*b),
            _ => 0.0,
        }
    }
}

//! Viewport transform state.
//!
//! [`TransformState`] is the only continuously-mutated shared state in the
//! navigator. Reads return the whole transform under a single borrow so a
//! drag or pinch in progress never observes a torn pan/scale combination.

use std::cell::RefCell;
use std::rc::Rc;

/// Lower zoom bound, inclusive.
pub const MIN_SCALE: f32 = 0.5;
/// Upper zoom bound, inclusive.
pub const MAX_SCALE: f32 = 3.0;

/// Pan offset and zoom scale applied to the node canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub pan_x: f32,
    pub pan_y: f32,
    pub scale: f32,
}

impl ViewportTransform {
    pub const IDENTITY: ViewportTransform = ViewportTransform {
        pan_x: 0.0,
        pan_y: 0.0,
        scale: 1.0,
    };

    pub fn new(pan_x: f32, pan_y: f32, scale: f32) -> Self {
        Self {
            pan_x,
            pan_y,
            scale,
        }
        .clamped()
    }

    /// Returns the transform with its scale coerced into `[MIN_SCALE, MAX_SCALE]`.
    pub fn clamped(mut self) -> Self {
        self.scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
        self
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Consumer of transform deltas produced by the gesture adapter.
///
/// The adapter never mutates [`TransformState`] directly; it reports deltas
/// through this seam and the owner applies and clamps them.
pub trait TransformSink {
    /// Pan by the given delta, accumulated additively.
    fn pan_by(&mut self, dx: f32, dy: f32);

    /// Adjust the zoom scale by `delta`. Implementations clamp the result.
    fn zoom_by(&mut self, delta: f32);
}

/// Shared handle to the viewport transform.
///
/// Clamping happens on every write, so no call sequence can push the scale
/// outside its bounds.
#[derive(Clone, Debug)]
pub struct TransformState {
    inner: Rc<RefCell<ViewportTransform>>,
}

impl TransformState {
    pub fn new() -> Self {
        Self::with_transform(ViewportTransform::IDENTITY)
    }

    pub fn with_transform(transform: ViewportTransform) -> Self {
        Self {
            inner: Rc::new(RefCell::new(transform.clamped())),
        }
    }

    /// Returns a consistent snapshot of the current transform.
    pub fn get(&self) -> ViewportTransform {
        *self.inner.borrow()
    }

    /// Adds `(dx, dy)` to the pan offset.
    pub fn apply_pan(&self, dx: f32, dy: f32) {
        let mut transform = self.inner.borrow_mut();
        transform.pan_x += dx;
        transform.pan_y += dy;
    }

    /// Adds `delta` to the scale, then clamps to `[MIN_SCALE, MAX_SCALE]`.
    pub fn apply_zoom(&self, delta: f32) {
        let mut transform = self.inner.borrow_mut();
        transform.scale = (transform.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Replaces the transform wholesale (used by recentering).
    pub fn set(&self, transform: ViewportTransform) {
        *self.inner.borrow_mut() = transform.clamped();
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pan_accumulates_additively() {
        let state = TransformState::new();
        state.apply_pan(10.0, -4.0);
        state.apply_pan(2.5, 4.0);
        let t = state.get();
        assert_eq!(t.pan_x, 12.5);
        assert_eq!(t.pan_y, 0.0);
    }

    #[test]
    fn zoom_clamps_at_both_bounds() {
        let state = TransformState::new();
        state.apply_zoom(100.0);
        assert_eq!(state.get().scale, MAX_SCALE);
        state.apply_zoom(-100.0);
        assert_eq!(state.get().scale, MIN_SCALE);
    }

    #[test]
    fn set_clamps_out_of_range_scale() {
        let state = TransformState::new();
        state.set(ViewportTransform {
            pan_x: 1.0,
            pan_y: 2.0,
            scale: 9.0,
        });
        let t = state.get();
        assert_eq!(t.scale, MAX_SCALE);
        assert_eq!((t.pan_x, t.pan_y), (1.0, 2.0));
    }

    #[test]
    fn snapshot_reflects_latest_write() {
        let state = TransformState::new();
        let handle = state.clone();
        handle.apply_pan(7.0, 7.0);
        handle.apply_zoom(0.25);
        let t = state.get();
        assert_eq!((t.pan_x, t.pan_y, t.scale), (7.0, 7.0, 1.25));
    }

    proptest! {
        // Scale must stay inside [MIN_SCALE, MAX_SCALE] under any zoom sequence.
        #[test]
        fn scale_stays_bounded(deltas in proptest::collection::vec(-10.0f32..10.0, 0..64)) {
            let state = TransformState::new();
            for delta in deltas {
                state.apply_zoom(delta);
                let scale = state.get().scale;
                prop_assert!((MIN_SCALE..=MAX_SCALE).contains(&scale));
            }
        }
    }
}

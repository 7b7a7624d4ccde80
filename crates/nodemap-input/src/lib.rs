//! Gesture/input adapter for the Nodemap navigator.
//!
//! Translates pointer, pinch, and wheel primitives into pan/zoom deltas and
//! reports them through [`nodemap_core::TransformSink`]. The adapter never
//! touches transform state itself; the sink owner applies and clamps.

mod gesture;
mod pointer;

pub use gesture::{GestureAdapter, WHEEL_ZOOM_STEP, ZOOM_STEP};
pub use pointer::{PointerEvent, PointerEventKind, PointerId};

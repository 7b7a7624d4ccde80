//! Core building blocks for the Nodemap spatial navigator.
//!
//! This crate holds the geometry value types shared by every other crate and
//! the [`TransformState`] object that owns the viewport's pan/zoom state.

mod geometry;
mod transform;

pub use geometry::{Point, Rect, Size};
pub use transform::{TransformSink, TransformState, ViewportTransform, MAX_SCALE, MIN_SCALE};

//! Pointer event vocabulary.

use nodemap_core::Point;

/// Identifier of one contact (mouse button press or touch finger).
pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer primitive as delivered by the host toolkit, in surface
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point) -> Self {
        Self { id, kind, position }
    }
}

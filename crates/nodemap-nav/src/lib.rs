//! Hierarchical spatial navigation for Nodemap.
//!
//! The navigator renders content as positioned node cards in a 2D
//! content-space and moves between hierarchy levels (main → category → item →
//! item detail) by regenerating the node set wholesale and recentering the
//! viewport on it.
//!
//! Crate layout mirrors the data flow:
//!
//! - [`state`] — the navigation state machine (closed transition table)
//! - [`node`] — node/node-set value types
//! - [`generate`] — pure node set generation per level
//! - [`layout`] — bounding-box centering engine
//! - [`navigator`] — the single owner tying state, nodes, and transform together

mod generate;
mod layout;
mod node;
mod navigator;
mod state;

pub use generate::{generate, RING_RADIUS};
pub use layout::{center_for, NODE_HEIGHT, NODE_WIDTH};
pub use node::{DetailPart, Node, NodeAction, NodeId, NodeKind, NodeSet};
pub use navigator::Navigator;
pub use state::{Level, NavTarget, NavigationState};

//! Navigation state machine.
//!
//! The transition table is closed and fully enumerable; asking for a
//! transition outside it is a programming error and panics. Forward moves
//! never skip a level, so the node set generator always receives a context
//! whose shape matches its level.

use nodemap_content::{CollectionKind, ContentItem};

/// Depth in the navigation hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Main,
    Category,
    Item,
    ItemDetail,
}

impl Level {
    /// Integer depth, 0 at the root.
    pub fn depth(self) -> u8 {
        match self {
            Level::Main => 0,
            Level::Category => 1,
            Level::Item => 2,
            Level::ItemDetail => 3,
        }
    }
}

/// A requested transition.
#[derive(Clone, Debug, PartialEq)]
pub enum NavTarget {
    /// Back to the root from anywhere, clearing context.
    Main,
    /// Enter a collection listing. Valid from `Main`, or as explicit
    /// up-navigation from `Item`/`ItemDetail` within the same collection.
    Category(CollectionKind),
    /// Focus one item of the current collection. Valid from `Category`.
    Item(ContentItem),
    /// Expand the focused item into its sub-components. Valid from `Item`.
    ItemDetail,
    /// One level up.
    Back,
}

/// Current position in the hierarchy, carrying exactly the context its level
/// requires: no context at `Main`, a collection at `Category`, a collection
/// plus focused item at `Item`/`ItemDetail`.
#[derive(Clone, Debug, PartialEq)]
pub enum NavigationState {
    Main,
    Category(CollectionKind),
    Item(CollectionKind, ContentItem),
    ItemDetail(CollectionKind, ContentItem),
}

impl NavigationState {
    pub fn level(&self) -> Level {
        match self {
            NavigationState::Main => Level::Main,
            NavigationState::Category(_) => Level::Category,
            NavigationState::Item(..) => Level::Item,
            NavigationState::ItemDetail(..) => Level::ItemDetail,
        }
    }

    /// The focused item; `Some` exactly at `Item`/`ItemDetail`.
    pub fn context(&self) -> Option<&ContentItem> {
        match self {
            NavigationState::Item(_, item) | NavigationState::ItemDetail(_, item) => Some(item),
            _ => None,
        }
    }

    /// The collection in scope; `None` only at `Main`.
    pub fn collection(&self) -> Option<CollectionKind> {
        match self {
            NavigationState::Main => None,
            NavigationState::Category(kind)
            | NavigationState::Item(kind, _)
            | NavigationState::ItemDetail(kind, _) => Some(*kind),
        }
    }

    /// Runs one transition, returning the new state.
    ///
    /// # Panics
    ///
    /// Panics on any transition outside the documented table, including
    /// forward moves that skip a level (`Main → Item`, `Category → ItemDetail`)
    /// and `Back` at the root.
    #[must_use]
    pub fn go_to(&self, target: NavTarget) -> NavigationState {
        match (self, target) {
            (_, NavTarget::Main) => NavigationState::Main,
            (NavigationState::Main, NavTarget::Category(kind)) => NavigationState::Category(kind),
            (NavigationState::Category(kind), NavTarget::Item(item)) => {
                NavigationState::Item(*kind, item)
            }
            (NavigationState::Item(kind, item), NavTarget::ItemDetail) => {
                NavigationState::ItemDetail(*kind, item.clone())
            }
            // Explicit up-navigation to the listing, same collection only.
            (NavigationState::Item(kind, _), NavTarget::Category(requested))
            | (NavigationState::ItemDetail(kind, _), NavTarget::Category(requested))
                if requested == *kind =>
            {
                NavigationState::Category(requested)
            }
            (NavigationState::Category(_), NavTarget::Back) => NavigationState::Main,
            (NavigationState::Item(kind, _), NavTarget::Back) => NavigationState::Category(*kind),
            (NavigationState::ItemDetail(kind, item), NavTarget::Back) => {
                NavigationState::Item(*kind, item.clone())
            }
            (state, target) => {
                panic!("invalid navigation transition: {state:?} -> {target:?}")
            }
        }
    }
}

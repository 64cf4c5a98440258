// src/item.rs
//! Item protocol shared by every composition layer.
//!
//! An [`Item`] is the smallest renderable unit of menu structure. Layers own
//! exactly one inner item and forward whatever they do not handle, so a bare
//! payload grows into a formatted, navigable entry one wrapper at a time.
//!
//! [`Item::print`] is generic over the navigation context and the output
//! target; [`DynItem`] is the object-safe counterpart used at the root, where
//! the caller does not know the full composed type.

use crate::nav::{Mode, NavAgent};
use crate::out::MenuOut;

/// Position inside a menu.
pub type Idx = usize;

/// Navigation state visible to items and back-ends during a render pass.
pub trait NavNode {
    /// Index of the entry under the cursor.
    fn pos(&self) -> Idx;

    /// Whether the entry at `idx` is under the cursor.
    fn selected(&self, idx: Idx) -> bool {
        self.pos() == idx
    }

    /// Editing mode of the entry under the cursor.
    fn mode(&self) -> Mode {
        Mode::Normal
    }
}

/// Context for printing outside of any menu: nothing is selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNav;

impl NavNode for NoNav {
    fn pos(&self) -> Idx {
        0
    }

    fn selected(&self, _idx: Idx) -> bool {
        false
    }
}

/// A unit of menu structure.
pub trait Item {
    /// Emit this item to `out`.
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O);

    /// Render this item as the whole view when it owns one (an open
    /// sub-menu). Returns `false` when the item only renders as an entry.
    fn print_view<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, _nav: &N, _out: &mut O) -> bool {
        false
    }

    /// Hand out the navigation handle for this item.
    fn activate(&mut self) -> NavAgent<'_> {
        NavAgent::empty()
    }
}

/// Object-safe printing entry point, see [`crate::items::Prompt`].
pub trait DynItem {
    fn print_dyn(&self, nav: &dyn NavNode, out: &mut dyn MenuOut);
}

/// The item that prints nothing and does not navigate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Empty;

impl Item for Empty {
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, _nav: &N, _out: &mut O) {}
}

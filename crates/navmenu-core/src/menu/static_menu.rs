// src/menu/static_menu.rs
//! Fixed, compile-time ordered entry chain.
//!
//! `StaticMenu<A, StaticMenu<B, StaticMenu<C>>>` holds the entries `A`, `B`,
//! `C`. Every operation takes an index and walks the chain: index 0 is the
//! head, anything else goes to the tail with the index decremented. The last
//! element answers for every index that reaches it, so callers needing bounds
//! checks (see [`ItemNav`](super::ItemNav)) do them up front.

use crate::item::{Idx, Item, NavNode};
use crate::nav::NavAgent;
use crate::out::MenuOut;

/// Index-addressed operations over a chain of entries.
pub trait MenuChain {
    /// Number of entries.
    const SIZE: Idx;

    fn size(&self) -> Idx {
        Self::SIZE
    }

    /// Enable or disable the entry at `idx`.
    fn enable(&mut self, idx: Idx, on: bool);

    fn enabled(&self, idx: Idx) -> bool;

    /// Print the entry at `idx` as a line of its menu.
    fn print_item<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, idx: Idx, nav: &N, out: &mut O);

    /// Let the entry at `idx` render the whole view, see [`Item::print_view`].
    fn print_view_item<N: NavNode + ?Sized, O: MenuOut + ?Sized>(
        &self,
        idx: Idx,
        nav: &N,
        out: &mut O,
    ) -> bool;

    fn activate_item(&mut self, idx: Idx) -> NavAgent<'_>;

    /// Position of the `n`-th enabled entry.
    fn sel_idx(&self, n: Idx) -> Option<Idx>;
}

/// One link of the chain: an entry, its enabled flag and the rest.
#[derive(Debug, Clone, Copy)]
pub struct StaticMenu<I, Next = ()> {
    item: I,
    enabled: bool,
    next: Next,
}

impl<I> StaticMenu<I, ()> {
    /// Last element of a chain.
    pub const fn single(item: I) -> Self {
        Self {
            item,
            enabled: true,
            next: (),
        }
    }
}

impl<I, Next> StaticMenu<I, Next> {
    pub const fn new(item: I, next: Next) -> Self {
        Self {
            item,
            enabled: true,
            next,
        }
    }

    pub fn item(&self) -> &I {
        &self.item
    }

    pub fn item_mut(&mut self) -> &mut I {
        &mut self.item
    }

    pub fn next(&self) -> &Next {
        &self.next
    }

    pub fn next_mut(&mut self) -> &mut Next {
        &mut self.next
    }
}

impl<I: Item> MenuChain for StaticMenu<I, ()> {
    const SIZE: Idx = 1;

    fn enable(&mut self, idx: Idx, on: bool) {
        if idx == 0 {
            self.enabled = on;
        }
    }

    fn enabled(&self, idx: Idx) -> bool {
        // past the end counts as enabled
        idx != 0 || self.enabled
    }

    fn print_item<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, _idx: Idx, nav: &N, out: &mut O) {
        self.item.print(nav, out);
    }

    fn print_view_item<N: NavNode + ?Sized, O: MenuOut + ?Sized>(
        &self,
        _idx: Idx,
        nav: &N,
        out: &mut O,
    ) -> bool {
        self.item.print_view(nav, out)
    }

    fn activate_item(&mut self, _idx: Idx) -> NavAgent<'_> {
        self.item.activate()
    }

    fn sel_idx(&self, n: Idx) -> Option<Idx> {
        (n == 0 && self.enabled).then_some(0)
    }
}

impl<I: Item, Next: MenuChain> MenuChain for StaticMenu<I, Next> {
    const SIZE: Idx = 1 + Next::SIZE;

    fn enable(&mut self, idx: Idx, on: bool) {
        match idx {
            0 => self.enabled = on,
            _ => self.next.enable(idx - 1, on),
        }
    }

    fn enabled(&self, idx: Idx) -> bool {
        match idx {
            0 => self.enabled,
            _ => self.next.enabled(idx - 1),
        }
    }

    fn print_item<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, idx: Idx, nav: &N, out: &mut O) {
        match idx {
            0 => self.item.print(nav, out),
            _ => self.next.print_item(idx - 1, nav, out),
        }
    }

    fn print_view_item<N: NavNode + ?Sized, O: MenuOut + ?Sized>(
        &self,
        idx: Idx,
        nav: &N,
        out: &mut O,
    ) -> bool {
        match idx {
            0 => self.item.print_view(nav, out),
            _ => self.next.print_view_item(idx - 1, nav, out),
        }
    }

    fn activate_item(&mut self, idx: Idx) -> NavAgent<'_> {
        match idx {
            0 => self.item.activate(),
            _ => self.next.activate_item(idx - 1),
        }
    }

    fn sel_idx(&self, n: Idx) -> Option<Idx> {
        let rest = if self.enabled {
            match n {
                0 => return Some(0),
                _ => n - 1,
            }
        } else {
            n
        };
        self.next.sel_idx(rest).map(|idx| idx + 1)
    }
}

/// Build a [`StaticMenu`] chain from a list of entries.
///
/// ```ignore
/// let menu = static_menu![StaticText::new("A"), StaticText::new("B")];
/// assert_eq!(menu.size(), 2);
/// ```
#[macro_export]
macro_rules! static_menu {
    ($item:expr $(,)?) => {
        $crate::menu::StaticMenu::single($item)
    };
    ($item:expr, $($rest:expr),+ $(,)?) => {
        $crate::menu::StaticMenu::new($item, $crate::static_menu!($($rest),+))
    };
}

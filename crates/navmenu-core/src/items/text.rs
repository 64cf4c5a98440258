// src/items/text.rs
//! Fixed label layer.

use crate::item::{Empty, Item, NavNode};
use crate::nav::{Mode, NavAgent, NavTarget};
use crate::out::MenuOut;

/// Emits `text` raw, then prints the inner item.
#[derive(Debug, Clone, Copy)]
pub struct StaticText<I = Empty> {
    text: &'static str,
    inner: I,
}

impl StaticText<Empty> {
    pub const fn new(text: &'static str) -> Self {
        Self { text, inner: Empty }
    }
}

impl<I> StaticText<I> {
    pub const fn with(text: &'static str, inner: I) -> Self {
        Self { text, inner }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut I {
        &mut self.inner
    }
}

impl<I: Item> Item for StaticText<I> {
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) {
        out.raw_str(self.text);
        self.inner.print(nav, out);
    }

    fn print_view<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) -> bool {
        self.inner.print_view(nav, out)
    }

    fn activate(&mut self) -> NavAgent<'_> {
        self.inner.activate()
    }
}

impl<I: NavTarget> NavTarget for StaticText<I> {
    fn up(&mut self) -> bool {
        self.inner.up()
    }

    fn down(&mut self) -> bool {
        self.inner.down()
    }

    fn enter(&mut self) -> bool {
        self.inner.enter()
    }

    fn esc(&mut self) -> bool {
        self.inner.esc()
    }

    fn mode(&self) -> Mode {
        self.inner.mode()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NoNav;
    use crate::out::{Capture, MenuOutCap, Void};

    #[test]
    fn test_label_comes_before_inner_output() {
        let item = StaticText::with("Temp ", StaticText::new("21"));
        let mut out = MenuOutCap::new(Capture::<Void, 32>::new(Void));
        item.print(&NoNav, &mut out);
        assert_eq!(out.printer().text(), "Temp 21");
        assert!(out.printer().events().is_empty());
    }

    #[test]
    fn test_plain_label_does_not_navigate() {
        let mut item = StaticText::new("Info");
        assert!(!item.activate().can_nav());
    }
}

// src/items/prompt.rs
//! Type-erasing root wrapper.

use core::ops::{Deref, DerefMut};

use crate::item::{DynItem, Item, NavNode};
use crate::nav::{Mode, NavAgent, NavTarget};
use crate::out::MenuOut;

/// Hides a composed item behind [`DynItem`] so it can be handed to
/// [`MenuOut::print_menu`].
///
/// Printing through the erased interface renders the item's own view when it
/// has one and falls back to the entry rendering otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<I>(I);

impl<I> Prompt<I> {
    pub const fn new(inner: I) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I> Deref for Prompt<I> {
    type Target = I;

    fn deref(&self) -> &I {
        &self.0
    }
}

impl<I> DerefMut for Prompt<I> {
    fn deref_mut(&mut self) -> &mut I {
        &mut self.0
    }
}

impl<I: Item> DynItem for Prompt<I> {
    fn print_dyn(&self, nav: &dyn NavNode, out: &mut dyn MenuOut) {
        if !self.0.print_view(nav, out) {
            self.0.print(nav, out);
        }
    }
}

impl<I: Item> Item for Prompt<I> {
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) {
        self.0.print(nav, out);
    }

    fn print_view<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) -> bool {
        self.0.print_view(nav, out)
    }

    fn activate(&mut self) -> NavAgent<'_> {
        self.0.activate()
    }
}

impl<I: NavTarget> NavTarget for Prompt<I> {
    fn up(&mut self) -> bool {
        self.0.up()
    }

    fn down(&mut self) -> bool {
        self.0.down()
    }

    fn enter(&mut self) -> bool {
        self.0.enter()
    }

    fn esc(&mut self) -> bool {
        self.0.esc()
    }

    fn mode(&self) -> Mode {
        self.0.mode()
    }

    fn reset(&mut self) {
        self.0.reset();
    }
}

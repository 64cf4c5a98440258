// src/out/scroll.rs
//! Scroll position for outputs shorter than the menu.

use core::ops::Range;

use super::{PrintHead, Printer, Role};
use crate::item::Idx;

/// Keeps a window of `height` entries that follows the cursor.
///
/// `STEP` is how far [`ScrollPos::scroll_up`] and [`ScrollPos::scroll_down`]
/// move the window. This is device state only; the menu structure does not
/// know it is being scrolled.
pub struct ScrollPos<O, const STEP: usize = 1> {
    inner: O,
    top: Idx,
    height: Idx,
}

impl<O: Printer, const STEP: usize> ScrollPos<O, STEP> {
    pub fn new(inner: O, height: Idx) -> Self {
        Self {
            inner,
            top: 0,
            height: height.max(1),
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut O {
        &mut self.inner
    }

    /// First visible entry.
    pub fn top(&self) -> Idx {
        self.top
    }

    pub fn height(&self) -> Idx {
        self.height
    }

    pub fn scroll_up(&mut self) -> Idx {
        self.top += STEP;
        self.top
    }

    pub fn scroll_down(&mut self) -> Idx {
        self.top = self.top.saturating_sub(STEP);
        self.top
    }

    pub fn scroll_to(&mut self, top: Idx) -> Idx {
        self.top = top;
        self.top
    }
}

impl<O: Printer, const STEP: usize> Printer for ScrollPos<O, STEP> {
    fn raw_str(&mut self, s: &str) {
        self.inner.raw_str(s);
    }

    fn raw_char(&mut self, c: char) {
        self.inner.raw_char(c);
    }

    fn new_view(&mut self) {
        self.inner.new_view();
    }

    fn view(&mut self, cursor: Idx) -> Range<Idx> {
        if cursor < self.top {
            self.top = cursor;
        } else if cursor >= self.top + self.height {
            self.top = cursor + 1 - self.height;
        }
        let outer = self.inner.view(cursor);
        let start = self.top.max(outer.start);
        let end = (self.top + self.height).min(outer.end);
        start..end
    }

    fn fmt(head: &mut PrintHead<'_, Self>, role: Role, io: bool) {
        head.inner(|p| &mut p.inner, |h| O::fmt(h, role, io));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::out::Void;

    #[test]
    fn test_window_follows_cursor() {
        let mut scroll: ScrollPos<Void> = ScrollPos::new(Void, 2);
        assert_eq!(scroll.view(0), 0..2);
        assert_eq!(scroll.view(1), 0..2);
        assert_eq!(scroll.view(3), 2..4);
        assert_eq!(scroll.top(), 2);
        assert_eq!(scroll.view(2), 2..4);
        assert_eq!(scroll.view(0), 0..2);
    }

    #[test]
    fn test_manual_scrolling_uses_step() {
        let mut scroll: ScrollPos<Void, 3> = ScrollPos::new(Void, 4);
        assert_eq!(scroll.scroll_up(), 3);
        assert_eq!(scroll.scroll_down(), 0);
        assert_eq!(scroll.scroll_down(), 0);
        assert_eq!(scroll.scroll_to(5), 5);
    }
}

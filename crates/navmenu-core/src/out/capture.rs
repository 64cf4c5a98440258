// src/out/capture.rs
//! Recording back-end for tests and diagnostics.

use core::ops::Range;

use heapless::{String, Vec};

use super::{PrintHead, Printer, Role};
use crate::item::Idx;

/// Records the notification stream and raw text, then forwards to `O`.
///
/// Both buffers hold up to `N` entries; anything past that is dropped and
/// flagged by [`Capture::overflowed`]. A new view clears the recording.
pub struct Capture<O, const N: usize> {
    inner: O,
    events: Vec<(Role, bool), N>,
    text: String<N>,
    overflowed: bool,
}

impl<O: Printer, const N: usize> Capture<O, N> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            events: Vec::new(),
            text: String::new(),
            overflowed: false,
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Every `(role, begin)` notification seen since the last view.
    pub fn events(&self) -> &[(Role, bool)] {
        &self.events
    }

    /// Raw text seen since the last view.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Number of notifications for `role` with the given direction.
    pub fn count(&self, role: Role, io: bool) -> usize {
        self.events
            .iter()
            .filter(|&&event| event == (role, io))
            .count()
    }

    /// Whether every begin is closed by a matching end in stack order.
    pub fn is_balanced(&self) -> bool {
        let mut open: Vec<Role, N> = Vec::new();
        for &(role, io) in self.events.iter() {
            if io {
                if open.push(role).is_err() {
                    return false;
                }
            } else if open.pop() != Some(role) {
                return false;
            }
        }
        open.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.text.clear();
        self.overflowed = false;
    }
}

impl<O: Printer, const N: usize> Printer for Capture<O, N> {
    fn raw_str(&mut self, s: &str) {
        if self.text.push_str(s).is_err() {
            self.overflowed = true;
        }
        self.inner.raw_str(s);
    }

    fn new_view(&mut self) {
        self.clear();
        self.inner.new_view();
    }

    fn view(&mut self, cursor: Idx) -> Range<Idx> {
        self.inner.view(cursor)
    }

    fn fmt(head: &mut PrintHead<'_, Self>, role: Role, io: bool) {
        if head.printer.events.push((role, io)).is_err() {
            head.printer.overflowed = true;
        }
        head.inner(|p| &mut p.inner, |h| O::fmt(h, role, io));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::out::{MenuOut, MenuOutCap, Void};

    #[test]
    fn test_balanced_stream() {
        let mut out = MenuOutCap::new(Capture::<Void, 16>::new(Void));
        out.fmt_menu(true);
        out.fmt_item(true);
        out.raw_str("x");
        out.fmt_item(false);
        out.fmt_menu(false);

        let capture = out.printer();
        assert!(capture.is_balanced());
        assert_eq!(capture.count(Role::Item, true), 1);
        assert_eq!(capture.text(), "x");
    }

    #[test]
    fn test_interleaved_stream_is_not_balanced() {
        let mut out = MenuOutCap::new(Capture::<Void, 16>::new(Void));
        out.fmt_menu(true);
        out.fmt_item(true);
        out.fmt_menu(false);
        out.fmt_item(false);
        assert!(!out.printer().is_balanced());

        let mut out = MenuOutCap::new(Capture::<Void, 16>::new(Void));
        out.fmt_value(true);
        assert!(!out.printer().is_balanced());
    }

    #[test]
    fn test_overflow_is_flagged() {
        let mut out = MenuOutCap::new(Capture::<Void, 4>::new(Void));
        out.raw_str("too long");
        assert!(out.printer().overflowed());
        assert_eq!(out.printer().text(), "");
    }
}

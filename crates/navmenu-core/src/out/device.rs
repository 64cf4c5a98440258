// src/out/device.rs
//! Raw output bound to an existing character sink.

use core::fmt::Write;
use core::ops::Range;

use log::warn;

use super::{PrintHead, Printer, Role, Void};
use crate::item::Idx;

/// Sends raw content straight to `dev` and role notifications to `O`.
///
/// Any [`core::fmt::Write`] works as device: a UART wrapper, a
/// `heapless::String`, a console adapter. Write failures are logged and
/// dropped, the render pass carries on.
pub struct OutDev<W, O = Void> {
    dev: W,
    inner: O,
}

impl<W: Write> OutDev<W, Void> {
    pub fn new(dev: W) -> Self {
        Self { dev, inner: Void }
    }
}

impl<W: Write, O: Printer> OutDev<W, O> {
    pub fn with_inner(dev: W, inner: O) -> Self {
        Self { dev, inner }
    }

    pub fn dev(&self) -> &W {
        &self.dev
    }

    pub fn dev_mut(&mut self) -> &mut W {
        &mut self.dev
    }

    pub fn into_dev(self) -> W {
        self.dev
    }
}

impl<W: Write, O: Printer> Printer for OutDev<W, O> {
    fn raw_str(&mut self, s: &str) {
        if self.dev.write_str(s).is_err() {
            warn!("Output device rejected {} bytes", s.len());
        }
    }

    fn raw_char(&mut self, c: char) {
        if self.dev.write_char(c).is_err() {
            warn!("Output device rejected {:?}", c);
        }
    }

    fn new_view(&mut self) {
        self.inner.new_view();
    }

    fn view(&mut self, cursor: Idx) -> Range<Idx> {
        self.inner.view(cursor)
    }

    fn fmt(head: &mut PrintHead<'_, Self>, role: Role, io: bool) {
        head.inner(|p| &mut p.inner, |h| O::fmt(h, role, io));
    }
}

// src/out/menu_out.rs
//! Object-safe output target seen by items.

use core::fmt;
use core::ops::Range;

use super::{ItemCtx, Role};
use crate::item::{DynItem, Idx, NavNode};

/// Output target of a render pass.
///
/// Every method defaults to a no-op, so a bare implementation is a valid
/// null sink. Notifiers come in pairs: `fmt_x(true)` before the content of
/// role `x` and `fmt_x(false)` after it.
pub trait MenuOut {
    fn raw_str(&mut self, _s: &str) {}
    fn raw_char(&mut self, _c: char) {}
    /// One byte, see [`Printer::raw_byte`](super::Printer::raw_byte) for the mapping.
    fn raw_byte(&mut self, _b: u8) {}
    fn raw_fmt(&mut self, _args: fmt::Arguments<'_>) {}

    fn fmt_menu(&mut self, _io: bool) {}
    fn fmt_panel(&mut self, _io: bool) {}
    fn fmt_title(&mut self, _io: bool) {}
    fn fmt_item(&mut self, _io: bool) {}
    fn fmt_accel(&mut self, _io: bool) {}
    fn fmt_cursor(&mut self, _io: bool) {}
    fn fmt_label(&mut self, _io: bool) {}
    fn fmt_mode(&mut self, _io: bool) {}
    fn fmt_value(&mut self, _io: bool) {}
    fn fmt_unit(&mut self, _io: bool) {}

    /// Notify by role tag.
    fn fmt(&mut self, role: Role, io: bool) {
        match role {
            Role::Menu => self.fmt_menu(io),
            Role::Panel => self.fmt_panel(io),
            Role::Title => self.fmt_title(io),
            Role::Item => self.fmt_item(io),
            Role::Accel => self.fmt_accel(io),
            Role::Cursor => self.fmt_cursor(io),
            Role::Label => self.fmt_label(io),
            Role::Mode => self.fmt_mode(io),
            Role::Value => self.fmt_value(io),
            Role::Unit => self.fmt_unit(io),
        }
    }

    /// Describe the entry whose notifications follow.
    fn set_item(&mut self, _ctx: ItemCtx) {}

    /// Entries the output can show while the cursor sits at `cursor`.
    fn view(&mut self, _cursor: Idx) -> Range<Idx> {
        0..Idx::MAX
    }

    /// Start a fresh view and render `target` into it.
    fn print_menu(&mut self, _target: &dyn DynItem, _nav: &dyn NavNode) {}
}

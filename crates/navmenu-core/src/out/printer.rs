// src/out/printer.rs
//! Back-end trait, the render cursor, and the adapter to [`MenuOut`].

use core::fmt;
use core::ops::Range;

use super::{ItemCtx, MenuOut, Role, advance};
use crate::item::{DynItem, Idx, NavNode};

/// A rendering back-end.
///
/// Back-ends are built by composition: a formatter owns the printer below it
/// and forwards raw content and notifications it does not handle, with
/// [`PrintHead::inner`] re-targeting the cursor at the inner printer.
pub trait Printer: Sized {
    fn raw_str(&mut self, _s: &str) {}

    fn raw_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.raw_str(c.encode_utf8(&mut buf));
    }

    /// Emit one byte as the Latin-1 character of the same value.
    ///
    /// Bytes from 0x80 up reach `raw_str` UTF-8 encoded (0xDF becomes "ß").
    /// Back-ends driving a device with its own glyph table override this to
    /// send the byte unchanged.
    fn raw_byte(&mut self, b: u8) {
        self.raw_char(char::from(b));
    }

    fn raw_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::write(&mut Forward(self), args);
    }

    /// Restart the view before a render pass.
    fn new_view(&mut self) {}

    /// Entries visible while the cursor sits at `cursor`.
    fn view(&mut self, _cursor: Idx) -> Range<Idx> {
        0..Idx::MAX
    }

    /// Begin (`io == true`) or end notification for `role`.
    fn fmt(_head: &mut PrintHead<'_, Self>, _role: Role, _io: bool) {}
}

/// Routes `core::fmt` output into a printer without buffering.
struct Forward<'a, P>(&'a mut P);

impl<P: Printer> fmt::Write for Forward<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.raw_str(s);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PrintHead
// ---------------------------------------------------------------------------

/// Transient render cursor handed to every notification.
///
/// Bundles the printer that owns the sink with the running column, so
/// back-ends track their position without global state.
pub struct PrintHead<'a, P> {
    pub printer: &'a mut P,
    /// Column since the last newline
    pub pos: usize,
    /// Entry being printed
    pub ctx: ItemCtx,
}

impl<'a, P: Printer> PrintHead<'a, P> {
    pub fn new(printer: &'a mut P, pos: usize, ctx: ItemCtx) -> Self {
        Self { printer, pos, ctx }
    }

    pub fn raw_str(&mut self, s: &str) {
        self.printer.raw_str(s);
        self.pos = advance(self.pos, s);
    }

    pub fn raw_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.raw_str(c.encode_utf8(&mut buf));
    }

    pub fn raw_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::write(self, args);
    }

    pub fn nl(&mut self) {
        self.raw_char('\n');
    }

    /// Run `f` with a head on the printer selected by `project`, keeping the
    /// column in sync.
    pub fn inner<Q, R>(
        &mut self,
        project: impl FnOnce(&mut P) -> &mut Q,
        f: impl FnOnce(&mut PrintHead<'_, Q>) -> R,
    ) -> R {
        let pos = self.pos;
        let ctx = self.ctx;
        let mut head = PrintHead {
            printer: project(&mut *self.printer),
            pos,
            ctx,
        };
        let result = f(&mut head);
        let pos = head.pos;
        self.pos = pos;
        result
    }
}

impl<P: Printer> fmt::Write for PrintHead<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.raw_str(s);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Void
// ---------------------------------------------------------------------------

/// Back-end that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Void;

impl Printer for Void {}

// ---------------------------------------------------------------------------
// MenuOutCap
// ---------------------------------------------------------------------------

/// Adapts a [`Printer`] to the [`MenuOut`] interface items talk to.
pub struct MenuOutCap<O> {
    printer: O,
    pos: usize,
    ctx: ItemCtx,
}

impl<O: Printer> MenuOutCap<O> {
    pub fn new(printer: O) -> Self {
        Self {
            printer,
            pos: 0,
            ctx: ItemCtx::default(),
        }
    }

    pub fn printer(&self) -> &O {
        &self.printer
    }

    pub fn printer_mut(&mut self) -> &mut O {
        &mut self.printer
    }

    pub fn into_inner(self) -> O {
        self.printer
    }

    /// Column since the last newline.
    pub fn pos(&self) -> usize {
        self.pos
    }

    fn notify(&mut self, role: Role, io: bool) {
        let mut head = PrintHead::new(&mut self.printer, self.pos, self.ctx);
        O::fmt(&mut head, role, io);
        let pos = head.pos;
        self.pos = pos;
    }
}

/// Routes `core::fmt` output through [`MenuOut::raw_str`].
struct Raw<'a, T: ?Sized>(&'a mut T);

impl<T: MenuOut + ?Sized> fmt::Write for Raw<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.raw_str(s);
        Ok(())
    }
}

impl<O: Printer> MenuOut for MenuOutCap<O> {
    fn raw_str(&mut self, s: &str) {
        self.printer.raw_str(s);
        self.pos = advance(self.pos, s);
    }

    fn raw_char(&mut self, c: char) {
        self.printer.raw_char(c);
        self.pos = if c == '\n' { 0 } else { self.pos + 1 };
    }

    fn raw_byte(&mut self, b: u8) {
        self.printer.raw_byte(b);
        self.pos = if b == b'\n' { 0 } else { self.pos + 1 };
    }

    fn raw_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::write(&mut Raw(self), args);
    }

    fn fmt_menu(&mut self, io: bool) {
        self.notify(Role::Menu, io);
    }

    fn fmt_panel(&mut self, io: bool) {
        self.notify(Role::Panel, io);
    }

    fn fmt_title(&mut self, io: bool) {
        self.notify(Role::Title, io);
    }

    fn fmt_item(&mut self, io: bool) {
        self.notify(Role::Item, io);
    }

    fn fmt_accel(&mut self, io: bool) {
        self.notify(Role::Accel, io);
    }

    fn fmt_cursor(&mut self, io: bool) {
        self.notify(Role::Cursor, io);
    }

    fn fmt_label(&mut self, io: bool) {
        self.notify(Role::Label, io);
    }

    fn fmt_mode(&mut self, io: bool) {
        self.notify(Role::Mode, io);
    }

    fn fmt_value(&mut self, io: bool) {
        self.notify(Role::Value, io);
    }

    fn fmt_unit(&mut self, io: bool) {
        self.notify(Role::Unit, io);
    }

    fn fmt(&mut self, role: Role, io: bool) {
        self.notify(role, io);
    }

    fn set_item(&mut self, ctx: ItemCtx) {
        self.ctx = ctx;
    }

    fn view(&mut self, cursor: Idx) -> Range<Idx> {
        self.printer.view(cursor)
    }

    fn print_menu(&mut self, target: &dyn DynItem, nav: &dyn NavNode) {
        self.printer.new_view();
        self.pos = 0;
        self.ctx = ItemCtx::default();
        target.print_dyn(nav, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::out::Capture;

    /// Writes the column it sees at every item boundary.
    struct Columns {
        seen: heapless::Vec<usize, 8>,
    }

    impl Printer for Columns {
        fn fmt(head: &mut PrintHead<'_, Self>, role: Role, io: bool) {
            if role == Role::Item && !io {
                let pos = head.pos;
                head.printer.seen.push(pos).ok();
                head.nl();
            }
        }
    }

    #[test]
    fn test_advance_resets_at_newline() {
        assert_eq!(advance(3, "ab"), 5);
        assert_eq!(advance(3, "ab\ncd"), 2);
        assert_eq!(advance(3, "\n"), 0);
    }

    #[test]
    fn test_head_column_follows_raw_output() {
        let mut out = MenuOutCap::new(Columns {
            seen: heapless::Vec::new(),
        });
        out.raw_str("abc");
        out.fmt_item(false);
        out.raw_fmt(format_args!("{}", 42));
        out.fmt_item(false);

        assert_eq!(out.printer().seen.as_slice(), &[3, 2]);
        assert_eq!(out.pos(), 0);
    }

    #[test]
    fn test_role_notifiers_reach_the_printer() {
        let mut out = MenuOutCap::new(Capture::<Void, 32>::new(Void));
        for role in Role::ALL {
            out.fmt(role, true);
        }
        out.fmt_unit(false);
        out.fmt_menu(false);

        let events = out.printer().events();
        assert_eq!(events.len(), 12);
        assert_eq!(events[0], (Role::Menu, true));
        assert_eq!(events[9], (Role::Unit, true));
        assert_eq!(events[10], (Role::Unit, false));
        assert_eq!(events[11], (Role::Menu, false));
    }

    #[test]
    fn test_void_swallows_everything() {
        let mut out = MenuOutCap::new(Void);
        out.fmt_value(true);
        out.raw_str("hidden");
        out.raw_byte(b'x');
        out.fmt_value(false);
        assert_eq!(out.pos(), 7);
    }
}

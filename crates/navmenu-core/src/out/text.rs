// src/out/text.rs
//! Text formatting for character devices (serial consoles, character LCDs).

use core::ops::Range;

use super::{ItemCtx, PrintHead, Printer, Role};
use crate::config::TextFmtConfig;
use crate::item::Idx;
use crate::nav::Mode;

/// Adds the text layout on top of a raw device:
///
/// - the 1-based entry number at the accelerator,
/// - a cursor glyph showing selection, editing and disabled entries,
/// - a newline after the title and after every entry.
pub struct TextFmt<O> {
    inner: O,
    config: TextFmtConfig,
}

impl<O: Printer> TextFmt<O> {
    pub fn new(inner: O) -> Self {
        Self::with_config(inner, TextFmtConfig::default())
    }

    pub fn with_config(inner: O, config: TextFmtConfig) -> Self {
        Self { inner, config }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut O {
        &mut self.inner
    }

    pub fn config(&self) -> &TextFmtConfig {
        &self.config
    }

    fn cursor(&self, ctx: &ItemCtx) -> char {
        if !ctx.enabled {
            self.config.disabled_cursor
        } else if !ctx.selected {
            self.config.blank
        } else if ctx.mode == Mode::Normal {
            self.config.cursor
        } else {
            self.config.edit_cursor
        }
    }
}

impl<O: Printer> Printer for TextFmt<O> {
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
        self.inner.view(cursor)
    }

    fn fmt(head: &mut PrintHead<'_, Self>, role: Role, io: bool) {
        head.inner(|p| &mut p.inner, |h| O::fmt(h, role, io));
        match (role, io) {
            (Role::Accel, true) if head.printer.config.show_index => {
                let number = head.ctx.idx + 1;
                head.raw_fmt(format_args!("{}", number));
            }
            (Role::Cursor, true) => {
                let glyph = head.printer.cursor(&head.ctx);
                head.raw_char(glyph);
            }
            (Role::Title, false) | (Role::Item, false) => head.nl(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::out::{MenuOut, MenuOutCap, OutDev};

    type Console = MenuOutCap<TextFmt<OutDev<heapless::String<64>>>>;

    fn console(config: TextFmtConfig) -> Console {
        MenuOutCap::new(TextFmt::with_config(
            OutDev::new(heapless::String::new()),
            config,
        ))
    }

    fn entry(out: &mut Console, ctx: ItemCtx, label: &str) {
        out.set_item(ctx);
        out.fmt_item(true);
        out.fmt_accel(true);
        out.fmt_accel(false);
        out.fmt_cursor(true);
        out.fmt_cursor(false);
        out.raw_str(label);
        out.fmt_item(false);
    }

    #[test]
    fn test_entries_get_index_cursor_and_newline() {
        let mut out = console(TextFmtConfig::default());
        out.fmt_title(true);
        out.raw_str("Main");
        out.fmt_title(false);
        entry(
            &mut out,
            ItemCtx {
                idx: 0,
                selected: true,
                enabled: true,
                mode: Mode::Normal,
            },
            "Alpha",
        );
        entry(
            &mut out,
            ItemCtx {
                idx: 1,
                selected: false,
                enabled: false,
                mode: Mode::Normal,
            },
            "Beta",
        );

        assert_eq!(
            out.printer().inner().dev().as_str(),
            "Main\n1>Alpha\n2-Beta\n"
        );
        assert_eq!(out.pos(), 0);
    }

    #[test]
    fn test_edit_cursor_without_index() {
        let mut out = console(TextFmtConfig {
            show_index: false,
            ..TextFmtConfig::default()
        });
        entry(
            &mut out,
            ItemCtx {
                idx: 4,
                selected: true,
                enabled: true,
                mode: Mode::Edit,
            },
            "21",
        );
        assert_eq!(out.printer().inner().dev().as_str(), ":21\n");
    }
}

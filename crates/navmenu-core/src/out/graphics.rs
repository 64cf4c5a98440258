// src/out/graphics.rs
//! Graphic panel back-end on top of `embedded-graphics`.
//!
//! Draws monospaced text line by line: one line for the title, one per entry.
//! The selected entry is drawn with inverted colors and gets a cursor glyph
//! that changes while the entry is being edited. Disabled entries are drawn
//! in a dimmed color behind a `-` glyph. Draw errors are logged and
//! swallowed so a flaky panel never stalls navigation.

use core::fmt;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use log::warn;

use super::{PrintHead, Printer, Role};
use crate::config::GraphicsConfig;
use crate::nav::Mode;

pub struct GraphicsOut<D> {
    display: D,
    font: &'static MonoFont<'static>,
    foreground: Rgb565,
    background: Rgb565,
    disabled: Rgb565,
    config: GraphicsConfig,
    line: u32,
    column: u32,
    inverted: bool,
    dimmed: bool,
}

impl<D> GraphicsOut<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: fmt::Debug,
{
    pub fn new(display: D) -> Self {
        Self {
            display,
            font: &FONT_6X10,
            foreground: Rgb565::WHITE,
            background: Rgb565::BLACK,
            disabled: Rgb565::new(12, 24, 12),
            config: GraphicsConfig::default(),
            line: 0,
            column: 0,
            inverted: false,
            dimmed: false,
        }
    }

    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    pub fn with_colors(mut self, foreground: Rgb565, background: Rgb565) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Text color of disabled entries.
    pub fn with_disabled_color(mut self, disabled: Rgb565) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_config(mut self, config: GraphicsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Text line the next output lands on.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Lines that fit on the display, for sizing a [`super::ScrollPos`].
    pub fn lines(&self) -> usize {
        let height = self.display.bounding_box().size.height;
        (height / self.line_height()).max(1) as usize
    }

    fn line_height(&self) -> u32 {
        self.font.character_size.height + self.config.line_spacing
    }

    fn char_width(&self) -> u32 {
        self.font.character_size.width + self.font.character_spacing
    }

    fn newline(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    fn draw_run(&mut self, run: &str) {
        if run.is_empty() {
            return;
        }
        let foreground = if self.dimmed {
            self.disabled
        } else {
            self.foreground
        };
        let (text_color, background_color) = if self.inverted {
            (self.background, foreground)
        } else {
            (foreground, self.background)
        };
        let mut style = MonoTextStyle::new(self.font, text_color);
        style.background_color = Some(background_color);

        let position = Point::new(
            self.config.margin + (self.column * self.char_width()) as i32,
            (self.line * self.line_height()) as i32,
        );
        let text = Text::with_baseline(run, position, style, Baseline::Top);
        if let Err(e) = text.draw(&mut self.display) {
            warn!("Menu text draw failed: {:?}", e);
        }
        self.column += run.chars().count() as u32;
    }
}

impl<D> Printer for GraphicsOut<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: fmt::Debug,
{
    fn raw_str(&mut self, s: &str) {
        let mut runs = s.split('\n');
        if let Some(first) = runs.next() {
            self.draw_run(first);
        }
        for run in runs {
            self.newline();
            self.draw_run(run);
        }
    }

    fn new_view(&mut self) {
        if let Err(e) = self.display.clear(self.background) {
            warn!("Menu display clear failed: {:?}", e);
        }
        self.line = 0;
        self.column = 0;
        self.inverted = false;
        self.dimmed = false;
    }

    fn fmt(head: &mut PrintHead<'_, Self>, role: Role, io: bool) {
        match (role, io) {
            (Role::Item, true) => {
                head.printer.inverted = head.ctx.selected;
                head.printer.dimmed = !head.ctx.enabled;
            }
            (Role::Item, false) => {
                head.printer.inverted = false;
                head.printer.dimmed = false;
                head.nl();
            }
            (Role::Title, false) => head.nl(),
            (Role::Cursor, true) => {
                let glyph = match (head.ctx.enabled, head.ctx.selected, head.ctx.mode) {
                    (false, _, _) => '-',
                    (true, false, _) => ' ',
                    (true, true, Mode::Normal) => '>',
                    (true, true, _) => '*',
                };
                head.raw_char(glyph);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::out::{ItemCtx, MenuOut, MenuOutCap};
    use embedded_graphics::mock_display::MockDisplay;

    fn panel() -> MenuOutCap<GraphicsOut<MockDisplay<Rgb565>>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        MenuOutCap::new(GraphicsOut::new(display))
    }

    #[test]
    fn test_title_and_entries_take_one_line_each() {
        let mut out = panel();
        out.fmt_title(true);
        out.raw_str("Main");
        out.fmt_title(false);
        for idx in 0..2 {
            out.set_item(ItemCtx {
                idx,
                selected: idx == 0,
                enabled: true,
                mode: Mode::Normal,
            });
            out.fmt_item(true);
            out.fmt_cursor(true);
            out.fmt_cursor(false);
            out.raw_str("Entry");
            out.fmt_item(false);
        }
        assert_eq!(out.printer().line(), 3);
        assert!(!out.printer().inverted);
    }

    #[test]
    fn test_embedded_newline_moves_down() {
        let mut out = panel();
        out.raw_str("a\nb");
        assert_eq!(out.printer().line(), 1);
        assert_eq!(out.pos(), 1);
    }

    #[test]
    fn test_disabled_entry_is_dimmed() {
        let mut out = panel();
        out.set_item(ItemCtx {
            idx: 0,
            selected: false,
            enabled: false,
            mode: Mode::Normal,
        });
        out.fmt_item(true);
        assert!(out.printer().dimmed);
        out.fmt_cursor(true);
        out.fmt_cursor(false);
        out.raw_str("Off");
        out.fmt_item(false);
        assert!(!out.printer().dimmed);

        let dim = out.printer().disabled;
        let display = out.printer().display();
        let drawn_dim = (0..64)
            .flat_map(|y| (0..64).map(move |x| Point::new(x, y)))
            .any(|p| display.get_pixel(p) == Some(dim));
        assert!(drawn_dim);
    }
}

// src/items/choice.rs
//! Pick-one-of payload.

use crate::error::{MenuError, MenuResult};
use crate::item::{Item, NavNode};
use crate::nav::{Mode, NavTarget};
use crate::out::MenuOut;

/// One of a fixed list of labelled values.
///
/// `up` and `down` cycle through the options in both directions. `enter` and
/// `esc` finish editing.
#[derive(Debug, Clone, Copy)]
pub struct Choice<T: 'static> {
    options: &'static [(&'static str, T)],
    sel: usize,
}

impl<T: Copy + 'static> Choice<T> {
    pub fn new(options: &'static [(&'static str, T)]) -> MenuResult<Self> {
        if options.is_empty() {
            return Err(MenuError::EmptyChoice);
        }
        Ok(Self { options, sel: 0 })
    }

    /// Value of the current option.
    pub fn value(&self) -> T {
        self.options[self.sel].1
    }

    pub fn label(&self) -> &'static str {
        self.options[self.sel].0
    }

    pub fn selected(&self) -> usize {
        self.sel
    }

    /// Move to option `n`.
    pub fn select(&mut self, n: usize) -> MenuResult<()> {
        if n >= self.options.len() {
            return Err(MenuError::IndexOutOfRange {
                index: n,
                size: self.options.len(),
            });
        }
        self.sel = n;
        Ok(())
    }
}

impl<T: Copy + 'static> Item for Choice<T> {
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, _nav: &N, out: &mut O) {
        out.raw_str(self.label());
    }
}

impl<T: Copy + 'static> NavTarget for Choice<T> {
    fn up(&mut self) -> bool {
        self.sel = (self.sel + 1) % self.options.len();
        true
    }

    fn down(&mut self) -> bool {
        self.sel = self.sel.checked_sub(1).unwrap_or(self.options.len() - 1);
        true
    }

    fn enter(&mut self) -> bool {
        false
    }

    fn esc(&mut self) -> bool {
        false
    }

    fn mode(&self) -> Mode {
        Mode::Edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NoNav;
    use crate::out::{Capture, MenuOutCap, Void};

    static FAN: [(&str, u8); 3] = [("Off", 0), ("Low", 1), ("High", 2)];
    static NONE: [(&str, u8); 0] = [];

    #[test]
    fn test_empty_option_list_is_rejected() {
        assert_eq!(Choice::new(&NONE).unwrap_err(), MenuError::EmptyChoice);
    }

    #[test]
    fn test_cycles_both_ways() {
        let mut fan = Choice::new(&FAN).unwrap();
        assert!(fan.down());
        assert_eq!(fan.label(), "High");
        assert!(fan.up());
        assert!(fan.up());
        assert_eq!(fan.value(), 1);
    }

    #[test]
    fn test_select_is_bounds_checked() {
        let mut fan = Choice::new(&FAN).unwrap();
        assert!(fan.select(2).is_ok());
        assert_eq!(fan.selected(), 2);
        assert_eq!(
            fan.select(3),
            Err(MenuError::IndexOutOfRange { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_prints_current_label() {
        let mut fan = Choice::new(&FAN).unwrap();
        fan.up();
        let mut out = MenuOutCap::new(Capture::<Void, 16>::new(Void));
        fan.print(&NoNav, &mut out);
        assert_eq!(out.printer().text(), "Low");
        assert!(!fan.enter());
        assert_eq!(fan.mode(), Mode::Edit);
    }
}

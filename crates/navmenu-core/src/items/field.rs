// src/items/field.rs
//! Editable numeric payload.

use core::fmt::Display;
use core::ops::{Add, Sub};

use crate::error::{MenuError, MenuResult};
use crate::item::{Item, NavNode};
use crate::items::{AsUnit, StaticText};
use crate::nav::{Mode, NavTarget};
use crate::out::MenuOut;

/// A number kept inside `[low, high]` and changed by `step`.
///
/// While focused, `up` and `down` move the value and report `false` once it
/// sits on the bound. `enter` and `esc` both answer `false`, which tells the
/// owning menu that editing is over.
///
/// Wrap it in [`NavHandler`](crate::items::NavHandler) to make it editable.
#[derive(Debug, Clone, Copy)]
pub struct Field<T> {
    value: T,
    low: T,
    high: T,
    step: T,
    unit: Option<AsUnit<StaticText>>,
}

impl<T> Field<T>
where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sub<Output = T> + Display,
{
    /// Build a field; `value` is clamped into range.
    pub fn new(value: T, low: T, high: T, step: T) -> MenuResult<Self> {
        if low > high || step <= T::default() {
            return Err(MenuError::InvalidRange);
        }
        let mut field = Self {
            value: low,
            low,
            high,
            step,
            unit: None,
        };
        field.set(value);
        Ok(field)
    }

    /// Print `unit` after the value, announced as [`Role::Unit`](crate::out::Role::Unit).
    pub fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(AsUnit::new(StaticText::new(unit)));
        self
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Set the value, clamped into range.
    pub fn set(&mut self, value: T) {
        self.value = if value < self.low {
            self.low
        } else if value > self.high {
            self.high
        } else {
            value
        };
    }

    pub fn low(&self) -> T {
        self.low
    }

    pub fn high(&self) -> T {
        self.high
    }
}

impl<T> Item for Field<T>
where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sub<Output = T> + Display,
{
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) {
        out.raw_fmt(format_args!("{}", self.value));
        if let Some(unit) = &self.unit {
            unit.print(nav, out);
        }
    }
}

impl<T> NavTarget for Field<T>
where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sub<Output = T> + Display,
{
    fn up(&mut self) -> bool {
        if self.value >= self.high {
            return false;
        }
        let zero = T::default();
        // subtract only within one sign, the full span may not fit in T
        self.value = if self.value < zero {
            let next = self.value + self.step;
            if next > self.high { self.high } else { next }
        } else if self.high - self.value < self.step {
            self.high
        } else {
            self.value + self.step
        };
        true
    }

    fn down(&mut self) -> bool {
        if self.value <= self.low {
            return false;
        }
        let zero = T::default();
        self.value = if self.low >= zero || self.value < zero {
            if self.value - self.low < self.step {
                self.low
            } else {
                self.value - self.step
            }
        } else {
            let next = self.value - self.step;
            if next < self.low { self.low } else { next }
        };
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
    use crate::out::{Capture, MenuOutCap, Role, Void};

    #[test]
    fn test_rejects_unusable_ranges() {
        assert_eq!(Field::new(0, 10, 5, 1).unwrap_err(), MenuError::InvalidRange);
        assert_eq!(Field::new(0, 0, 5, 0).unwrap_err(), MenuError::InvalidRange);
        assert_eq!(Field::new(0.0, 0.0, 1.0, -0.5).unwrap_err(), MenuError::InvalidRange);
    }

    #[test]
    fn test_initial_value_is_clamped() {
        assert_eq!(Field::new(99, 0, 40, 1).unwrap().value(), 40);
        assert_eq!(Field::new(-3, 0, 40, 1).unwrap().value(), 0);
    }

    #[test]
    fn test_steps_stop_at_bounds() {
        let mut field = Field::new(8u8, 0, 10, 3).unwrap();
        assert!(field.up());
        assert_eq!(field.value(), 10);
        assert!(!field.up());
        assert!(field.down());
        assert!(field.down());
        assert!(field.down());
        assert_eq!(field.value(), 1);
        assert!(field.down());
        assert_eq!(field.value(), 0);
        assert!(!field.down());
    }

    #[test]
    fn test_steps_near_type_limits_do_not_overflow() {
        let mut field = Field::new(250u8, 0, u8::MAX, 10).unwrap();
        assert!(field.up());
        assert_eq!(field.value(), u8::MAX);
    }

    #[test]
    fn test_signed_range_wider_than_the_type() {
        let mut field = Field::new(-100i8, -100, 100, 1).unwrap();
        assert!(field.up());
        assert_eq!(field.value(), -99);

        field.set(100);
        assert!(field.down());
        assert_eq!(field.value(), 99);

        let mut full = Field::new(0i8, i8::MIN, i8::MAX, 100).unwrap();
        assert!(full.up());
        assert_eq!(full.value(), 100);
        assert!(full.up());
        assert_eq!(full.value(), i8::MAX);
        assert!(!full.up());
        assert!(full.down());
        assert_eq!(full.value(), 27);
        assert!(full.down());
        assert_eq!(full.value(), -73);
        assert!(full.down());
        assert_eq!(full.value(), i8::MIN);
        assert!(!full.down());
        assert!(full.up());
        assert_eq!(full.value(), -28);
    }

    #[test]
    fn test_enter_and_esc_finish_editing() {
        let mut field = Field::new(1, 0, 2, 1).unwrap();
        assert!(!field.enter());
        assert!(!field.esc());
        assert_eq!(field.mode(), Mode::Edit);
    }

    #[test]
    fn test_prints_value_then_unit() {
        let field = Field::new(21.5f32, 5.0, 30.0, 0.5).unwrap().with_unit("C");
        let mut out = MenuOutCap::new(Capture::<Void, 32>::new(Void));
        field.print(&NoNav, &mut out);
        assert_eq!(out.printer().text(), "21.5C");
        assert_eq!(out.printer().events(), &[(Role::Unit, true), (Role::Unit, false)]);
    }
}

//! Item composition layers and payloads
//!
//! Each layer owns one inner item and forwards what it does not handle:
//!
//! - [`StaticText`]: fixed label in front of the inner item
//! - [`NavHandler`]: makes the inner [`NavTarget`](crate::nav::NavTarget) reachable by navigation
//! - [`Action`]: runs a predicate on activation
//! - [`AsValue`], [`AsMode`], [`AsUnit`] (and [`AsLabel`], [`AsTitle`], [`AsAccel`]):
//!   bracket the inner output with a role notification pair
//! - [`Prompt`]: object-safe root adapter
//!
//! Payloads: [`Field`] (editable number) and [`Choice`] (one of a fixed set).
//!
//! # Examples
//!
//! ```ignore
//! let setpoint = NavHandler::new(StaticText::with(
//!     "Setpoint ",
//!     AsValue::new(Field::new(21, 5, 30, 1)?.with_unit("C")),
//! ));
//! ```

mod action;
mod choice;
mod field;
mod prompt;
mod role;
mod text;

pub use action::{Action, ActionHandler, NavHandler, do_nothing};
pub use choice::Choice;
pub use field::Field;
pub use prompt::Prompt;
pub use role::{
    AccelRole, AsAccel, AsLabel, AsMode, AsRole, AsTitle, AsUnit, AsValue, LabelRole, ModeRole,
    RoleTag, TitleRole, UnitRole, ValueRole,
};
pub use text::StaticText;

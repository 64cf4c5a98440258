//! Menus: the fixed entry chain and the navigation root driving it
//!
//! A [`StaticMenu`] is a compile-time list of entries built with
//! [`static_menu!`](crate::static_menu). [`ItemNav`] owns one, keeps the
//! cursor in a [`NavPos`] and turns [`Cmd`](crate::nav::Cmd)s into cursor
//! moves, activations and focus changes.
//!
//! ```ignore
//! let mut root = ItemNav::new("Main", static_menu![
//!     StaticText::new("Info"),
//!     NavHandler::new(StaticText::with("Temp ", AsValue::new(Field::new(21, 5, 30, 1)?))),
//!     Action::new(StaticText::new("Save"), save),
//! ]);
//! root.command(Cmd::Down);
//! root.print_menu(&mut out);
//! ```

mod item_nav;
mod nav_pos;
mod static_menu;

pub use item_nav::ItemNav;
pub use nav_pos::NavPos;
pub use static_menu::{MenuChain, StaticMenu};

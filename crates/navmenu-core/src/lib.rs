//! Hardware-independent core of the navmenu hierarchical menu framework
//!
//! Menus are composed at compile time from small item layers, navigated
//! through four commands (up, down, enter, esc) and rendered through a
//! pluggable output pipeline of role notifications.
//!
//! It is `#![no_std]` without `alloc`: every menu lives in a fixed-size
//! structure and every back-end renders in place, so it runs unchanged on
//! microcontrollers and on desktop hosts (for the simulator and tests).
//!
//! - [`nav`]: capability tables and the navigation handle
//! - [`item`]: the item protocol
//! - [`items`]: composition layers and editable payloads
//! - [`menu`]: the static entry chain and its navigation root
//! - [`out`]: role notifications and back-ends

#![no_std]

pub mod config;
pub mod error;
pub mod item;
pub mod items;
pub mod menu;
pub mod nav;
pub mod out;

pub use error::{MenuError, MenuResult};
pub use item::{DynItem, Empty, Idx, Item, NavNode, NoNav};
pub use menu::{ItemNav, MenuChain, NavPos, StaticMenu};
pub use nav::{Cmd, CmdAgent, Mode, NavAgent, NavTarget};

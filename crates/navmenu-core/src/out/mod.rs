//! Output pipeline: role notifications and pluggable back-ends
//!
//! Rendering a menu produces a stream of paired begin/end notifications, one
//! pair per structural [`Role`], interleaved with raw content. Items talk to
//! a [`MenuOut`]; [`MenuOutCap`] adapts any [`Printer`] back-end to that
//! interface and hands the back-end a [`PrintHead`] on every notification.
//!
//! Back-ends compose like the item layers do: formatters wrap the device.
//!
//! ```ignore
//! let mut out = MenuOutCap::new(TextFmt::new(OutDev::new(serial)));
//! out.print_menu(&root, &NoNav);
//! ```
//!
//! - [`Void`]: discards everything, the base case of every chain.
//! - [`OutDev`]: raw content to a [`core::fmt::Write`] sink.
//! - [`TextFmt`]: cursor, index and line endings for text devices.
//! - [`ScrollPos`]: view window following the cursor.
//! - [`Capture`]: records the notification stream.
//! - [`GraphicsOut`]: monospaced text on an `embedded-graphics` target.

use serde::{Deserialize, Serialize};

use crate::item::Idx;
use crate::nav::Mode;

mod capture;
mod device;
mod graphics;
mod menu_out;
mod printer;
mod scroll;
mod text;

pub use capture::Capture;
pub use device::OutDev;
pub use graphics::GraphicsOut;
pub use menu_out::MenuOut;
pub use printer::{MenuOutCap, PrintHead, Printer, Void};
pub use scroll::ScrollPos;
pub use text::TextFmt;

/// Structural categories announced to the back-end.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Menu,
    Panel,
    Title,
    Item,
    Accel,
    Cursor,
    Label,
    Mode,
    Value,
    Unit,
}

impl Role {
    pub const ALL: [Role; 10] = [
        Role::Menu,
        Role::Panel,
        Role::Title,
        Role::Item,
        Role::Accel,
        Role::Cursor,
        Role::Label,
        Role::Mode,
        Role::Value,
        Role::Unit,
    ];
}

/// State of the entry currently being printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ItemCtx {
    /// Position of the entry in its menu
    pub idx: Idx,
    /// Entry is under the cursor
    pub selected: bool,
    /// Entry accepts activation
    pub enabled: bool,
    /// Editing mode, `Normal` unless the entry is focused
    pub mode: Mode,
}

/// Column after emitting `s` when the head was at `pos`.
pub(crate) fn advance(pos: usize, s: &str) -> usize {
    match s.rfind('\n') {
        Some(nl) => s[nl + 1..].chars().count(),
        None => pos + s.chars().count(),
    }
}

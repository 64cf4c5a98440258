// src/menu/nav_pos.rs
use crate::item::{Idx, NavNode};
use crate::nav::Mode;

/// Cursor of one menu level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavPos {
    /// Entry under the cursor
    pub pos: Idx,
    /// Editing mode of that entry, `Normal` unless it holds the focus
    pub mode: Mode,
}

impl NavPos {
    pub const fn new(pos: Idx) -> Self {
        Self {
            pos,
            mode: Mode::Normal,
        }
    }
}

impl NavNode for NavPos {
    fn pos(&self) -> Idx {
        self.pos
    }

    fn mode(&self) -> Mode {
        self.mode
    }
}

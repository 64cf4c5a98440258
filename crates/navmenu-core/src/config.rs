//! Back-end settings.
//!
//! Plain serde structures so a host can keep them wherever it keeps the rest
//! of its configuration. Loading them is up to the host.

use serde::{Deserialize, Serialize};

/// Glyphs and layout switches of the text formatter ([`crate::out::TextFmt`]).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFmtConfig {
    /// Cursor in front of the selected entry
    pub cursor: char,
    /// Cursor in front of the selected entry while it is being edited
    pub edit_cursor: char,
    /// Marker in front of a disabled entry
    pub disabled_cursor: char,
    /// Filler in front of every other entry
    pub blank: char,
    /// Print the 1-based entry number as accelerator
    pub show_index: bool,
}

impl Default for TextFmtConfig {
    fn default() -> Self {
        Self {
            cursor: '>',
            edit_cursor: ':',
            disabled_cursor: '-',
            blank: ' ',
            show_index: true,
        }
    }
}

/// Text placement of the graphics back-end ([`crate::out::GraphicsOut`]).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsConfig {
    /// Left margin in pixels
    pub margin: i32,
    /// Extra pixels between two text lines
    pub line_spacing: u32,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            margin: 2,
            line_spacing: 2,
        }
    }
}

//! Error types for the caller-facing menu APIs.
//!
//! Navigation and rendering never fail: commands answer with booleans and the
//! output pipeline has no error path. These errors only come from the APIs
//! that validate caller input before touching the static structure.

use thiserror_no_std::Error;

use crate::item::Idx;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Index past the end of a menu
    #[error("Index {index} out of range (size: {size})")]
    IndexOutOfRange {
        /// The rejected index
        index: Idx,
        /// Number of entries in the menu
        size: Idx,
    },

    /// No enabled entry at the requested logical position
    #[error("No enabled entry at logical index {index}")]
    NoEnabledEntry {
        /// The logical index that could not be resolved
        index: Idx,
    },

    /// Value bounds or step are unusable
    #[error("Invalid value range (low > high or step <= 0)")]
    InvalidRange,

    /// Choice built without options
    #[error("Choice needs at least one option")]
    EmptyChoice,
}

/// Result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

//! Errors raised by color parsing and color slot edits.

use thiserror::Error;

/// Errors from color conversion and color category editing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input was not a `#rrggbb` hex string.
    #[error("Invalid hex color '{0}'. Expected '#' followed by 6 hex digits (#rrggbb)")]
    InvalidFormat(String),

    /// A color slot index past the end of a category.
    #[error("Color slot {slot} is out of range for category '{category}' ({len} slots)")]
    SlotOutOfRange {
        /// Category name
        category: String,
        /// Requested slot
        slot: usize,
        /// Number of slots in the category
        len: usize,
    },

    /// Tried to grow a category whose slot count is fixed.
    #[error("Category '{0}' has a fixed number of colors")]
    FixedArity(String),
}

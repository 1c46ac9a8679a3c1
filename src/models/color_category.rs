//! Editable color slots attached to a character sprite.

use serde::{Deserialize, Serialize};

use crate::models::{ColorError, RgbColor};

/// A named group of sprite colors.
///
/// Most parts of a sprite (hair, skin, clothing) are recolored with a
/// highlight/shadow pair. Miscellaneous parts carry however many colors the
/// sprite needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorCategory {
    /// Exactly two colors
    FixedPair {
        /// Category name (e.g. "hair")
        name: String,
        /// The two colors
        colors: [RgbColor; 2],
    },
    /// Any number of colors
    Variable {
        /// Category name (e.g. "misc")
        name: String,
        /// The colors, in slot order
        colors: Vec<RgbColor>,
    },
}

impl ColorCategory {
    /// Creates a two-color category.
    pub fn pair(name: impl Into<String>, first: RgbColor, second: RgbColor) -> Self {
        Self::FixedPair {
            name: name.into(),
            colors: [first, second],
        }
    }

    /// Creates a variable-length category.
    pub fn variable(name: impl Into<String>, colors: Vec<RgbColor>) -> Self {
        Self::Variable {
            name: name.into(),
            colors,
        }
    }

    /// Category name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::FixedPair { name, .. } | Self::Variable { name, .. } => name,
        }
    }

    /// Colors in slot order.
    #[must_use]
    pub fn colors(&self) -> &[RgbColor] {
        match self {
            Self::FixedPair { colors, .. } => colors.as_slice(),
            Self::Variable { colors, .. } => colors.as_slice(),
        }
    }

    /// Number of color slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors().len()
    }

    /// True if the category has no slots (only possible for `Variable`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors().is_empty()
    }

    /// Replaces the color in `slot`.
    pub fn set_color(&mut self, slot: usize, color: RgbColor) -> Result<(), ColorError> {
        let len = self.len();
        if slot >= len {
            return Err(ColorError::SlotOutOfRange {
                category: self.name().to_string(),
                slot,
                len,
            });
        }

        match self {
            Self::FixedPair { colors, .. } => colors[slot] = color,
            Self::Variable { colors, .. } => colors[slot] = color,
        }
        Ok(())
    }

    /// Appends a slot to a variable-length category.
    pub fn push_color(&mut self, color: RgbColor) -> Result<(), ColorError> {
        match self {
            Self::Variable { colors, .. } => {
                colors.push(color);
                Ok(())
            }
            Self::FixedPair { name, .. } => Err(ColorError::FixedArity(name.clone())),
        }
    }
}

//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSV conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::models::{ColorError, HexColor, HsvColor};

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap_or_else(|e| unreachable!("static hex pattern: {e}"))
});

/// Returns true if `hex` is a full `#rrggbb` color (case-insensitive).
pub(crate) fn is_hex_color(hex: &str) -> bool {
    HEX_PATTERN.is_match(hex)
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#rrggbb) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from untrusted numeric channel input.
    ///
    /// Each channel is rounded and clamped to 0-255. `NaN` and infinities
    /// are treated as 0, so slider or text input can never fail here.
    ///
    /// ```
    /// use spritedye::models::RgbColor;
    ///
    /// let color = RgbColor::from_unclamped(-1.0, -57.0, 4000.0);
    /// assert_eq!(color.to_hex(), "#0000ff");
    /// ```
    #[must_use]
    pub fn from_unclamped(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Parses an `RgbColor` from a `#rrggbb` hex string.
    ///
    /// Matching is case-insensitive. Shorthand (`#fff`), a missing `#`,
    /// surrounding whitespace and non-hex digits are all rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use spritedye::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF00ff").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 255));
    /// assert!(RgbColor::from_hex("#aaa").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        if !is_hex_color(hex) {
            return Err(ColorError::InvalidFormat(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorError::InvalidFormat(hex.to_string()))
        };

        Ok(Self::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
    }

    /// Converts the color to a lowercase hex string in the format "#rrggbb".
    ///
    /// # Examples
    ///
    /// ```
    /// use spritedye::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Converts the color into a validated [`HexColor`].
    #[must_use]
    pub fn to_hex_color(&self) -> HexColor {
        HexColor::from(*self)
    }

    /// Converts the RGB color to HSV with integral components.
    ///
    /// Hue is whole degrees in 0-359, saturation and value are whole
    /// percentages. The conversion is lossy: neighbouring RGB triples can
    /// collapse onto the same HSV triple.
    ///
    /// ```
    /// use spritedye::models::{HsvColor, RgbColor};
    ///
    /// let hsv = RgbColor::new(255, 128, 0).to_hsv();
    /// assert_eq!(hsv, HsvColor::new(30.0, 100.0, 100.0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSV color model uses single-char names
    pub fn to_hsv(&self) -> HsvColor {
        let r = f64::from(self.red);
        let g = f64::from(self.green);
        let b = f64::from(self.blue);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let val = (max / 255.0 * 100.0).round();
        let sat = if max == 0.0 {
            0.0
        } else {
            (delta / max * 100.0).round()
        };

        let hue = if delta == 0.0 {
            0.0 // Grayscale, hue is undefined
        } else {
            let sector = if max == r {
                ((g - b) / delta).rem_euclid(6.0)
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            // 359.6 rounds up to 360, which is the same angle as 0
            (sector * 60.0).round() % 360.0
        };

        HsvColor::new(hue, sat, val)
    }

    /// Creates an `RgbColor` from an HSV color.
    #[must_use]
    pub fn from_hsv(hsv: HsvColor) -> Self {
        hsv.to_rgb()
    }
}

/// Rounds and clamps one untrusted channel value.
fn clamp_channel(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

impl std::str::FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

//! Validated `#rrggbb` color strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::rgb::is_hex_color;
use crate::models::{ColorError, HsvColor, RgbColor};

/// A `#rrggbb` hex color, always stored in canonical lowercase.
///
/// Input is accepted in any case; shorthand like `#fff` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validates and canonicalizes a hex color string.
    ///
    /// ```
    /// use spritedye::models::HexColor;
    ///
    /// let hex = HexColor::parse("#AbCdEf").unwrap();
    /// assert_eq!(hex.as_str(), "#abcdef");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        if !is_hex_color(input) {
            return Err(ColorError::InvalidFormat(input.to_string()));
        }
        Ok(Self(input.to_ascii_lowercase()))
    }

    /// The canonical lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes into RGB channels.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        // Already validated, so each pair is two hex digits
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        RgbColor::new(channel(1), channel(3), channel(5))
    }

    /// Decodes into HSV.
    #[must_use]
    pub fn to_hsv(&self) -> HsvColor {
        self.to_rgb().to_hsv()
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self(rgb.to_hex())
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonicalizes() {
        assert_eq!(HexColor::parse("#FF00FF").unwrap().as_str(), "#ff00ff");
        assert_eq!(
            HexColor::parse("#FF00FF").unwrap(),
            HexColor::parse("#ff00ff").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_shorthand() {
        assert!(HexColor::parse("#fff").is_err());
        assert!(HexColor::parse("fff000").is_err());
    }

    #[test]
    fn test_to_rgb() {
        let hex = HexColor::parse("#7F0080").unwrap();
        assert_eq!(hex.to_rgb(), RgbColor::new(127, 0, 128));
        assert_eq!(HexColor::from(RgbColor::new(127, 0, 128)), hex);
    }

    #[test]
    fn test_serde_validates() {
        let hex: HexColor = serde_json::from_str("\"#ABCDEF\"").unwrap();
        assert_eq!(hex.as_str(), "#abcdef");
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#abcdef\"");
        assert!(serde_json::from_str::<HexColor>("\"#abc\"").is_err());
    }
}

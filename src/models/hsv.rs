//! HSV (a.k.a. HSB) color values and conversion back to RGB.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::hue::wrap_hue;
use crate::models::{ColorError, RgbColor};

/// Color in the HSV/HSB model.
///
/// - `hue`: degrees, 0-360 (exclusive)
/// - `sat`: saturation percentage, 0-100
/// - `val`: value/brightness percentage, 0-100
///
/// Components are floats so that fractional slider positions survive;
/// [`RgbColor::to_hsv`] always yields whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HsvColor {
    /// Hue in degrees
    pub hue: f64,
    /// Saturation percentage
    pub sat: f64,
    /// Value (brightness) percentage
    pub val: f64,
}

impl HsvColor {
    /// Creates a new `HsvColor` without normalizing the components.
    #[must_use]
    pub const fn new(hue: f64, sat: f64, val: f64) -> Self {
        Self { hue, sat, val }
    }

    /// Converts to RGB using the chroma/sector decomposition.
    ///
    /// Out-of-range input is recovered rather than rejected. Hue is wrapped
    /// into 0-360 and saturation/value are clamped to 0-100; a non-finite
    /// component counts as 0. Zero saturation gives a gray from `val` alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use spritedye::models::{HsvColor, RgbColor};
    ///
    /// assert_eq!(HsvColor::new(120.0, 100.0, 100.0).to_rgb(), RgbColor::new(0, 255, 0));
    /// assert_eq!(HsvColor::new(480.0, 100.0, 100.0).to_rgb(), RgbColor::new(0, 255, 0));
    /// assert_eq!(HsvColor::new(77.0, 0.0, 50.0).to_rgb(), RgbColor::new(128, 128, 128));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSV color model uses single-char names
    pub fn to_rgb(&self) -> RgbColor {
        let h = wrap_hue(finite_or_zero(self.hue));
        let s = finite_or_zero(self.sat).clamp(0.0, 100.0) / 100.0;
        let v = finite_or_zero(self.val).clamp(0.0, 100.0) / 100.0;

        let c = v * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h_prime as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |component: f64| ((component + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        RgbColor::new(channel(r), channel(g), channel(b))
    }

    /// Converts to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    /// Parses a `#rrggbb` string and converts it to HSV.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Ok(RgbColor::from_hex(hex)?.to_hsv())
    }

    /// Returns a copy with the hue rotated by `degrees` and wrapped.
    #[must_use]
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        Self {
            hue: wrap_hue(self.hue + degrees),
            ..*self
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl From<RgbColor> for HsvColor {
    fn from(rgb: RgbColor) -> Self {
        rgb.to_hsv()
    }
}

impl From<HsvColor> for RgbColor {
    fn from(hsv: HsvColor) -> Self {
        hsv.to_rgb()
    }
}

impl fmt::Display for HsvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.hue, self.sat, self.val)
    }
}

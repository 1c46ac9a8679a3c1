//! Hue arithmetic and hue-wheel geometry.
//!
//! Screen coordinates are used throughout: x grows to the right and y grows
//! downwards, so angles increase clockwise with 0° pointing right.

use serde::{Deserialize, Serialize};

/// Degrees in a full turn of the hue wheel.
pub const FULL_TURN: f64 = 360.0;

/// Maps any degree value into `[0, 360)`.
///
/// Fractions are preserved and negative input wraps around. `NaN` passes
/// straight through.
///
/// ```
/// use spritedye::models::wrap_hue;
///
/// assert_eq!(wrap_hue(-90.0), 270.0);
/// assert_eq!(wrap_hue(725.5), 5.5);
/// assert!(wrap_hue(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn wrap_hue(degrees: f64) -> f64 {
    // Two remainders instead of rem_euclid, which can return 360.0 for tiny negatives
    ((degrees % FULL_TURN) + FULL_TURN) % FULL_TURN
}

/// Angle in degrees of the offset `(dx, dy)` from a wheel center.
///
/// Returns 0 for a zero offset.
#[must_use]
pub fn hue_from_offset(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    wrap_hue(dy.atan2(dx).to_degrees())
}

/// Ring-shaped hue selector laid out in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueWheel {
    /// Center x coordinate
    pub center_x: f64,
    /// Center y coordinate
    pub center_y: f64,
    /// Radius of the hole in the middle of the ring
    pub inner_radius: f64,
    /// Outer edge of the ring
    pub outer_radius: f64,
}

impl HueWheel {
    /// Creates a wheel centered at `(center_x, center_y)`.
    ///
    /// The radii are swapped if given in the wrong order.
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, inner_radius: f64, outer_radius: f64) -> Self {
        let (inner_radius, outer_radius) = if inner_radius <= outer_radius {
            (inner_radius, outer_radius)
        } else {
            (outer_radius, inner_radius)
        };
        Self {
            center_x,
            center_y,
            inner_radius,
            outer_radius,
        }
    }

    /// Hue under the point `(x, y)`, or `None` if the point misses the ring.
    #[must_use]
    pub fn hue_at(&self, x: f64, y: f64) -> Option<f64> {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let distance = dx.hypot(dy);

        if distance < self.inner_radius || distance > self.outer_radius {
            return None;
        }

        Some(hue_from_offset(dx, dy))
    }

    /// Position of the selection handle for `hue`, on the middle of the ring.
    #[must_use]
    pub fn handle_position(&self, hue: f64) -> (f64, f64) {
        let radius = (self.inner_radius + self.outer_radius) / 2.0;
        let radians = wrap_hue(hue).to_radians();
        (
            radius.mul_add(radians.cos(), self.center_x),
            radius.mul_add(radians.sin(), self.center_y),
        )
    }
}

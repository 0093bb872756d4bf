//! This module maps between pointer positions on a circular color wheel and HSL values. The wheel
//! lays hue out around the circle and saturation along the radius, with lightness held fixed for
//! the whole 2D surface.
//!
//! Coordinates are screen coordinates: offsets are measured from the wheel's center, x grows to
//! the right and y grows *downwards*. Hue 0 sits at the top of the wheel and increases clockwise.

use bound::wrap_degrees;
use color::Color;
use hsl::{hsl_to_rgb, HslValue};

/// Space left between the wheel's rim and the edge of the canvas, in pixels.
pub const WHEEL_MARGIN: f64 = 10.0;

/// Settings for the wheel surface.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// The lightness, as a percentage, of every color on the wheel.
    pub lightness: f64,
}

impl Default for WheelConfig {
    fn default() -> WheelConfig {
        WheelConfig { lightness: 50.0 }
    }
}

impl WheelConfig {
    /// Converts a pointer offset from the wheel's center into an HSL value. Points outside the
    /// wheel give `None` rather than being pulled onto the rim, so dragging past the edge leaves the
    /// selection where it was. A non-positive radius has no inside at all.
    pub fn pointer_to_hsl(&self, dx: f64, dy: f64, radius: f64) -> Option<HslValue> {
        if !(radius > 0.0) {
            return None;
        }
        let distance = dx.hypot(dy);
        if !(distance <= radius) {
            return None;
        }
        let hue = if distance == 0.0 {
            0.0
        } else {
            angle_to_hue(dy.atan2(dx).to_degrees())
        };
        let saturation = (distance / radius).min(1.0) * 100.0;
        Some(HslValue::new(hue, saturation, self.lightness))
    }

    /// Like [`pointer_to_hsl`](#method.pointer_to_hsl), converted straight to a color.
    pub fn pointer_to_color(&self, dx: f64, dy: f64, radius: f64) -> Option<Color> {
        self.pointer_to_hsl(dx, dy, radius).map(hsl_to_rgb)
    }
}

/// Converts a pointer offset to an HSL value at the default lightness of 50%.
pub fn pointer_to_hsl(dx: f64, dy: f64, radius: f64) -> Option<HslValue> {
    WheelConfig::default().pointer_to_hsl(dx, dy, radius)
}

/// The inverse of [`pointer_to_hsl`]: where on the wheel, as an offset from the center, the
/// selection indicator for a color belongs. Lightness plays no part.
pub fn hsl_to_pointer(hsl: HslValue, radius: f64) -> (f64, f64) {
    let hsl = HslValue::new(hsl.h, hsl.s, hsl.l);
    let angle = (hsl.h - 90.0).to_radians();
    let distance = radius * hsl.s / 100.0;
    (distance * angle.cos(), distance * angle.sin())
}

/// The radius of a wheel drawn on a canvas of the given size, leaving [`WHEEL_MARGIN`] free. Never
/// negative.
pub fn wheel_radius(width: f64, height: f64) -> f64 {
    ((width / 2.0).min(height / 2.0) - WHEEL_MARGIN).max(0.0)
}

/// Turns a position on the canvas into an offset from the canvas center.
pub fn offset_from_center(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    (x - width / 2.0, y - height / 2.0)
}

/// Converts a pointer angle, in degrees from the positive x axis as `atan2` measures it, into a
/// hue: a quarter turn moves 0 to the top.
pub fn angle_to_hue(angle: f64) -> f64 {
    wrap_degrees(angle + 90.0)
}

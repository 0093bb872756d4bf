//! This file implements the HSL view of a [`Color`]: a simple cylindrical transformation of sRGB
//! where hue is an angle in degrees and saturation and lightness are percentages. HSL is nowhere
//! near perceptually uniform, but it is what color pickers and CSS speak, and it makes the
//! harmony rules (rotate the hue, keep everything else) trivial to state.
//!
//! The conversion is the hexagonal one: the RGB cube is tilted and projected onto a hexagon, the
//! "radius" of the projection is simply the largest channel minus the smallest one (the chroma),
//! and hue is the position along the hexagon's edge, stretched to 360 degrees. Gray has no hue;
//! chromakit reports 0 degrees for it.

use std::fmt;

use bound::{wrap_degrees, Bound};
use color::{Color, ColorError};
use coord::Coord;

/// A color in HSL form. Hue is in degrees, [0, 360); saturation and lightness are percentages,
/// [0, 100].
///
/// The fields are public for convenience, but the conversion functions renormalize whatever they
/// are given: hue wraps around the circle and saturation and lightness are clamped.
///
/// # Example
/// ```
/// # use chromakit::prelude::*;
/// let blue = Color::from_hex_code("#3B82F6").unwrap();
/// let hsl = HslValue::from(blue).rounded();
/// assert_eq!((hsl.h, hsl.s, hsl.l), (217., 91., 60.));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HslValue {
    /// The hue, as an angle in degrees.
    pub h: f64,
    /// The saturation, as a percentage.
    pub s: f64,
    /// The lightness, as a percentage.
    pub l: f64,
}

impl HslValue {
    /// Creates an HSL value, normalizing rather than rejecting out-of-range components: hue is
    /// wrapped into [0, 360) and saturation and lightness are clamped to [0, 100].
    pub fn new(h: f64, s: f64, l: f64) -> HslValue {
        let clamped = HslValue::clamp_coord(Coord { x: 0., y: s, z: l });
        HslValue {
            h: wrap_degrees(h),
            s: clamped.y,
            l: clamped.z,
        }
    }

    /// Creates an HSL value from direct user input. Hue still wraps, since any angle names a
    /// point on the wheel, but saturation and lightness must already be percentages.
    /// # Errors
    /// Returns `ColorError::OutOfRangeChannel` if saturation or lightness is outside [0, 100].
    pub fn try_new(h: f64, s: f64, l: f64) -> Result<HslValue, ColorError> {
        let h = wrap_degrees(h);
        match HslValue::out_of_bounds(Coord { x: h, y: s, z: l }) {
            Some((component, value)) => Err(ColorError::OutOfRangeChannel { component, value }),
            None => Ok(HslValue { h, s, l }),
        }
    }

    /// Returns a copy with the hue rotated by `degrees`, wrapping around the circle. Saturation and
    /// lightness are untouched.
    pub fn rotate(&self, degrees: f64) -> HslValue {
        HslValue::new(self.h + degrees, self.s, self.l)
    }

    /// Returns a copy with a different lightness, clamped to [0, 100].
    pub fn with_lightness(&self, l: f64) -> HslValue {
        HslValue::new(self.h, self.s, l)
    }

    /// Returns a copy with every component rounded to the nearest integer, the way HSL is shown to
    /// users. A hue that rounds up to 360 becomes 0.
    pub fn rounded(&self) -> HslValue {
        HslValue::new(self.h.round(), self.s.round(), self.l.round())
    }

    /// Formats the value as CSS functional notation with rounded components, such as
    /// `hsl(217, 91%, 60%)`.
    pub fn to_css(&self) -> String {
        let r = self.rounded();
        format!("hsl({}, {}%, {}%)", r.h, r.s, r.l)
    }
}

impl Bound for HslValue {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 100.), (0., 100.)]
    }
    fn component_names() -> [&'static str; 3] {
        ["hue", "saturation", "lightness"]
    }
}

impl fmt::Display for HslValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

/// Converts a color to HSL using the max/min channel method.
pub fn rgb_to_hsl(color: Color) -> HslValue {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let chroma = max_c - min_c;

    // which edge of the hexagon we're on depends on which channel is largest
    let hue = if chroma == 0.0 {
        0.0
    } else if max_c == r {
        ((g - b) / chroma) * 60.0
    } else if max_c == g {
        ((b - r) / chroma) * 60.0 + 120.0
    } else {
        ((r - g) / chroma) * 60.0 + 240.0
    };

    let lightness = (max_c + min_c) / 2.0;
    // at lightness 0 or 1 the chroma is necessarily 0: avoid the 0 / 0
    let saturation = if chroma == 0.0 {
        0.0
    } else {
        chroma / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    HslValue::new(hue, saturation * 100.0, lightness * 100.0)
}

/// Converts HSL back to a color using the chroma and hue-sector method. Channels are rounded to
/// the nearest integer and clamped to [0, 255].
pub fn hsl_to_rgb(hsl: HslValue) -> Color {
    let hsl = HslValue::new(hsl.h, hsl.s, hsl.l);
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = hsl.h / 60.0;
    // second-largest channel, measured from the smallest one
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r1, g1, b1) = if sector < 1.0 {
        (chroma, x, 0.0)
    } else if sector < 2.0 {
        (x, chroma, 0.0)
    } else if sector < 3.0 {
        (0.0, chroma, x)
    } else if sector < 4.0 {
        (0.0, x, chroma)
    } else if sector < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };
    let offset = l - chroma / 2.0;
    Color::from_f64(
        (r1 + offset) * 255.0,
        (g1 + offset) * 255.0,
        (b1 + offset) * 255.0,
    )
}

impl From<Color> for HslValue {
    fn from(color: Color) -> HslValue {
        rgb_to_hsl(color)
    }
}

impl From<HslValue> for Color {
    fn from(hsl: HslValue) -> Color {
        hsl_to_rgb(hsl)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_rgb_to_hsl_reference_color() {
        let hsl = rgb_to_hsl(Color::new(59, 130, 246));
        assert!((hsl.h - 217.2).abs() <= 0.1, "{}", hsl.h);
        assert!((hsl.s - 91.2).abs() <= 0.1, "{}", hsl.s);
        assert!((hsl.l - 59.8).abs() <= 0.1, "{}", hsl.l);
        assert_eq!(hsl.to_css(), "hsl(217, 91%, 60%)");
    }

    #[test]
    fn test_primaries() {
        let red = rgb_to_hsl(Color::new(255, 0, 0));
        assert!(approx_eq!(f64, red.h, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, red.s, 100.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, red.l, 50.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, rgb_to_hsl(Color::new(0, 255, 0)).h, 120.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, rgb_to_hsl(Color::new(0, 0, 255)).h, 240.0, epsilon = 1e-9));
        // red-max with blue above green lands just under 360, not below 0
        let rose = rgb_to_hsl(Color::new(255, 0, 128));
        assert!(rose.h > 300.0 && rose.h < 360.0);
    }

    #[test]
    fn test_gray_has_no_hue_or_saturation() {
        for level in &[0u8, 1, 119, 128, 254, 255] {
            let hsl = rgb_to_hsl(Color::gray(*level));
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert!(approx_eq!(f64, hsl.l, f64::from(*level) / 2.55, epsilon = 1e-9));
        }
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(HslValue::new(245.0, 50.0, 60.0)).to_hex(), "#6E66CC");
        assert_eq!(hsl_to_rgb(HslValue::new(0.0, 100.0, 50.0)), Color::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(HslValue::new(0.0, 0.0, 100.0)), Color::WHITE);
        assert_eq!(hsl_to_rgb(HslValue::new(123.0, 80.0, 0.0)), Color::BLACK);
    }

    #[test]
    fn test_sector_boundaries_stay_in_range() {
        let mut h = 0.0;
        while h <= 360.0 {
            let c = hsl_to_rgb(HslValue::new(h, 100.0, 50.0));
            // fully saturated mid-lightness colors always have one channel at each extreme
            let chans = c.channels();
            assert_eq!(*chans.iter().max().unwrap(), 255, "hue {}", h);
            assert_eq!(*chans.iter().min().unwrap(), 0, "hue {}", h);
            h += 60.0;
        }
        assert_eq!(hsl_to_rgb(HslValue::new(60.0, 100.0, 50.0)), Color::new(255, 255, 0));
        assert_eq!(hsl_to_rgb(HslValue::new(180.0, 100.0, 50.0)), Color::new(0, 255, 255));
        assert_eq!(hsl_to_rgb(HslValue::new(300.0, 100.0, 50.0)), Color::new(255, 0, 255));
    }

    #[test]
    fn test_round_trip_within_one() {
        let mut r = 0u32;
        while r <= 255 {
            let mut g = 0u32;
            while g <= 255 {
                let mut b = 0u32;
                while b <= 255 {
                    let c = Color::new(r as u8, g as u8, b as u8);
                    let back = hsl_to_rgb(rgb_to_hsl(c));
                    for (x, y) in c.channels().iter().zip(back.channels().iter()) {
                        assert!((i16::from(*x) - i16::from(*y)).abs() <= 1, "{} -> {}", c, back);
                    }
                    b += 15;
                }
                g += 15;
            }
            r += 15;
        }
    }

    #[test]
    fn test_normalization() {
        let hsl = HslValue::new(-30.0, 120.0, -4.0);
        assert_eq!(hsl, HslValue { h: 330.0, s: 100.0, l: 0.0 });
        assert_eq!(HslValue::new(720.0, 50.0, 50.0).h, 0.0);
        assert_eq!(HslValue::new(359.6, 50.0, 50.0).rounded().h, 0.0);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(HslValue::try_new(400.0, 20.0, 30.0), Ok(HslValue { h: 40.0, s: 20.0, l: 30.0 }));
        assert_eq!(HslValue::try_new(10.0, 101.0, 30.0),
                   Err(ColorError::OutOfRangeChannel { component: "saturation", value: 101.0 }));
        assert_eq!(HslValue::try_new(10.0, 50.0, -0.5),
                   Err(ColorError::OutOfRangeChannel { component: "lightness", value: -0.5 }));
    }

    #[test]
    fn test_rotate_preserves_saturation_and_lightness() {
        let base = HslValue::new(300.0, 42.0, 17.0);
        let rotated = base.rotate(90.0);
        assert_eq!(rotated, HslValue { h: 30.0, s: 42.0, l: 17.0 });
        assert_eq!(base.with_lightness(140.0).l, 100.0);
    }
}

//! This file defines [`Color`], the one canonical color value in chromakit, along with the hex
//! half of the conversion layer and the error type shared by every fallible entry point. A
//! `Color` holds exactly three 8-bit channels: hex strings and HSL values are *views* computed
//! from it on demand, never stored next to it, so the different representations can't drift
//! apart.
//!
//! Malformed input is rejected here, at the boundary. Everything downstream (contrast, harmonies,
//! gradients) takes a `Color` and can assume it is well-formed.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use bound::Bound;
use coord::Coord;

lazy_static! {
    // six hex digits, optionally preceded by a single '#'
    static ref HEX_CODE: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// An error raised when turning user input into a color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The string was not six hex digits with an optional leading `#`. Holds the offending input.
    InvalidColorFormat(String),
    /// A component supplied directly was outside its legal range: [0, 255] for RGB channels,
    /// [0, 100] for HSL saturation and lightness.
    OutOfRangeChannel {
        /// Which component was out of range, e.g. `"g"` or `"saturation"`.
        component: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::InvalidColorFormat(ref input) => {
                write!(f, "invalid color format {:?}: expected six hex digits", input)
            }
            ColorError::OutOfRangeChannel { component, value } => {
                write!(f, "color component {} out of range: {}", component, value)
            }
        }
    }
}

impl Error for ColorError {}

/// A color with 8-bit red, green, and blue channels in the sRGB space.
///
/// # Example
/// ```
/// # use chromakit::prelude::*;
/// let blue = Color::from_hex_code("#3b82f6").unwrap();
/// assert_eq!((blue.r, blue.g, blue.b), (59, 130, 246));
/// assert_eq!(blue.to_string(), "#3B82F6");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    /// Creates a color from three channels that are already known to be in range.
    pub fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Creates a gray with every channel set to `level`.
    pub fn gray(level: u8) -> Color {
        Color::new(level, level, level)
    }

    /// Creates a color from channel values supplied directly by a user or read back from storage.
    /// Unlike [`Color::from_f64`], which is meant for derived values, this refuses to guess.
    /// # Errors
    /// Returns `ColorError::OutOfRangeChannel` naming the first channel outside [0, 255].
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Color, ColorError> {
        let point = Coord {
            x: r as f64,
            y: g as f64,
            z: b as f64,
        };
        match Color::out_of_bounds(point) {
            Some((component, value)) => Err(ColorError::OutOfRangeChannel { component, value }),
            None => Ok(Color::new(r as u8, g as u8, b as u8)),
        }
    }

    /// Creates a color from unrounded channel values, as produced by conversions and blends. Each
    /// channel is clamped to [0, 255] and rounded to the nearest integer.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Color {
        Color::from(Coord { x: r, y: g, z: b })
    }

    /// Parses a hex code of exactly six hex digits, with or without a leading `#`, in any case.
    /// Three-digit shorthand and alpha digits are not accepted.
    /// # Errors
    /// Returns `ColorError::InvalidColorFormat` on anything else; a bad string never silently
    /// becomes black.
    pub fn from_hex_code(hex: &str) -> Result<Color, ColorError> {
        let caps = match HEX_CODE.captures(hex) {
            Some(caps) => caps,
            None => return Err(ColorError::InvalidColorFormat(hex.to_string())),
        };
        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&caps[i + 1], 16)
                .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))?;
        }
        Ok(Color::new(channels[0], channels[1], channels[2]))
    }

    /// Gets the `#`-prefixed, uppercase, zero-padded hex code of this color.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// The three channels as an array, in R, G, B order.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether every channel is equal, i.e., the color has no hue.
    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

/// Parses a hex code into a [`Color`]. See [`Color::from_hex_code`].
pub fn hex_to_rgb(hex: &str) -> Result<Color, ColorError> {
    Color::from_hex_code(hex)
}

/// Formats a [`Color`] as an uppercase `#RRGGBB` code. See [`Color::to_hex`].
pub fn rgb_to_hex(color: Color) -> String {
    color.to_hex()
}

/// Normalizes a hex code to the canonical `#RRGGBB` form.
/// # Errors
/// Returns `ColorError::InvalidColorFormat` if the input isn't a valid six-digit code.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    Color::from_hex_code(hex).map(|c| c.to_hex())
}

impl Bound for Color {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 255.), (0., 255.), (0., 255.)]
    }
    fn component_names() -> [&'static str; 3] {
        ["r", "g", "b"]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Color, ColorError> {
        Color::from_hex_code(s.trim())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(rgb: (u8, u8, u8)) -> Color {
        Color::new(rgb.0, rgb.1, rgb.2)
    }
}

impl From<Coord> for Color {
    fn from(c: Coord) -> Color {
        let clamped = Color::clamp_coord(c);
        Color::new(
            clamped.x.round() as u8,
            clamped.y.round() as u8,
            clamped.z.round() as u8,
        )
    }
}

impl Into<Coord> for Color {
    fn into(self) -> Coord {
        Coord {
            x: f64::from(self.r),
            y: f64::from(self.g),
            z: f64::from(self.b),
        }
    }
}

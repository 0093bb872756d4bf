//! This module composes multi-stop CSS gradients. Stops may arrive in any order (they're usually
//! edited one at a time in a UI); they are stably sorted by position before anything is rendered
//! or sampled, so stops that share a position stay in the order they were given and form a hard
//! edge.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer};

use bound::wrap_degrees;
use color::{Color, ColorError};
use colormap::ColorMap;
use coord::Coord;

/// How far along the axis a new stop is placed after the last one.
const NEW_STOP_SPACING: f64 = 20.0;

/// An error in assembling a gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    /// A gradient needs at least two stops. Holds how many were given.
    TooFewStops(usize),
    /// The gradient type wasn't one of `linear`, `radial` or `conic`. Holds the input.
    UnknownKind(String),
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GradientError::TooFewStops(n) => {
                write!(f, "a gradient needs at least 2 stops, got {}", n)
            }
            GradientError::UnknownKind(ref kind) => write!(f, "unknown gradient type {:?}", kind),
        }
    }
}

impl Error for GradientError {}

/// A color anchored at a position along the gradient axis, as a percentage. Deserialized stops
/// go through [`GradientStop::new`], so their positions are clamped the same way.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// The color at this stop.
    pub color: Color,
    /// The position, in [0, 100].
    pub position: f64,
}

impl GradientStop {
    /// Creates a stop, clamping the position to [0, 100]. A NaN position becomes 0.
    pub fn new(color: Color, position: f64) -> GradientStop {
        let position = if position.is_nan() {
            0.0
        } else {
            position.max(0.0).min(100.0)
        };
        GradientStop { color, position }
    }

    /// Creates a stop from a hex code.
    /// # Errors
    /// Returns `ColorError::InvalidColorFormat` if the hex code doesn't parse.
    pub fn from_hex(hex: &str, position: f64) -> Result<GradientStop, ColorError> {
        Ok(GradientStop::new(Color::from_hex_code(hex)?, position))
    }
}

// the stored shape of a stop, before clamping
#[derive(Deserialize)]
struct RawStop {
    color: Color,
    position: f64,
}

impl<'de> Deserialize<'de> for GradientStop {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<GradientStop, D::Error> {
        let raw = RawStop::deserialize(deserializer)?;
        Ok(GradientStop::new(raw.color, raw.position))
    }
}

/// The CSS gradient functions chromakit can render.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientKind {
    /// `linear-gradient`, along an angle.
    Linear,
    /// `radial-gradient`, from the center outwards in a circle. Ignores the angle.
    Radial,
    /// `conic-gradient`, around the center starting at an angle.
    Conic,
}

impl GradientKind {
    /// The CSS function name without the `-gradient` suffix.
    pub fn name(&self) -> &'static str {
        match *self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }
}

impl FromStr for GradientKind {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<GradientKind, GradientError> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(GradientKind::Linear),
            "radial" => Ok(GradientKind::Radial),
            "conic" => Ok(GradientKind::Conic),
            _ => Err(GradientError::UnknownKind(s.to_string())),
        }
    }
}

/// Sorts stops ascending by position. The sort is stable and nothing is deduplicated, so
/// normalizing twice changes nothing. A NaN position, which only a stop built field by field can
/// have, sorts after every number.
pub fn normalize(stops: &[GradientStop]) -> Vec<GradientStop> {
    let mut sorted = stops.to_vec();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    sorted
}

/// Renders stops as a CSS gradient function, sorting them first. The angle is wrapped into
/// [0, 360) and is ignored for radial gradients.
///
/// # Example
/// ```
/// # use chromakit::prelude::*;
/// # use chromakit::gradient::{to_css, GradientKind, GradientStop};
/// let stops = vec![
///     GradientStop::new(Color::WHITE, 100.),
///     GradientStop::new(Color::BLACK, 0.),
/// ];
/// assert_eq!(to_css(&stops, GradientKind::Linear, 90.),
///            "linear-gradient(90deg, #000000 0%, #FFFFFF 100%)");
/// ```
pub fn to_css(stops: &[GradientStop], kind: GradientKind, angle: f64) -> String {
    let direction = match kind {
        GradientKind::Radial => "circle".to_string(),
        GradientKind::Linear | GradientKind::Conic => format!("{}deg", wrap_degrees(angle)),
    };
    let stop_list: Vec<String> = normalize(stops)
        .iter()
        .map(|s| format!("{} {}%", s.color, s.position))
        .collect();
    format!("{}-gradient({}, {})", kind.name(), direction, stop_list.join(", "))
}

/// Samples the gradient at a position by linear RGB interpolation between the two stops that
/// bound it. Positions outside [0, 100] clamp to the nearest end. Returns `None` when there are no
/// stops at all.
///
/// Where two stops share a position the later one wins at exactly that position, which is how a
/// hard edge renders.
pub fn interpolate_at(stops: &[GradientStop], position: f64) -> Option<Color> {
    let sorted = normalize(stops);
    let first = *sorted.first()?;
    let last = *sorted.last()?;
    let position = if position.is_nan() {
        0.0
    } else {
        position.max(0.0).min(100.0)
    };
    if position < first.position {
        return Some(first.color);
    }
    if position >= last.position {
        return Some(last.color);
    }
    // first segment ending strictly past the position: it starts at or before the position, so
    // it always has a nonzero width
    let i = sorted.windows(2).position(|w| w[1].position > position)?;
    let (start, end) = (sorted[i], sorted[i + 1]);
    let t = (position - start.position) / (end.position - start.position);
    let a: Coord = start.color.into();
    let b: Coord = end.color.into();
    Some(Color::from(a.lerp(&b, t)))
}

/// Where to place a newly added stop: 20 past the last stop in the list (in editing order, not
/// sorted order), capped at 100. An empty list behaves as if the last stop were at 0.
pub fn next_stop_position(stops: &[GradientStop]) -> f64 {
    let last = stops.last().map(|s| s.position).unwrap_or(0.0);
    (last + NEW_STOP_SPACING).min(100.0)
}

/// A complete gradient: at least two stops, kept sorted, plus the kind and angle to render with.
/// Deserializing checks the stops and wraps the angle exactly as [`Gradient::new`] does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    stops: Vec<GradientStop>,
    /// Which CSS gradient function to render.
    pub kind: GradientKind,
    /// The angle in degrees, always in [0, 360).
    angle: f64,
}

impl Gradient {
    /// Creates a gradient, sorting the stops and wrapping the angle.
    /// # Errors
    /// Returns `GradientError::TooFewStops` if fewer than two stops are given.
    pub fn new(stops: &[GradientStop], kind: GradientKind, angle: f64) -> Result<Gradient, GradientError> {
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops(stops.len()));
        }
        Ok(Gradient {
            stops: normalize(stops),
            kind,
            angle: wrap_degrees(angle),
        })
    }

    /// The stops, sorted by position.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// The angle, in [0, 360).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Renders the gradient as a CSS function.
    pub fn to_css(&self) -> String {
        to_css(&self.stops, self.kind, self.angle)
    }

    /// Samples the gradient at a position in [0, 100].
    pub fn color_at(&self, position: f64) -> Color {
        // None only for an empty stop list, which new() and deserialization both reject
        interpolate_at(&self.stops, position).unwrap_or(Color::BLACK)
    }
}

#[derive(Deserialize)]
struct RawGradient {
    stops: Vec<GradientStop>,
    kind: GradientKind,
    angle: f64,
}

impl<'de> Deserialize<'de> for Gradient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Gradient, D::Error> {
        let raw = RawGradient::deserialize(deserializer)?;
        Gradient::new(&raw.stops, raw.kind, raw.angle).map_err(de::Error::custom)
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl ColorMap for Gradient {
    /// Maps [0, 1] onto the gradient's [0, 100] axis.
    fn transform_single(&self, t: f64) -> Color {
        self.color_at(t * 100.0)
    }
}

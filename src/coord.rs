//! This module contains a struct, [`Coord`](coord::Coord), that models a point in 3D space with
//! floating-point axes. Colors are stored with integer channels, but every blend between two
//! colors (gradient sampling, mostly) happens on the unrounded values: a `Coord` holds those
//! intermediate values so rounding only happens once, when the result is turned back into a
//! [`Color`](color::Color).

use std::ops::{Add, Mul, Sub};
use num;
use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can multiply a [`Coord`] to scale it.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. The axes are called `x`, `y`, and `z`; a color maps its red, green, and
/// blue channels onto them in that order.
///
/// # Examples
/// ```
/// # use chromakit::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication only: there's no single obvious product of two points
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        // every Scalar we accept is a primitive number, which always casts to f64
        let r: f64 = num::cast(rhs).unwrap_or(0.0);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl Coord {
    /// Linear interpolation from `self` towards `other`: a `t` of 0 gives `self`, a `t` of 1 gives
    /// `other`. Values of `t` outside [0, 1] extrapolate, so callers that need a bounded result
    /// should clamp first.
    /// # Example
    /// ```
    /// # use chromakit::coord::Coord;
    /// let start = Coord{x: 0., y: 100., z: 50.};
    /// let end = Coord{x: 200., y: 0., z: 50.};
    /// let quarter = start.lerp(&end, 0.25);
    /// assert!((quarter.x - 50.).abs() <= 1e-10);
    /// assert!((quarter.y - 75.).abs() <= 1e-10);
    /// assert!((quarter.z - 50.).abs() <= 1e-10);
    /// ```
    pub fn lerp(&self, other: &Coord, t: f64) -> Coord {
        *self + (*other - *self) * t
    }

    /// The midpoint between two 3D points.
    pub fn midpoint(&self, other: &Coord) -> Coord {
        self.lerp(other, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Coord{x: 59., y: 130., z: 246.};
        let b = Coord{x: 255., y: 255., z: 255.};
        assert_eq!(a.lerp(&b, 0.), a);
        assert_eq!(a.lerp(&b, 1.), b);
    }

    #[test]
    fn test_midpoint() {
        let a = Coord{x: 0., y: 0., z: 255.};
        let b = Coord{x: 255., y: 0., z: 1.};
        assert_eq!(a.midpoint(&b), Coord{x: 127.5, y: 0., z: 128.});
    }

    #[test]
    fn test_scalar_mul_integer_and_float() {
        let a = Coord{x: 1., y: 2., z: 3.};
        assert_eq!(a * 3u8, Coord{x: 3., y: 6., z: 9.});
        assert_eq!(a * 0.5, Coord{x: 0.5, y: 1., z: 1.5});
    }
}

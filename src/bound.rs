//! This module describes the Bound trait, which describes the legal range of each component of a
//! color representation. RGB channels live in [0, 255]; HSL saturation and lightness live in
//! [0, 100]. Hue is the odd one out: it is an angle, so instead of clamping it is wrapped around
//! the circle with [`wrap_degrees`].

use coord::Coord;

/// Describes a color representation whose three components have fixed bounds. Derived values
/// (the output of a blend or a conversion) are brought back into range with `clamp_coord`;
/// direct input is checked with `out_of_bounds` so it can be rejected instead.
pub trait Bound {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component, in the order that they appear in the Coord representation.
    fn bounds() -> [(f64, f64); 3];

    /// The names of each component, in Coord order. Used in error messages.
    fn component_names() -> [&'static str; 3];

    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds. NaN components become the lower bound.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let comps = [point.x, point.y, point.z];
        let mut clamped = [0.; 3];
        for i in 0..3 {
            let (min, max) = ranges[i];
            clamped[i] = if comps[i].is_nan() {
                min
            } else {
                comps[i].max(min).min(max)
            };
        }
        Coord {
            x: clamped[0],
            y: clamped[1],
            z: clamped[2],
        }
    }

    /// Returns the name and value of the first component that falls outside its bounds, or `None`
    /// if the point is entirely in range.
    fn out_of_bounds(point: Coord) -> Option<(&'static str, f64)> {
        let ranges = Self::bounds();
        let names = Self::component_names();
        let comps = [point.x, point.y, point.z];
        (0..3)
            .find(|&i| comps[i].is_nan() || comps[i] < ranges[i].0 || comps[i] > ranges[i].1)
            .map(|i| (names[i], comps[i]))
    }
}

/// Wraps an angle in degrees into [0, 360). Negative angles and angles of a full turn or more
/// come back around the circle, so -30 maps to 330 and 360 maps to 0. Non-finite input maps to 0.
pub fn wrap_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // -1e-17 % 360 + 360 rounds to exactly 360.0, and -720 % 360 is -0.0
    if wrapped >= 360.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Percentages;

    impl Bound for Percentages {
        fn bounds() -> [(f64, f64); 3] {
            [(0., 100.), (0., 100.), (0., 100.)]
        }
        fn component_names() -> [&'static str; 3] {
            ["a", "b", "c"]
        }
    }

    #[test]
    fn test_clamp_coord() {
        let point = Coord{x: -5., y: 50., z: 140.};
        assert_eq!(Percentages::clamp_coord(point), Coord{x: 0., y: 50., z: 100.});
        let nan = Coord{x: ::std::f64::NAN, y: 1., z: 2.};
        assert_eq!(Percentages::clamp_coord(nan).x, 0.);
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(Percentages::out_of_bounds(Coord{x: 0., y: 100., z: 50.}), None);
        assert_eq!(Percentages::out_of_bounds(Coord{x: 0., y: 100.5, z: -1.}), Some(("b", 100.5)));
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.), 0.);
        assert_eq!(wrap_degrees(360.), 0.);
        assert_eq!(wrap_degrees(397.), 37.);
        assert_eq!(wrap_degrees(-30.), 330.);
        assert_eq!(wrap_degrees(-720.), 0.);
        assert!(wrap_degrees(-360.).is_sign_positive());
        assert_eq!(wrap_degrees(::std::f64::INFINITY), 0.);
        let tiny = wrap_degrees(-1e-17);
        assert!(tiny >= 0. && tiny < 360.);
    }
}

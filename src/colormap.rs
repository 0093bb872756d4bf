//! This module defines a colormap: a continuous mapping of the numbers between 0 and 1 to colors.
//! [`Gradient`](../gradient/struct.Gradient.html) is the colormap chromakit cares about, but the
//! trait keeps sampling code independent of where the colors come from.

use color::Color;

/// A continuous mapping of the numbers between 0 and 1 to colors.
pub trait ColorMap {
    /// Maps a given number between 0 and 1 to a color. Out-of-range input is clamped; this should
    /// never fail or panic.
    fn transform_single(&self, t: f64) -> Color;

    /// Maps a collection of numbers between 0 and 1 to colors, in order.
    fn transform<U: IntoIterator<Item = f64>>(&self, inputs: U) -> Vec<Color> {
        inputs.into_iter().map(|x| self.transform_single(x)).collect()
    }

    /// Samples `n` evenly spaced colors, including both ends. Zero samples gives an empty list and
    /// a single sample gives the start of the map.
    fn sample(&self, n: usize) -> Vec<Color> {
        match n {
            0 => vec![],
            1 => vec![self.transform_single(0.0)],
            _ => self.transform((0..n).map(|i| i as f64 / (n - 1) as f64)),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    // a map whose red channel is the input, to check the provided methods
    struct RedRamp;

    impl ColorMap for RedRamp {
        fn transform_single(&self, t: f64) -> Color {
            Color::from_f64(t.max(0.).min(1.) * 255., 0., 0.)
        }
    }

    #[test]
    fn test_transform() {
        let reds: Vec<u8> = RedRamp.transform(vec![-1., 0., 0.2, 1., 3.]).iter().map(|c| c.r).collect();
        assert_eq!(reds, vec![0, 0, 51, 255, 255]);
    }

    #[test]
    fn test_sample() {
        assert!(RedRamp.sample(0).is_empty());
        assert_eq!(RedRamp.sample(1), vec![Color::BLACK]);
        let reds: Vec<u8> = RedRamp.sample(6).iter().map(|c| c.r).collect();
        assert_eq!(reds, vec![0, 51, 102, 153, 204, 255]);
    }
}

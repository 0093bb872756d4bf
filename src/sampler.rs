//! This module reads colors out of images: picking the color under a single pixel, and finding the
//! most frequent colors in a whole picture. Pixel access goes through the [`ImageSampler`] trait,
//! so the same code runs against a decoded canvas buffer or a hand-built test image.
//!
//! Dominant-color extraction is the one operation in chromakit whose cost grows with its input. It
//! visits every `stride`-th pixel instead of all of them, and it holds no state between calls, so
//! it can be moved to a worker thread as is.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use color::Color;

/// An error in wrapping a raw pixel buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SamplerError {
    /// The buffer holds fewer than `width * height * 4` bytes.
    BufferTooSmall {
        /// The number of bytes the dimensions call for.
        expected: usize,
        /// The number of bytes actually given.
        actual: usize,
    },
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SamplerError::BufferTooSmall { expected, actual } => write!(
                f,
                "pixel buffer too small: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl Error for SamplerError {}

/// Read-only access to an image's pixels.
pub trait ImageSampler {
    /// The image's width and height, in pixels.
    fn dimensions(&self) -> (usize, usize);

    /// The `[r, g, b, a]` value of the pixel at column `x`, row `y`, or `None` if that's outside
    /// the image.
    fn read(&self, x: usize, y: usize) -> Option<[u8; 4]>;
}

/// An [`ImageSampler`] over a borrowed row-major RGBA buffer laid out `[r, g, b, a, r, g, b, a, ...]`,
/// the format canvas APIs hand out.
#[derive(Debug, Copy, Clone)]
pub struct RgbaBuffer<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> RgbaBuffer<'a> {
    /// Wraps a buffer. Extra trailing bytes are ignored.
    /// # Errors
    /// Returns `SamplerError::BufferTooSmall` if there aren't enough bytes for the dimensions.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<RgbaBuffer<'a>, SamplerError> {
        let expected = width.saturating_mul(height).saturating_mul(4);
        if data.len() < expected {
            return Err(SamplerError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbaBuffer {
            data,
            width,
            height,
        })
    }
}

impl<'a> ImageSampler for RgbaBuffer<'a> {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn read(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }
}

/// Settings for dominant-color extraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Visit every `stride`-th pixel, counting in row-major order across the whole image. A stride
    /// of 0 is treated as 1.
    pub stride: usize,
    /// Pixels with alpha below this are skipped as transparent.
    pub alpha_threshold: u8,
    /// The most colors to return.
    pub max_colors: usize,
}

impl Default for ExtractionConfig {
    fn default() -> ExtractionConfig {
        ExtractionConfig {
            stride: 8,
            alpha_threshold: 128,
            max_colors: 15,
        }
    }
}

/// Counts exact colors among the sampled opaque pixels, most frequent first. Colors with the same
/// count appear in the order they were first seen, so the result only depends on the pixels and
/// the stride.
pub fn color_histogram<S: ImageSampler>(sampler: &S, stride: usize, alpha_threshold: u8) -> Vec<(Color, usize)> {
    let (width, height) = sampler.dimensions();
    let mut counts: Vec<(Color, usize)> = Vec::new();
    let mut index: HashMap<Color, usize> = HashMap::new();
    if width == 0 {
        return counts;
    }
    // a sampler may report dimensions no buffer could back
    let pixels = width.saturating_mul(height);
    for pixel in (0..pixels).step_by(stride.max(1)) {
        let rgba = match sampler.read(pixel % width, pixel / width) {
            Some(rgba) => rgba,
            None => continue,
        };
        if rgba[3] < alpha_threshold {
            continue;
        }
        let color = Color::new(rgba[0], rgba[1], rgba[2]);
        let next = counts.len();
        let i = *index.entry(color).or_insert(next);
        if i == next {
            counts.push((color, 0));
        }
        counts[i].1 += 1;
    }
    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Finds the most frequent colors in an image, as hex codes, most frequent first.
pub fn dominant_colors<S: ImageSampler>(sampler: &S, config: &ExtractionConfig) -> Vec<String> {
    color_histogram(sampler, config.stride, config.alpha_threshold)
        .into_iter()
        .take(config.max_colors)
        .map(|(color, _)| color.to_hex())
        .collect()
}

/// Finds the most frequent colors in a raw RGBA buffer, with the default alpha threshold.
/// # Errors
/// Returns `SamplerError::BufferTooSmall` if the buffer doesn't cover `width * height` pixels.
pub fn extract_dominant_colors(
    pixels: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    max_colors: usize,
) -> Result<Vec<String>, SamplerError> {
    let buffer = RgbaBuffer::new(pixels, width, height)?;
    let config = ExtractionConfig {
        stride,
        max_colors,
        ..ExtractionConfig::default()
    };
    Ok(dominant_colors(&buffer, &config))
}

/// The color of the pixel at (`x`, `y`), ignoring alpha. `None` outside the image.
pub fn pick_color<S: ImageSampler>(sampler: &S, x: usize, y: usize) -> Option<Color> {
    sampler
        .read(x, y)
        .map(|rgba| Color::new(rgba[0], rgba[1], rgba[2]))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    // a synthetic image: every pixel is computed, nothing is stored
    struct Stripes {
        width: usize,
        height: usize,
    }

    impl ImageSampler for Stripes {
        fn dimensions(&self) -> (usize, usize) {
            (self.width, self.height)
        }
        fn read(&self, x: usize, _y: usize) -> Option<[u8; 4]> {
            // columns 0-1 red, column 2 green, column 3 transparent blue
            Some(match x % 4 {
                0 | 1 => [255, 0, 0, 255],
                2 => [0, 255, 0, 255],
                _ => [0, 0, 255, 0],
            })
        }
    }

    fn pixels(colors: &[[u8; 4]]) -> Vec<u8> {
        colors.iter().flat_map(|c| c.iter().cloned()).collect()
    }

    #[test]
    fn test_histogram_counts_and_skips_transparent() {
        let image = Stripes { width: 4, height: 5 };
        let hist = color_histogram(&image, 1, 128);
        assert_eq!(hist, vec![(Color::new(255, 0, 0), 10), (Color::new(0, 255, 0), 5)]);
    }

    #[test]
    fn test_stride_runs_across_rows() {
        // stride 3 over a 4-wide image visits pixels 0, 3, 6, 9, ... which lands on varying columns
        let image = Stripes { width: 4, height: 3 };
        let hist = color_histogram(&image, 3, 128);
        // visits x = 0, 3, 2, 1: red, transparent, green, red
        assert_eq!(hist, vec![(Color::new(255, 0, 0), 2), (Color::new(0, 255, 0), 1)]);
    }

    #[test]
    fn test_extract_from_buffer() {
        let data = pixels(&[
            [1, 2, 3, 255], [9, 9, 9, 255], [9, 9, 9, 255],
            [1, 2, 3, 255], [9, 9, 9, 255], [200, 0, 0, 127],
        ]);
        let found = extract_dominant_colors(&data, 3, 2, 1, 15).unwrap();
        assert_eq!(found, vec!["#090909", "#010203"]);
        assert_eq!(extract_dominant_colors(&data, 3, 2, 1, 1).unwrap(), vec!["#090909"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let data = pixels(&[[0, 0, 2, 255], [0, 0, 1, 255], [0, 0, 1, 255], [0, 0, 2, 255]]);
        let found = extract_dominant_colors(&data, 4, 1, 1, 15).unwrap();
        assert_eq!(found, vec!["#000002", "#000001"]);
        // same input, same output
        assert_eq!(extract_dominant_colors(&data, 4, 1, 1, 15).unwrap(), found);
    }

    #[test]
    fn test_alpha_threshold_is_inclusive() {
        let data = pixels(&[[5, 5, 5, 128], [6, 6, 6, 127]]);
        assert_eq!(extract_dominant_colors(&data, 2, 1, 1, 15).unwrap(), vec!["#050505"]);
    }

    #[test]
    fn test_buffer_too_small() {
        let data = vec![0u8; 15];
        assert_eq!(RgbaBuffer::new(&data, 2, 2).unwrap_err(),
                   SamplerError::BufferTooSmall { expected: 16, actual: 15 });
        assert!(extract_dominant_colors(&data, 2, 2, 8, 15).is_err());
    }

    #[test]
    fn test_empty_and_zero_stride() {
        assert!(extract_dominant_colors(&[], 0, 0, 8, 15).unwrap().is_empty());
        let data = pixels(&[[7, 7, 7, 255], [7, 7, 7, 255]]);
        let buffer = RgbaBuffer::new(&data, 2, 1).unwrap();
        assert_eq!(color_histogram(&buffer, 0, 128), vec![(Color::gray(7), 2)]);
    }

    #[test]
    fn test_pick_color() {
        let data = pixels(&[[1, 2, 3, 0], [4, 5, 6, 255], [7, 8, 9, 255], [10, 11, 12, 255]]);
        let buffer = RgbaBuffer::new(&data, 2, 2).unwrap();
        assert_eq!(pick_color(&buffer, 0, 0), Some(Color::new(1, 2, 3)));
        assert_eq!(pick_color(&buffer, 1, 1), Some(Color::new(10, 11, 12)));
        assert_eq!(pick_color(&buffer, 2, 0), None);
        assert_eq!(buffer.dimensions(), (2, 2));
    }

    #[test]
    fn test_huge_dimensions_do_not_overflow() {
        let image = Stripes { width: usize::max_value(), height: 2 };
        assert_eq!(color_histogram(&image, usize::max_value(), 128), vec![(Color::new(255, 0, 0), 1)]);
    }

    #[test]
    fn test_default_config() {
        let image = Stripes { width: 16, height: 16 };
        // stride 8 on a width divisible by 4 only ever sees column 0 or column 8 modulo 4
        assert_eq!(dominant_colors(&image, &ExtractionConfig::default()), vec!["#FF0000"]);
    }
}

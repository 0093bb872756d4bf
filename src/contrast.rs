//! This module computes WCAG 2.x relative luminance and contrast ratios, and classifies a ratio
//! against the AA and AAA pass thresholds. All of the constants involved live in
//! [`consts`](../consts/index.html).

use color::Color;
use consts::*;

/// Linearizes one sRGB channel, given in [0, 1], with the WCAG transfer function.
fn linearize(channel: f64) -> f64 {
    if channel <= SRGB_LINEAR_BREAKPOINT {
        channel / SRGB_LINEAR_SLOPE
    } else {
        ((channel + SRGB_GAMMA_OFFSET) / (1.0 + SRGB_GAMMA_OFFSET)).powf(SRGB_GAMMA_EXPONENT)
    }
}

/// Gets the relative luminance of a color: 0 for black, 1 for white.
pub fn relative_luminance(color: Color) -> f64 {
    let r = linearize(f64::from(color.r) / 255.0);
    let g = linearize(f64::from(color.g) / 255.0);
    let b = linearize(f64::from(color.b) / 255.0);
    LUMINANCE_WEIGHT_R * r + LUMINANCE_WEIGHT_G * g + LUMINANCE_WEIGHT_B * b
}

/// Gets the contrast ratio between two colors, from 1 (identical luminance) to 21 (black on
/// white). The order of the arguments doesn't matter.
///
/// # Example
/// ```
/// # use chromakit::prelude::*;
/// # use chromakit::contrast::contrast_ratio;
/// let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
/// assert!((ratio - 21.0).abs() <= 1e-6);
/// ```
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + CONTRAST_FLARE) / (darker + CONTRAST_FLARE)
}

/// A contrast ratio together with its pass/fail verdict at each WCAG level.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// The contrast ratio, in [1, 21].
    pub ratio: f64,
    /// Normal text at level AA: ratio >= 4.5.
    pub aa_normal: bool,
    /// Large text at level AA: ratio >= 3.
    pub aa_large: bool,
    /// Normal text at level AAA: ratio >= 7.
    pub aaa_normal: bool,
    /// Large text at level AAA: ratio >= 4.5.
    pub aaa_large: bool,
}

impl ContrastResult {
    /// Computes the ratio between two colors and classifies it.
    pub fn between(a: Color, b: Color) -> ContrastResult {
        classify(contrast_ratio(a, b))
    }

    /// Whether every one of the four checks passes.
    pub fn passes_all(&self) -> bool {
        self.aa_normal && self.aa_large && self.aaa_normal && self.aaa_large
    }

    /// The strictest level this ratio reaches.
    pub fn rating(&self) -> WcagRating {
        WcagRating::from_ratio(self.ratio)
    }
}

/// Classifies a contrast ratio against the fixed WCAG thresholds.
pub fn classify(ratio: f64) -> ContrastResult {
    ContrastResult {
        ratio,
        aa_normal: ratio >= WCAG_AA_NORMAL,
        aa_large: ratio >= WCAG_AA_LARGE,
        aaa_normal: ratio >= WCAG_AAA_NORMAL,
        aaa_large: ratio >= WCAG_AAA_LARGE,
    }
}

/// A single overall verdict for a ratio, strictest first. This is the grade shown next to a
/// ratio; `ContrastResult` has the individual checks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WcagRating {
    /// Below 3: fails everything.
    Fail,
    /// At least 3: good enough for large text at AA only.
    AaLarge,
    /// At least 4.5: normal text at AA, large text at AAA.
    Aa,
    /// At least 7: passes every check.
    Aaa,
}

impl WcagRating {
    /// Grades a ratio.
    pub fn from_ratio(ratio: f64) -> WcagRating {
        if ratio >= WCAG_AAA_NORMAL {
            WcagRating::Aaa
        } else if ratio >= WCAG_AA_NORMAL {
            WcagRating::Aa
        } else if ratio >= WCAG_AA_LARGE {
            WcagRating::AaLarge
        } else {
            WcagRating::Fail
        }
    }
}

/// Contrast of a color against pure white.
pub fn contrast_with_white(color: Color) -> f64 {
    contrast_ratio(color, Color::WHITE)
}

/// Contrast of a color against pure black.
pub fn contrast_with_black(color: Color) -> f64 {
    contrast_ratio(color, Color::BLACK)
}

/// Picks black or white text for a background, whichever contrasts more. This is the fallback
/// when no better suggestion exists; ties go to black.
pub fn readable_text_color(background: Color) -> Color {
    if contrast_with_black(background) >= contrast_with_white(background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Formats a ratio for display, with two decimal places: `4.5` becomes `"4.50"`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}", ratio)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    fn hex(code: &str) -> Color {
        Color::from_hex_code(code).unwrap()
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!(approx_eq!(f64, relative_luminance(Color::WHITE), 1.0, epsilon = 1e-12));
        // a channel value of 10 sits on the linear segment: 10 / 255 = 0.0392 <= 0.03928
        assert!(approx_eq!(f64, relative_luminance(Color::new(0, 0, 10)),
                           0.0722 * (10.0 / 255.0) / 12.92, epsilon = 1e-15));
    }

    #[test]
    fn test_black_white_is_21() {
        let ratio = contrast_ratio(hex("#000000"), hex("#FFFFFF"));
        assert!((ratio - 21.0).abs() <= 1e-6);
        let result = classify(ratio);
        assert!(result.aa_normal && result.aa_large && result.aaa_normal && result.aaa_large);
        assert!(result.passes_all());
        assert_eq!(result.rating(), WcagRating::Aaa);
    }

    #[test]
    fn test_similar_grays_fail() {
        let result = ContrastResult::between(hex("#777777"), hex("#888888"));
        assert!(result.ratio > 1.0 && result.ratio < 1.5, "{}", result.ratio);
        assert_eq!(format_ratio(result.ratio), "1.26");
        assert!(!result.aa_normal && !result.aa_large && !result.aaa_normal && !result.aaa_large);
        assert_eq!(result.rating(), WcagRating::Fail);
    }

    #[test]
    fn test_identical_colors() {
        for code in &["#000000", "#3B82F6", "#FFFFFF", "#777777"] {
            assert_eq!(contrast_ratio(hex(code), hex(code)), 1.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let colors = vec![hex("#3B82F6"), hex("#FF8C00"), hex("#123456"), Color::WHITE, Color::BLACK];
        for a in &colors {
            for b in &colors {
                assert_eq!(contrast_ratio(*a, *b), contrast_ratio(*b, *a));
            }
        }
    }

    #[test]
    fn test_classify_thresholds() {
        let just_large = classify(3.0);
        assert!(just_large.aa_large && !just_large.aa_normal && !just_large.aaa_large);
        let aa = classify(4.5);
        assert!(aa.aa_normal && aa.aa_large && aa.aaa_large && !aa.aaa_normal);
        let below = classify(2.999);
        assert!(!below.aa_large);
        assert!(classify(7.0).aaa_normal);
        assert!(!classify(6.99).aaa_normal);
    }

    #[test]
    fn test_classify_monotonic() {
        let mut ratio = 1.0;
        while ratio <= 21.0 {
            let r = classify(ratio);
            assert!(!r.aaa_normal || r.aa_normal);
            assert!(!r.aaa_large || r.aa_large);
            ratio += 0.05;
        }
    }

    #[test]
    fn test_ratings() {
        assert_eq!(WcagRating::from_ratio(1.0), WcagRating::Fail);
        assert_eq!(WcagRating::from_ratio(3.2), WcagRating::AaLarge);
        assert_eq!(WcagRating::from_ratio(5.0), WcagRating::Aa);
        assert_eq!(WcagRating::from_ratio(12.0), WcagRating::Aaa);
        assert!(WcagRating::Aaa > WcagRating::Aa);
    }

    #[test]
    fn test_readable_text_color() {
        assert_eq!(readable_text_color(Color::WHITE), Color::BLACK);
        assert_eq!(readable_text_color(hex("#FFEB3B")), Color::BLACK);
        assert_eq!(readable_text_color(hex("#0D47A1")), Color::WHITE);
        assert!(contrast_with_white(hex("#0D47A1")) > contrast_with_black(hex("#0D47A1")));
    }
}

//! This module searches for text colors that reach a target contrast ratio against a given
//! background. The search is a brute-force scan over a small, fixed candidate set (a grayscale
//! ramp plus a handful of saturated reference colors), so it is cheap and entirely deterministic.
//!
//! An empty result is a normal outcome, not an error: on mid-tone backgrounds nothing in the
//! candidate set may reach 7:1. Callers should fall back to
//! [`readable_text_color`](../contrast/fn.readable_text_color.html) in that case.

use color::{Color, ColorError};
use consts::WCAG_AAA_NORMAL;
use contrast::{contrast_ratio, format_ratio};

/// Parameters of the candidate set and of the result list. The defaults are a heuristic: none of
/// the numbers are derived from anything, so they are safe to tune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Distance between consecutive grays on the ramp. The ramp starts at 0 and stops at the last
    /// multiple of the step not above 255. A step of 0 is treated as 1.
    pub gray_step: u8,
    /// Extra, saturated candidates, tried after the grays.
    pub references: Vec<Color>,
    /// The contrast ratio a candidate must meet or exceed.
    pub target_ratio: f64,
    /// The most suggestions to return.
    pub limit: usize,
}

impl Default for SuggestionConfig {
    fn default() -> SuggestionConfig {
        SuggestionConfig {
            gray_step: 15,
            references: vec![
                Color::new(0, 0, 139),   // dark blue
                Color::new(139, 0, 0),   // dark red
                Color::new(0, 100, 0),   // dark green
                Color::new(75, 0, 130),  // indigo
                Color::new(255, 140, 0), // dark orange
                Color::new(0, 139, 139), // dark cyan
            ],
            target_ratio: WCAG_AAA_NORMAL,
            limit: 6,
        }
    }
}

impl SuggestionConfig {
    /// Every candidate, in scan order: the gray ramp from black upwards, then the references.
    pub fn candidates(&self) -> Vec<Color> {
        let step = self.gray_step.max(1) as usize;
        let mut candidates: Vec<Color> = (0..256usize)
            .step_by(step)
            .map(|level| Color::gray(level as u8))
            .collect();
        candidates.extend(self.references.iter().cloned());
        candidates
    }
}

/// A candidate that passed, with the ratio it achieved.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested foreground color.
    pub color: Color,
    /// Its contrast ratio against the background.
    pub ratio: f64,
}

impl Suggestion {
    /// The ratio rounded to two decimals, for display.
    pub fn ratio_label(&self) -> String {
        format_ratio(self.ratio)
    }
}

/// Finds up to `config.limit` candidates whose contrast with `background` is at least
/// `config.target_ratio`, best first. Candidates with equal ratios keep their scan order.
///
/// # Example
/// ```
/// # use chromakit::prelude::*;
/// # use chromakit::suggest::{suggest_accessible, SuggestionConfig};
/// let found = suggest_accessible(Color::WHITE, &SuggestionConfig::default());
/// assert_eq!(found[0].color, Color::BLACK);
/// assert!(found.iter().all(|s| s.ratio >= 7.0));
/// ```
pub fn suggest_accessible(background: Color, config: &SuggestionConfig) -> Vec<Suggestion> {
    let mut passing: Vec<Suggestion> = config
        .candidates()
        .into_iter()
        .map(|color| Suggestion {
            color,
            ratio: contrast_ratio(background, color),
        })
        .filter(|s| s.ratio >= config.target_ratio)
        .collect();
    // sort_by is stable, which is what keeps ties in scan order
    passing.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    passing.truncate(config.limit);
    passing
}

/// Like [`suggest_accessible`], but takes the background as a hex code.
/// # Errors
/// Returns `ColorError::InvalidColorFormat` if the hex code doesn't parse.
pub fn suggest_for_hex(background: &str, config: &SuggestionConfig) -> Result<Vec<Suggestion>, ColorError> {
    Ok(suggest_accessible(Color::from_hex_code(background)?, config))
}

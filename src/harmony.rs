//! This module derives color harmonies: sets of colors related to a base color by fixed rotations
//! around the hue wheel. Every derived color keeps the base color's saturation and lightness; only
//! the hue moves. Monochromatic sets are the exception, keeping hue and saturation and stepping
//! through lightness instead.
//!
//! Offsets are added to the unrounded HSL hue and wrapped once, so a rotation by 360 can never
//! show up as a different slot from a rotation by 0.

use color::{Color, ColorError};
use hsl::{rgb_to_hsl, hsl_to_rgb, HslValue};

/// The harmony rules chromakit knows about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyScheme {
    /// The opposite hue: +180°.
    Complementary,
    /// The two neighbors: +30° and -30°.
    Analogous,
    /// Three evenly spaced hues: +120° and +240°.
    Triadic,
    /// The two neighbors of the complement: +150° and +210°.
    SplitComplementary,
    /// Four evenly spaced hues: +90°, +180° and +270°.
    Tetradic,
    /// The same hue at several lightness levels.
    Monochromatic,
}

/// Every scheme, in the order they are usually presented.
pub static HARMONY_SCHEMES: [HarmonyScheme; 6] = [
    HarmonyScheme::Complementary,
    HarmonyScheme::Analogous,
    HarmonyScheme::Triadic,
    HarmonyScheme::SplitComplementary,
    HarmonyScheme::Tetradic,
    HarmonyScheme::Monochromatic,
];

/// How a derived color relates to its base: the tag attached to each slot of a [`HarmonySet`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    /// +180°.
    Complementary,
    /// +30°.
    AnalogousPlus30,
    /// -30°.
    AnalogousMinus30,
    /// +120°.
    Triadic1,
    /// +240°.
    Triadic2,
    /// +150°.
    SplitComplementary1,
    /// +210°.
    SplitComplementary2,
    /// +90°.
    Tetradic1,
    /// +180°.
    Tetradic2,
    /// +270°.
    Tetradic3,
    /// The n-th lightness step of a monochromatic set, counting from 0.
    Shade(usize),
}

impl Relationship {
    /// The hue rotation this relationship applies, in degrees. Shades don't rotate.
    pub fn hue_offset(&self) -> f64 {
        match *self {
            Relationship::Complementary => 180.0,
            Relationship::AnalogousPlus30 => 30.0,
            Relationship::AnalogousMinus30 => -30.0,
            Relationship::Triadic1 => 120.0,
            Relationship::Triadic2 => 240.0,
            Relationship::SplitComplementary1 => 150.0,
            Relationship::SplitComplementary2 => 210.0,
            Relationship::Tetradic1 => 90.0,
            Relationship::Tetradic2 => 180.0,
            Relationship::Tetradic3 => 270.0,
            Relationship::Shade(_) => 0.0,
        }
    }
}

impl HarmonyScheme {
    /// The rotating relationships that make up this scheme. Empty for `Monochromatic`, whose slots
    /// depend on the configured lightness steps.
    pub fn rotations(&self) -> &'static [Relationship] {
        match *self {
            HarmonyScheme::Complementary => &[Relationship::Complementary],
            HarmonyScheme::Analogous => {
                &[Relationship::AnalogousPlus30, Relationship::AnalogousMinus30]
            }
            HarmonyScheme::Triadic => &[Relationship::Triadic1, Relationship::Triadic2],
            HarmonyScheme::SplitComplementary => {
                &[Relationship::SplitComplementary1, Relationship::SplitComplementary2]
            }
            HarmonyScheme::Tetradic => {
                &[Relationship::Tetradic1, Relationship::Tetradic2, Relationship::Tetradic3]
            }
            HarmonyScheme::Monochromatic => &[],
        }
    }
}

/// The lightness levels, as percentages, used for monochromatic harmonies. Values outside
/// [0, 100] are clamped when the colors are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonochromaticSteps {
    /// One lightness per derived color, in output order.
    pub lightness: Vec<f64>,
}

impl Default for MonochromaticSteps {
    fn default() -> MonochromaticSteps {
        MonochromaticSteps {
            lightness: vec![20.0, 40.0, 70.0, 90.0],
        }
    }
}

/// One derived color in a harmony: its tag, the exact HSL it was built from, and the rounded color.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyColor {
    /// How this color relates to the base.
    pub relationship: Relationship,
    /// The unrounded HSL value: same saturation and lightness as the base (or the configured
    /// lightness, for shades), hue rotated exactly.
    pub hsl: HslValue,
    /// The HSL value converted back to 8-bit channels.
    pub color: Color,
}

/// A base color together with the colors derived from it by one harmony scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonySet {
    /// The scheme used.
    pub scheme: HarmonyScheme,
    /// The color everything was derived from.
    pub base: Color,
    /// The derived colors, in the scheme's slot order. Never includes the base itself.
    pub colors: Vec<HarmonyColor>,
}

impl HarmonySet {
    /// Finds the derived color with the given relationship, if this set has one.
    pub fn get(&self, relationship: Relationship) -> Option<Color> {
        self.colors
            .iter()
            .find(|c| c.relationship == relationship)
            .map(|c| c.color)
    }

    /// The hex codes of the derived colors, in order.
    pub fn hexes(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.color.to_hex()).collect()
    }

    /// The base color followed by every derived color: a ready-made palette.
    pub fn palette(&self) -> Vec<Color> {
        let mut palette = vec![self.base];
        palette.extend(self.colors.iter().map(|c| c.color));
        palette
    }
}

/// Builds harmony sets. The only configuration is the monochromatic lightness ladder; the hue
/// offsets of every other scheme are fixed.
///
/// # Example
/// ```
/// # use chromakit::prelude::*;
/// # use chromakit::harmony::{HarmonyGenerator, Relationship};
/// let base = Color::from_hex_code("#3B82F6").unwrap();
/// let set = HarmonyGenerator::default().complementary(base);
/// assert_eq!(set.get(Relationship::Complementary).unwrap().to_hex(), "#F6AF3B");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HarmonyGenerator {
    /// Lightness levels for monochromatic sets.
    pub monochromatic: MonochromaticSteps,
}

impl HarmonyGenerator {
    /// Creates a generator with a custom monochromatic ladder.
    pub fn new(monochromatic: MonochromaticSteps) -> HarmonyGenerator {
        HarmonyGenerator { monochromatic }
    }

    /// Builds the harmony set for any scheme.
    pub fn generate(&self, scheme: HarmonyScheme, base: Color) -> HarmonySet {
        let base_hsl = rgb_to_hsl(base);
        let colors = if scheme == HarmonyScheme::Monochromatic {
            self.monochromatic
                .lightness
                .iter()
                .enumerate()
                .map(|(i, &l)| derive(Relationship::Shade(i), base_hsl.with_lightness(l)))
                .collect()
        } else {
            scheme
                .rotations()
                .iter()
                .map(|&rel| derive(rel, base_hsl.rotate(rel.hue_offset())))
                .collect()
        };
        HarmonySet {
            scheme,
            base,
            colors,
        }
    }

    /// Parses a hex code and builds the harmony set for it.
    /// # Errors
    /// Returns `ColorError::InvalidColorFormat` if the hex code doesn't parse.
    pub fn generate_hex(&self, scheme: HarmonyScheme, hex: &str) -> Result<HarmonySet, ColorError> {
        Ok(self.generate(scheme, Color::from_hex_code(hex)?))
    }

    /// Builds one set for every scheme, in [`HARMONY_SCHEMES`] order.
    pub fn all(&self, base: Color) -> Vec<HarmonySet> {
        HARMONY_SCHEMES
            .iter()
            .map(|&scheme| self.generate(scheme, base))
            .collect()
    }

    /// The opposite hue.
    pub fn complementary(&self, base: Color) -> HarmonySet {
        self.generate(HarmonyScheme::Complementary, base)
    }

    /// The hues 30° on either side.
    pub fn analogous(&self, base: Color) -> HarmonySet {
        self.generate(HarmonyScheme::Analogous, base)
    }

    /// The hues a third of the wheel away in each direction.
    pub fn triadic(&self, base: Color) -> HarmonySet {
        self.generate(HarmonyScheme::Triadic, base)
    }

    /// The hues 150° and 210° away.
    pub fn split_complementary(&self, base: Color) -> HarmonySet {
        self.generate(HarmonyScheme::SplitComplementary, base)
    }

    /// The hues a quarter, half, and three quarters of the wheel away.
    pub fn tetradic(&self, base: Color) -> HarmonySet {
        self.generate(HarmonyScheme::Tetradic, base)
    }

    /// The base hue at each configured lightness.
    pub fn monochromatic(&self, base: Color) -> HarmonySet {
        self.generate(HarmonyScheme::Monochromatic, base)
    }
}

fn derive(relationship: Relationship, hsl: HslValue) -> HarmonyColor {
    HarmonyColor {
        relationship,
        hsl,
        color: hsl_to_rgb(hsl),
    }
}

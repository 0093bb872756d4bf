//! This file collects every constant that is part of the observable contract of the contrast
//! math: the WCAG 2.x pass thresholds, the sRGB transfer function parameters, and the Rec. 709
//! luminance weights. Anything that compares against a contrast ratio or computes a luminance
//! should read them from here instead of repeating the literals, so that the numbers can never
//! drift apart between call sites.

/// Minimum ratio for large text at level AA (and for UI components).
pub const WCAG_AA_LARGE: f64 = 3.0;
/// Minimum ratio for normal text at level AA. Also the minimum for large text at level AAA.
pub const WCAG_AA_NORMAL: f64 = 4.5;
/// Minimum ratio for large text at level AAA.
pub const WCAG_AAA_LARGE: f64 = 4.5;
/// Minimum ratio for normal text at level AAA.
pub const WCAG_AAA_NORMAL: f64 = 7.0;

/// Upper end of the linear segment of the sRGB transfer function, as written in WCAG 2.x.
pub const SRGB_LINEAR_BREAKPOINT: f64 = 0.03928;
/// Slope divisor of the linear segment.
pub const SRGB_LINEAR_SLOPE: f64 = 12.92;
/// Offset of the power-law segment: ((c + 0.055) / 1.055) ^ 2.4.
pub const SRGB_GAMMA_OFFSET: f64 = 0.055;
/// Exponent of the power-law segment.
pub const SRGB_GAMMA_EXPONENT: f64 = 2.4;

/// Weight of the linearized red channel in relative luminance.
pub const LUMINANCE_WEIGHT_R: f64 = 0.2126;
/// Weight of the linearized green channel in relative luminance.
pub const LUMINANCE_WEIGHT_G: f64 = 0.7152;
/// Weight of the linearized blue channel in relative luminance.
pub const LUMINANCE_WEIGHT_B: f64 = 0.0722;

/// Flare term added to both luminances before taking the contrast quotient.
pub const CONTRAST_FLARE: f64 = 0.05;

//! This module simply brings the most common chromakit functionality under a single namespace, to
//! prevent excessive imports. It includes every trait in chromakit, the ubiquitous [`Color`] with
//! its parse error [`ColorError`], and [`HslValue`]. The operations themselves live in their own
//! modules and are not re-exported here.

pub use bound::Bound;
pub use color::{Color, ColorError};
pub use colormap::ColorMap;
pub use hsl::HslValue;
pub use sampler::ImageSampler;

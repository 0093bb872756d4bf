//! Chromakit is the color math behind a palette and accessibility tool. It converts between hex,
//! RGB and HSL, measures WCAG contrast, derives harmonious palettes from a base color, searches for
//! readable text colors, composes CSS gradients, and maps pointer positions on a color wheel to
//! colors. Every operation is a pure function of its inputs: there is no global state, nothing is
//! cached between calls, and nothing is logged, so any of it can run on any thread.
//!
//! Colors are 8-bit sRGB [`Color`](color/struct.Color.html) values throughout. HSL is only an
//! intermediate space for hue arithmetic, which is why chromakit carries no other color spaces.

#![doc(html_root_url = "https://docs.rs/chromakit/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate lazy_static;

#[cfg(test)]
extern crate float_cmp;
#[cfg(test)]
extern crate maplit;

pub mod bound;
pub mod color;
pub mod colormap;
pub mod consts;
pub mod contrast;
pub mod coord;
pub mod export;
pub mod gradient;
pub mod harmony;
pub mod hsl;
pub mod prelude;
pub mod sampler;
pub mod suggest;
pub mod wheel;

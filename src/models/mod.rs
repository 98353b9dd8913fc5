//! Models are structs that represent a color in a specified color space or
//! form. Conversions are only implemented where the gamut projection needs
//! them:
//!
//! ```rust
//! use gamut_wheel::models::{Chromaticity, WideRgbLinear};
//! let hsv = WideRgbLinear::from(Chromaticity::new(0.675, 0.322).to_xyz())
//!     .to_gamma_encoded()     // sRGB transfer curve.
//!     .normalized()           // rescale and clamp into [0..1].
//!     .to_hsv();
//! assert!(hsv.saturation <= 1.0);
//! ```

mod hsv;
mod rgb;
mod xyz;

pub use hsv::*;
pub use rgb::*;
pub use xyz::*;

//! Model a color with the HSV notation.

use crate::{color::Component, models::WideRgb};

gamut_wheel_macros::gen_model! {
    /// A color specified with the HSV notation, the model used by circular
    /// color wheels.
    pub struct Hsv {
        /// The hue in degrees, in [0..360).
        pub hue: Component,
        /// The saturation in [0..1]; the distance from the wheel's center.
        pub saturation: Component,
        /// The value (brightness) in [0..1].
        pub value: Component,
    }
}

impl Hsv {
    /// Convert back to gamma encoded RGB, e.g. to paint a reference wheel.
    pub fn to_rgb(&self) -> WideRgb {
        let hue = self.hue.rem_euclid(360.0) / 60.0;
        let chroma = self.value * self.saturation;
        let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
        let m = self.value - chroma;

        let (red, green, blue) = match hue as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        WideRgb::new(red + m, green + m, blue + m)
    }
}

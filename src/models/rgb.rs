//! Model a color in the wide-gamut RGB space Hue lamps report their gamuts
//! against.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::{Hsv, Xyz},
};

/// Tags for the gamma encoding of [`Rgb`] components.
pub mod encoding {
    /// This trait is used to identify tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components have the sRGB transfer curve applied.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

use encoding::{Encoding, GammaEncoded, LinearLight};

gamut_wheel_macros::gen_model! {
    /// A color in the wide-gamut RGB space with a D65 white point.
    pub struct Rgb<E: Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Wide-gamut RGB without gamma encoding.
pub type WideRgbLinear = Rgb<LinearLight>;

/// Wide-gamut RGB with gamma encoding.
pub type WideRgb = Rgb<GammaEncoded>;

impl From<Xyz> for WideRgbLinear {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             1.656492, -0.707196,  0.051713,
            -0.354851,  1.655397, -0.121364,
            -0.255038,  0.036152,  1.01153,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}

impl WideRgbLinear {
    /// Apply the sRGB transfer curve. Negative values stay on the linear
    /// segment.
    pub fn to_gamma_encoded(&self) -> WideRgb {
        self.to_components()
            .map(|value| {
                if value <= 0.0031308 {
                    12.92 * value
                } else {
                    1.055 * value.powf(1.0 / 2.4) - 0.055
                }
            })
            .into()
    }
}

impl WideRgb {
    /// Bring the components into [0..1]. When any component is above 1, all
    /// three are divided by the largest so their ratios survive, then every
    /// component is clamped.
    pub fn normalized(&self) -> Self {
        let components = self.to_components();
        let max = components.max();

        let components = if max > 1.0 {
            components.map(|v| v / max)
        } else {
            components
        };

        components.map(|v| v.clamp(0.0, 1.0)).into()
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let components = self.to_components();
        let Components(red, green, blue) = components;
        let max = components.max();
        let delta = max - components.min();

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        // Achromatic colors have no hue.
        if delta == 0.0 {
            return Hsv::new(0.0, saturation, max);
        }

        let sector = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Hsv::new(sector / 6.0 * 360.0, saturation, max)
    }
}

//! Model a color in the CIE-XYZ color space and its xy chromaticity.

use crate::color::Component;

gamut_wheel_macros::gen_model! {
    /// A color in the CIE-XYZ color space.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y (luminance) component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

/// A point in the CIE xy chromaticity plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chromaticity {
    /// The x coordinate.
    pub x: Component,
    /// The y coordinate. Must not be zero.
    pub y: Component,
}

impl Chromaticity {
    /// Create a new chromaticity point.
    pub const fn new(x: Component, y: Component) -> Self {
        Self { x, y }
    }

    /// Convert to CIE-XYZ, assuming unit luminance (`Y = 1`).
    pub fn to_xyz(&self) -> Xyz {
        debug_assert!(self.y != 0.0, "chromaticity with y = 0 has no XYZ");

        const LUMINANCE: Component = 1.0;

        let z = 1.0 - self.x - self.y;
        Xyz::new(
            (LUMINANCE / self.y) * self.x,
            LUMINANCE,
            (LUMINANCE / self.y) * z,
        )
    }
}

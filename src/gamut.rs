//! Manufacturer gamut triangles and their projection onto a color wheel.
//!
//! A gamut is given as three CIE xy chromaticities (red, green, blue). Each
//! vertex is converted to HSV and placed on the wheel by using the hue as the
//! angle and the saturation as the distance from the center.

use std::fmt;

use euclid::default::Point2D;

use crate::{
    color::Component,
    geometry::{PlanePoint, Triangle},
    models::{Chromaticity, Hsv, WideRgbLinear},
};

/// Philips Hue gamut A.
pub const GAMUT_A: [Chromaticity; 3] = [
    Chromaticity::new(0.704, 0.296),
    Chromaticity::new(0.2151, 0.7106),
    Chromaticity::new(0.138, 0.08),
];

/// Philips Hue gamut B.
pub const GAMUT_B: [Chromaticity; 3] = [
    Chromaticity::new(0.675, 0.322),
    Chromaticity::new(0.409, 0.518),
    Chromaticity::new(0.167, 0.04),
];

/// Philips Hue gamut C.
pub const GAMUT_C: [Chromaticity; 3] = [
    Chromaticity::new(0.692, 0.308),
    Chromaticity::new(0.17, 0.7),
    Chromaticity::new(0.153, 0.048),
];

/// Identifies one of the known gamut triangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamutId {
    /// Gamut A.
    A,
    /// Gamut B.
    B,
    /// Gamut C.
    C,
}

impl GamutId {
    /// Every known gamut.
    pub const ALL: [GamutId; 3] = [GamutId::A, GamutId::B, GamutId::C];

    /// Look up a gamut by the name a host configures it with. `"none"`, an
    /// empty name and unknown names all mean "no gamut".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "A" | "a" => Some(GamutId::A),
            "B" | "b" => Some(GamutId::B),
            "C" | "c" => Some(GamutId::C),
            "" => None,
            other if other.eq_ignore_ascii_case("none") => None,
            other => {
                log::debug!("unknown gamut {other:?}, no overlay");
                None
            }
        }
    }

    /// The name of the gamut.
    pub fn name(&self) -> &'static str {
        match self {
            GamutId::A => "A",
            GamutId::B => "B",
            GamutId::C => "C",
        }
    }

    /// The chromaticities of the red, green and blue vertices.
    pub fn chromaticities(&self) -> &'static [Chromaticity; 3] {
        match self {
            GamutId::A => &GAMUT_A,
            GamutId::B => &GAMUT_B,
            GamutId::C => &GAMUT_C,
        }
    }
}

impl fmt::Display for GamutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The color a chromaticity shows as on the wheel.
pub fn chromaticity_to_hsv(chromaticity: &Chromaticity) -> Hsv {
    WideRgbLinear::from(chromaticity.to_xyz())
        .to_gamma_encoded()
        .normalized()
        .to_hsv()
}

/// Place a hue/saturation pair on a wheel of diameter `size`.
///
/// Hue 0 points up, so the angle is rotated by -90 degrees from the usual
/// mathematical zero.
pub fn wheel_position(hsv: &Hsv, size: Component) -> PlanePoint {
    let radius = size / 2.0;
    let center = radius;
    let angle = (hsv.hue - 90.0).to_radians();

    Point2D::new(
        center + angle.cos() * hsv.saturation * radius,
        center + angle.sin() * hsv.saturation * radius,
    )
}

/// Project the gamut's vertices onto a wheel of diameter `size`. Vertex
/// order is kept (red, green, blue).
pub fn project_gamut_vertices(gamut: GamutId, size: Component) -> Triangle {
    gamut
        .chromaticities()
        .map(|c| wheel_position(&chromaticity_to_hsv(&c), size))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, geometry::is_inside};

    #[test]
    fn gamut_names() {
        assert_eq!(GamutId::from_name("A"), Some(GamutId::A));
        assert_eq!(GamutId::from_name(" b "), Some(GamutId::B));
        assert_eq!(GamutId::from_name("C"), Some(GamutId::C));
        assert_eq!(GamutId::from_name("none"), None);
        assert_eq!(GamutId::from_name("None"), None);
        assert_eq!(GamutId::from_name(""), None);
        assert_eq!(GamutId::from_name("D"), None);
        for gamut in GamutId::ALL {
            assert_eq!(GamutId::from_name(&gamut.to_string()), Some(gamut));
        }
    }

    #[test]
    fn projections_stay_on_the_disk() {
        for size in [1.0, 64.0, 200.0, 256.0, 1000.0] {
            let center = Point2D::new(size / 2.0, size / 2.0);
            for gamut in GamutId::ALL {
                let triangle = project_gamut_vertices(gamut, size);
                assert_eq!(triangle.vertices().len(), 3);
                for v in triangle.vertices() {
                    let distance = (*v - center).length();
                    assert!(
                        distance <= size / 2.0 + size * 1.0e-5,
                        "{gamut} at {size}: {v:?} is {distance} from the center"
                    );
                }
            }
        }
    }

    #[test]
    fn own_vertices_and_centroid_inside() {
        for gamut in GamutId::ALL {
            let triangle = project_gamut_vertices(gamut, 200.0);
            for v in triangle.vertices() {
                assert!(is_inside(*v, &triangle));
            }
            assert!(is_inside(triangle.centroid(), &triangle), "{gamut}");
            assert!(!is_inside(Point2D::new(-1000.0, -1000.0), &triangle));
        }
    }

    #[test]
    fn gamut_b_at_256() {
        let first = project_gamut_vertices(GamutId::B, 256.0);
        for v in first.vertices() {
            assert!((0.0..=256.0).contains(&v.x), "{v:?}");
            assert!((0.0..=256.0).contains(&v.y), "{v:?}");
        }

        let second = project_gamut_vertices(GamutId::B, 256.0);
        for (a, b) in first.vertices().iter().zip(second.vertices()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn red_vertices_point_up() {
        // Every gamut's red vertex is fully saturated with a hue just around
        // 0 degrees, so it lands near the top of the wheel.
        for gamut in GamutId::ALL {
            let red = project_gamut_vertices(gamut, 256.0).vertices()[0];
            assert!(red.y < 8.0, "{gamut}: {red:?}");
        }
    }

    #[test]
    fn hue_zero_is_up_and_quarter_is_right() {
        let up = wheel_position(&Hsv::new(0.0, 1.0, 1.0), 100.0);
        assert_component_eq!(up.x, 50.0, 1.0e-4);
        assert_component_eq!(up.y, 0.0, 1.0e-4);

        let right = wheel_position(&Hsv::new(90.0, 1.0, 1.0), 100.0);
        assert_component_eq!(right.x, 100.0, 1.0e-4);
        assert_component_eq!(right.y, 50.0, 1.0e-4);

        let center = wheel_position(&Hsv::new(123.0, 0.0, 1.0), 100.0);
        assert_eq!(center, Point2D::new(50.0, 50.0));
    }

    #[test]
    fn gamut_b_excludes_the_wheel_center() {
        let triangle = project_gamut_vertices(GamutId::B, 256.0);
        assert!(!is_inside(Point2D::new(128.0, 128.0), &triangle));
        assert!(!is_inside(Point2D::new(128.0, 250.0), &triangle));
    }
}

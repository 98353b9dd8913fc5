//! Draw the projected gamut triangle onto an overlay surface.

use std::str::FromStr;

use euclid::default::Point2D;
use image::{Rgba, RgbaImage};

use crate::{
    color::Component,
    css,
    error::{Error, Result},
    geometry::{is_inside, Triangle},
};

/// Opacity the fill color is drawn with.
pub const OVERLAY_OPACITY: Component = 0.3;

/// The color the gamut triangle is filled with, as straight (not
/// premultiplied) RGBA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillColor {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel.
    pub alpha: u8,
}

impl FillColor {
    /// Create an opaque fill color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    /// The pixel written for covered pixels of the overlay.
    pub fn overlay_pixel(&self) -> Rgba<u8> {
        let alpha = (self.alpha as Component * OVERLAY_OPACITY).round() as u8;
        Rgba([self.red, self.green, self.blue, alpha])
    }
}

impl FromStr for FillColor {
    type Err = Error;

    /// Parse a CSS color: hex notation, `rgb()`, `rgba()`, `hsl()`, `hsla()`
    /// or a named color.
    fn from_str(s: &str) -> Result<Self> {
        let [red, green, blue, alpha] =
            css::parse_color(s).ok_or_else(|| Error::InvalidFillColor(s.to_string()))?;
        Ok(Self {
            red,
            green,
            blue,
            alpha,
        })
    }
}

/// Fill `triangle` onto `surface` with `fill` at [`OVERLAY_OPACITY`].
///
/// A pixel is covered when its center is inside the triangle. Only the
/// triangle's bounding box is visited.
pub fn fill_triangle(surface: &mut RgbaImage, triangle: &Triangle, fill: FillColor) {
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let bounds = triangle.bounds();
    let x0 = bounds.min.x.floor().max(0.0) as u32;
    let y0 = bounds.min.y.floor().max(0.0) as u32;
    let x1 = (bounds.max.x.ceil().max(0.0) as u32).min(width);
    let y1 = (bounds.max.y.ceil().max(0.0) as u32).min(height);

    let pixel = fill.overlay_pixel();

    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point2D::new(x as Component + 0.5, y as Component + 0.5);
            if is_inside(center, triangle) {
                surface.put_pixel(x, y, pixel);
            }
        }
    }
}

/// Clear `surface` to fully transparent and draw `triangle` on it.
pub fn draw_gamut_triangle(surface: &mut RgbaImage, triangle: &Triangle, fill: FillColor) {
    surface.fill(0);
    fill_triangle(surface, triangle, fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamut::{project_gamut_vertices, GamutId};

    #[test]
    fn parse_hex_colors() {
        assert_eq!("#fff".parse(), Ok(FillColor::rgb(255, 255, 255)));
        assert_eq!("#1976D2".parse(), Ok(FillColor::rgb(0x19, 0x76, 0xd2)));
        assert_eq!(
            " #11223344 ".parse(),
            Ok(FillColor {
                red: 0x11,
                green: 0x22,
                blue: 0x33,
                alpha: 0x44
            })
        );
        assert_eq!(
            "#f008".parse::<FillColor>().map(|c| c.alpha),
            Ok(0x88)
        );
    }

    #[test]
    fn parse_functions_and_names() {
        assert_eq!("rgb(10, 20, 30)".parse(), Ok(FillColor::rgb(10, 20, 30)));
        assert_eq!(
            "RGBA(255,0,0,0.5)".parse(),
            Ok(FillColor {
                red: 255,
                green: 0,
                blue: 0,
                alpha: 128
            })
        );
        assert_eq!("rgb(25 118 210)".parse(), Ok(FillColor::rgb(25, 118, 210)));
        assert_eq!("hsl(210, 79%, 46%)".parse(), Ok(FillColor::rgb(25, 117, 210)));
        assert_eq!("Orange".parse(), Ok(FillColor::rgb(255, 165, 0)));
        assert_eq!("teal".parse(), Ok(FillColor::rgb(0, 128, 128)));
        assert_eq!("purple".parse(), Ok(FillColor::rgb(128, 0, 128)));
    }

    #[test]
    fn reject_bad_colors() {
        for bad in [
            "",
            "#12",
            "#ggg",
            "#+1+2+3",
            "#+f+f+f",
            "rgb(1,2)",
            "hsl(210 79%)",
            "tealish",
            "#ü12",
        ] {
            assert_eq!(
                bad.parse::<FillColor>(),
                Err(Error::InvalidFillColor(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn overlay_alpha_is_thirty_percent() {
        let alpha = FillColor::rgb(1, 2, 3).overlay_pixel()[3];
        assert!((76..=77).contains(&alpha), "{alpha}");
        assert_eq!(
            FillColor {
                red: 0,
                green: 0,
                blue: 0,
                alpha: 0
            }
            .overlay_pixel()[3],
            0
        );
    }

    #[test]
    fn covers_inside_pixels_only() {
        let mut surface = RgbaImage::new(10, 10);
        let triangle = Triangle::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(0.0, 10.0),
        );
        let fill = FillColor::rgb(200, 100, 50);
        draw_gamut_triangle(&mut surface, &triangle, fill);

        assert_eq!(*surface.get_pixel(0, 0), fill.overlay_pixel());
        assert_eq!(*surface.get_pixel(3, 3), fill.overlay_pixel());
        assert_eq!(*surface.get_pixel(9, 9), Rgba([0, 0, 0, 0]));
        assert_eq!(*surface.get_pixel(6, 6), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn redraw_clears_previous_triangle() {
        let mut surface = RgbaImage::new(256, 256);
        let fill = FillColor::rgb(25, 118, 210);

        let a = project_gamut_vertices(GamutId::A, 256.0);
        draw_gamut_triangle(&mut surface, &a, fill);
        // Deep inside A, below B's green/blue edge.
        assert_eq!(*surface.get_pixel(128, 160), fill.overlay_pixel());

        let b = project_gamut_vertices(GamutId::B, 256.0);
        draw_gamut_triangle(&mut surface, &b, fill);
        assert_eq!(*surface.get_pixel(128, 160), Rgba([0, 0, 0, 0]));

        let centroid = b.centroid();
        assert_eq!(
            *surface.get_pixel(centroid.x as u32, centroid.y as u32),
            fill.overlay_pixel()
        );
    }

    #[test]
    fn triangle_outside_surface_draws_nothing() {
        let mut surface = RgbaImage::new(8, 8);
        let triangle = Triangle::new(
            Point2D::new(-30.0, -30.0),
            Point2D::new(-10.0, -30.0),
            Point2D::new(-20.0, -10.0),
        );
        draw_gamut_triangle(&mut surface, &triangle, FillColor::rgb(255, 0, 0));
        assert!(surface.pixels().all(|p| p[3] == 0));
    }
}

//! gamut-wheel shows which part of a color wheel a light can reproduce.
//!
//! Light manufacturers describe what their lamps can show as a triangle in
//! the CIE xy chromaticity plane. This crate projects such a triangle onto the
//! hue/saturation disk of a color wheel, draws it as a translucent overlay and
//! gates pointer events so that colors outside the triangle can not be picked.
//!
//! ```rust
//! use gamut_wheel::{is_inside, project_gamut_vertices, GamutId};
//! let triangle = project_gamut_vertices(GamutId::B, 256.0);
//! assert!(is_inside(triangle.centroid(), &triangle));
//! ```

#![deny(missing_docs)]

mod color;
mod config;
mod css;
mod error;
pub mod gamut;
mod geometry;
mod math;
pub mod models;
mod overlay;
mod pointer;
mod raster;

#[cfg(test)]
mod test;

pub use color::{Component, Components};
pub use config::OverlayConfig;
pub use error::{Error, Result};
pub use gamut::{project_gamut_vertices, GamutId};
pub use geometry::{is_inside, PlanePoint, Triangle};
pub use overlay::{
    wheel_center, HostElement, Overlay, OverlayHost, SurfaceHandle, MAX_OVERLAY_SIZE,
};
pub use pointer::{
    Disposition, EventBlocker, GateConfig, PointerCallback, PointerEvent, PointerGate,
    PointerKind, SuppressionPolicy,
};
pub use raster::{draw_gamut_triangle, fill_triangle, FillColor, OVERLAY_OPACITY};

//! Attach and detach the gamut overlay on a host element.
//!
//! A host owns at most one overlay at a time. Attaching always drops the
//! previous overlay before the new one is stored, so pointer events are only
//! ever gated against the triangle that is actually drawn.

use euclid::default::Point2D;
use image::RgbaImage;

use crate::{
    color::Component,
    config::OverlayConfig,
    error::Result,
    gamut::{project_gamut_vertices, GamutId},
    geometry::{is_inside, PlanePoint, Triangle},
    pointer::{PointerEvent, PointerGate},
    raster::{draw_gamut_triangle, FillColor},
};

/// Largest wheel size, in pixels, an overlay surface is allocated for.
pub const MAX_OVERLAY_SIZE: i32 = 4096;

/// Identifies an attached overlay surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(u64);

/// The element the overlay is placed on, as far as the overlay cares.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostElement {
    /// Top-left corner of the element's bounding box in client coordinates.
    pub origin: PlanePoint,
}

impl HostElement {
    /// An element whose bounding box starts at `origin`.
    pub fn at(origin: PlanePoint) -> Self {
        Self { origin }
    }
}

/// An attached overlay: the drawn surface together with the triangle it
/// shows.
#[derive(Debug)]
pub struct Overlay {
    handle: SurfaceHandle,
    gamut: GamutId,
    triangle: Triangle,
    surface: RgbaImage,
    origin: PlanePoint,
}

impl Overlay {
    /// The handle this overlay was attached with.
    pub fn handle(&self) -> SurfaceHandle {
        self.handle
    }

    /// The gamut shown.
    pub fn gamut(&self) -> GamutId {
        self.gamut
    }

    /// The projected triangle, in surface coordinates.
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// The drawn surface.
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Top-left corner of the surface in client coordinates.
    pub fn origin(&self) -> PlanePoint {
        self.origin
    }

    /// Convert a client position to surface coordinates.
    pub fn to_local(&self, client: PlanePoint) -> PlanePoint {
        (client - self.origin).to_point()
    }

    /// Returns true if a client position lands inside the gamut.
    pub fn contains_client(&self, client: PlanePoint) -> bool {
        is_inside(self.to_local(client), &self.triangle)
    }

    /// Draw the triangle again with another fill color.
    pub fn redraw(&mut self, fill: FillColor) {
        draw_gamut_triangle(&mut self.surface, &self.triangle, fill);
    }
}

/// Owns the overlay of one picker.
#[derive(Debug, Default)]
pub struct OverlayHost {
    current: Option<Overlay>,
    next_handle: u64,
}

impl OverlayHost {
    /// A host without an overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current overlay with one showing `gamut` on a `size` pixel
    /// wheel.
    ///
    /// The previous overlay is always detached. Nothing new is attached, and
    /// `None` is returned, when there is no gamut or `size` is not in
    /// `1..=MAX_OVERLAY_SIZE`.
    pub fn attach(
        &mut self,
        element: &HostElement,
        gamut: Option<GamutId>,
        size: i32,
        fill: FillColor,
    ) -> Option<SurfaceHandle> {
        if let Some(previous) = self.current.take() {
            log::debug!("detaching overlay {:?} before attach", previous.handle);
        }

        let gamut = gamut?;
        if size <= 0 {
            log::debug!("not attaching gamut {gamut} overlay with size {size}");
            return None;
        }
        if size > MAX_OVERLAY_SIZE {
            log::warn!(
                "not attaching gamut {gamut} overlay, size {size} exceeds {MAX_OVERLAY_SIZE}"
            );
            return None;
        }

        let triangle = project_gamut_vertices(gamut, size as Component);
        let mut surface = RgbaImage::new(size as u32, size as u32);
        draw_gamut_triangle(&mut surface, &triangle, fill);

        self.next_handle += 1;
        let handle = SurfaceHandle(self.next_handle);

        log::debug!("attached gamut {gamut} overlay {handle:?} at {size}px");

        self.current = Some(Overlay {
            handle,
            gamut,
            triangle,
            surface,
            origin: element.origin,
        });

        Some(handle)
    }

    /// [`OverlayHost::attach`] with the settings from `config`.
    pub fn attach_config(
        &mut self,
        element: &HostElement,
        config: &OverlayConfig,
    ) -> Result<Option<SurfaceHandle>> {
        let fill = config.fill()?;
        Ok(self.attach(element, config.gamut_id(), config.size, fill))
    }

    /// Detach the overlay identified by `handle`. Returns false if that
    /// overlay is not attached any more.
    pub fn detach(&mut self, handle: SurfaceHandle) -> bool {
        if self.current.as_ref().map(Overlay::handle) != Some(handle) {
            return false;
        }

        self.current = None;
        log::debug!("detached overlay {handle:?}");
        true
    }

    /// The attached overlay, if any.
    pub fn current(&self) -> Option<&Overlay> {
        self.current.as_ref()
    }

    /// The attached overlay, if any.
    pub fn current_mut(&mut self) -> Option<&mut Overlay> {
        self.current.as_mut()
    }

    /// The host element moved; keep the overlay's origin in sync.
    pub fn move_to(&mut self, element: &HostElement) {
        if let Some(overlay) = self.current.as_mut() {
            overlay.origin = element.origin;
        }
    }

    /// Gate `event` against the attached overlay. Without an overlay nothing
    /// is gated and the event counts as inside.
    pub fn handle_pointer(&self, gate: &mut PointerGate, event: &mut PointerEvent) -> bool {
        match self.current.as_ref() {
            Some(overlay) => gate.handle(event, overlay),
            None => {
                gate.dispatch(event, true);
                true
            }
        }
    }
}

/// Surface-local position of the wheel's center for a given size.
pub fn wheel_center(size: i32) -> PlanePoint {
    let half = size as Component / 2.0;
    Point2D::new(half, half)
}

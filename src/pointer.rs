//! Gate pointer events on the overlay by the gamut triangle.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{geometry::PlanePoint, overlay::Overlay};

bitflags! {
    /// What has been done to an event's delivery so far.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Disposition : u8 {
        /// The event's default action must not run.
        const DEFAULT_PREVENTED = 1 << 0;
        /// The event must not reach listeners further along the path.
        const PROPAGATION_STOPPED = 1 << 1;
        /// The event must not reach any other listener, including the ones on
        /// the same target.
        const IMMEDIATE_PROPAGATION_STOPPED = 1 << 2;
    }
}

/// The phase of a pointer gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerKind {
    /// A button was pressed.
    Down,
    /// The pointer moved.
    Move,
    /// A button was released.
    Up,
}

/// A pointer event delivered to the overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// The phase of the gesture.
    pub kind: PointerKind,
    /// Position in client (viewport) coordinates.
    pub client: PlanePoint,
    /// What has been done to the event's delivery.
    pub disposition: Disposition,
}

impl PointerEvent {
    /// Create an event that nothing has been done to yet.
    pub fn new(kind: PointerKind, client: PlanePoint) -> Self {
        Self {
            kind,
            client,
            disposition: Disposition::empty(),
        }
    }

    /// Stop the event's default action.
    pub fn prevent_default(&mut self) {
        self.disposition |= Disposition::DEFAULT_PREVENTED;
    }

    /// Stop the event from reaching listeners further along the path.
    pub fn stop_propagation(&mut self) {
        self.disposition |= Disposition::PROPAGATION_STOPPED;
    }

    /// Stop the event from reaching any other listener.
    pub fn stop_immediate_propagation(&mut self) {
        self.disposition |=
            Disposition::PROPAGATION_STOPPED | Disposition::IMMEDIATE_PROPAGATION_STOPPED;
    }

    /// Returns true if the default action was prevented.
    pub fn default_prevented(&self) -> bool {
        self.disposition.contains(Disposition::DEFAULT_PREVENTED)
    }

    /// Returns true if propagation was stopped in any way.
    pub fn propagation_stopped(&self) -> bool {
        self.disposition.contains(Disposition::PROPAGATION_STOPPED)
    }
}

/// How an event landing outside the gamut is suppressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuppressionPolicy {
    /// Prevent the default action and stop propagation.
    #[default]
    StopPropagation,
    /// Prevent the default action and stop immediate propagation.
    StopImmediatePropagation,
    /// Never suppress; only report.
    ReportOnly,
}

impl SuppressionPolicy {
    /// Suppress `event` according to this policy.
    pub fn apply(self, event: &mut PointerEvent) {
        match self {
            SuppressionPolicy::StopPropagation => {
                event.stop_propagation();
                event.prevent_default();
            }
            SuppressionPolicy::StopImmediatePropagation => {
                event.stop_immediate_propagation();
                event.prevent_default();
            }
            SuppressionPolicy::ReportOnly => {}
        }
    }
}

/// Settings of a [`PointerGate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateConfig {
    /// While set, nothing is suppressed.
    pub edit_mode: bool,
    /// How events outside the gamut are suppressed.
    pub policy: SuppressionPolicy,
}

/// Called with every event the gate sees and whether it landed inside the
/// gamut.
pub type PointerCallback = Box<dyn FnMut(&PointerEvent, bool)>;

/// Suppresses pointer events landing outside the gamut triangle so the picker
/// underneath does not pick colors the light cannot show.
pub struct PointerGate {
    config: GateConfig,
    callback: Option<PointerCallback>,
    last_inside: Option<bool>,
}

impl PointerGate {
    /// Create a gate without a callback.
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            callback: None,
            last_inside: None,
        }
    }

    /// Report every event to `callback`.
    pub fn with_callback(mut self, callback: impl FnMut(&PointerEvent, bool) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// The current settings.
    pub fn config(&self) -> GateConfig {
        self.config
    }

    /// Turn edit mode on or off.
    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.config.edit_mode = edit_mode;
    }

    /// Change the suppression policy.
    pub fn set_policy(&mut self, policy: SuppressionPolicy) {
        self.config.policy = policy;
    }

    /// Whether the previous event landed inside the gamut.
    pub fn last_inside(&self) -> Option<bool> {
        self.last_inside
    }

    /// Gate `event` against `overlay`'s triangle and return whether it landed
    /// inside.
    pub fn handle(&mut self, event: &mut PointerEvent, overlay: &Overlay) -> bool {
        let inside = overlay.contains_client(event.client);
        self.dispatch(event, inside);
        inside
    }

    pub(crate) fn dispatch(&mut self, event: &mut PointerEvent, inside: bool) {
        if self.last_inside != Some(inside) {
            log::debug!(
                "pointer {:?} {} gamut",
                event.kind,
                if inside { "entered" } else { "left" }
            );
            self.last_inside = Some(inside);
        }

        if !inside && !self.config.edit_mode {
            self.config.policy.apply(event);
        }

        if let Some(callback) = self.callback.as_mut() {
            callback(event, inside);
        }
    }
}

/// Blocks a fixed set of event kinds on wheel pickers until allowed, no
/// matter where they land.
///
/// The blocker listens in the capture phase, so a host asks it first and
/// only hands events it lets through to the [`PointerGate`]:
///
/// ```rust
/// use gamut_wheel::{
///     EventBlocker, FillColor, GamutId, GateConfig, HostElement, OverlayHost, PointerEvent,
///     PointerGate, PointerKind,
/// };
///
/// let mut host = OverlayHost::new();
/// host.attach(&HostElement::default(), Some(GamutId::B), 256, FillColor::rgb(0, 0, 255));
/// let centroid = host.current().unwrap().triangle().centroid();
///
/// let mut blocker = EventBlocker::new([PointerKind::Down], true);
/// let mut gate = PointerGate::new(GateConfig::default());
///
/// let deliver = |blocker: &EventBlocker, gate: &mut PointerGate| {
///     let mut event = PointerEvent::new(PointerKind::Down, centroid);
///     let inside = !blocker.handle(&mut event) && host.handle_pointer(gate, &mut event);
///     (inside, event.propagation_stopped())
/// };
///
/// assert_eq!(deliver(&blocker, &mut gate), (false, true));
/// assert_eq!(gate.last_inside(), None);
///
/// blocker.set_allowed(true);
/// assert_eq!(deliver(&blocker, &mut gate), (true, false));
/// assert_eq!(gate.last_inside(), Some(true));
/// ```
#[derive(Clone, Debug)]
pub struct EventBlocker {
    kinds: Vec<PointerKind>,
    is_wheel: bool,
    allowed: bool,
}

impl EventBlocker {
    /// Create a blocker for `kinds`. It only acts on wheel pickers and starts
    /// out blocking.
    pub fn new(kinds: impl IntoIterator<Item = PointerKind>, is_wheel: bool) -> Self {
        let blocker = Self {
            kinds: kinds.into_iter().collect(),
            is_wheel,
            allowed: false,
        };
        if blocker.is_wheel {
            log::debug!("event blocker active for {:?}", blocker.kinds);
        }
        blocker
    }

    /// Let events through (`true`) or block them (`false`).
    pub fn set_allowed(&mut self, allowed: bool) {
        self.allowed = allowed;
    }

    /// Whether events are currently let through.
    pub fn allowed(&self) -> bool {
        self.allowed
    }

    /// Stop `event` if it must be blocked. Returns true if it was.
    pub fn handle(&self, event: &mut PointerEvent) -> bool {
        if !self.is_wheel || !self.kinds.contains(&event.kind) {
            return false;
        }

        if self.allowed {
            log::trace!("{:?} let through", event.kind);
            false
        } else {
            event.stop_immediate_propagation();
            log::trace!("{:?} blocked", event.kind);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use euclid::default::Point2D;

    use super::*;
    use crate::{
        gamut::{project_gamut_vertices, GamutId},
        overlay::{HostElement, OverlayHost},
        raster::FillColor,
    };

    fn host_with_gamut_b() -> OverlayHost {
        let mut host = OverlayHost::new();
        let element = HostElement::at(Point2D::new(100.0, 50.0));
        host.attach(&element, Some(GamutId::B), 256, FillColor::rgb(0, 0, 255));
        host
    }

    fn recording_gate(config: GateConfig) -> (PointerGate, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let gate = PointerGate::new(config).with_callback(move |_, inside| {
            sink.borrow_mut().push(inside);
        });
        (gate, seen)
    }

    #[test]
    fn outside_is_suppressed_outside_edit_mode() {
        let host = host_with_gamut_b();
        let overlay = host.current().unwrap();
        let (mut gate, seen) = recording_gate(GateConfig::default());

        // (128, 250) on the surface, offset by the element's origin.
        let mut event = PointerEvent::new(PointerKind::Down, Point2D::new(228.0, 300.0));
        assert!(!gate.handle(&mut event, overlay));
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
        assert!(!event
            .disposition
            .contains(Disposition::IMMEDIATE_PROPAGATION_STOPPED));
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn edit_mode_never_suppresses() {
        let host = host_with_gamut_b();
        let overlay = host.current().unwrap();
        let (mut gate, seen) = recording_gate(GateConfig {
            edit_mode: true,
            ..Default::default()
        });

        let mut event = PointerEvent::new(PointerKind::Down, Point2D::new(228.0, 300.0));
        assert!(!gate.handle(&mut event, overlay));
        assert!(!event.default_prevented());
        assert_eq!(event.disposition, Disposition::empty());
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn inside_passes_through() {
        let host = host_with_gamut_b();
        let overlay = host.current().unwrap();
        let (mut gate, seen) = recording_gate(GateConfig::default());

        let centroid = project_gamut_vertices(GamutId::B, 256.0).centroid();
        let client = centroid + euclid::default::Vector2D::new(100.0, 50.0);
        for kind in [PointerKind::Down, PointerKind::Move, PointerKind::Up] {
            let mut event = PointerEvent::new(kind, client);
            assert!(gate.handle(&mut event, overlay));
            assert_eq!(event.disposition, Disposition::empty());
        }
        assert_eq!(*seen.borrow(), vec![true, true, true]);
        assert_eq!(gate.last_inside(), Some(true));
    }

    #[test]
    fn immediate_policy_and_report_only() {
        let host = host_with_gamut_b();
        let overlay = host.current().unwrap();

        let mut gate = PointerGate::new(GateConfig {
            edit_mode: false,
            policy: SuppressionPolicy::StopImmediatePropagation,
        });
        let mut event = PointerEvent::new(PointerKind::Move, Point2D::new(0.0, 0.0));
        assert!(!gate.handle(&mut event, overlay));
        assert_eq!(event.disposition, Disposition::all());

        gate.set_policy(SuppressionPolicy::ReportOnly);
        let mut event = PointerEvent::new(PointerKind::Move, Point2D::new(0.0, 0.0));
        assert!(!gate.handle(&mut event, overlay));
        assert_eq!(event.disposition, Disposition::empty());
    }

    #[test]
    fn toggling_edit_mode() {
        let host = host_with_gamut_b();
        let overlay = host.current().unwrap();
        let mut gate = PointerGate::new(GateConfig::default());

        gate.set_edit_mode(true);
        let mut event = PointerEvent::new(PointerKind::Down, Point2D::new(-1000.0, -1000.0));
        gate.handle(&mut event, overlay);
        assert!(!event.default_prevented());

        gate.set_edit_mode(false);
        let mut event = PointerEvent::new(PointerKind::Down, Point2D::new(-1000.0, -1000.0));
        gate.handle(&mut event, overlay);
        assert!(event.default_prevented());
    }

    #[test]
    fn blocker_blocks_until_allowed() {
        let mut blocker = EventBlocker::new([PointerKind::Down, PointerKind::Move], true);

        let mut down = PointerEvent::new(PointerKind::Down, Point2D::new(1.0, 1.0));
        assert!(blocker.handle(&mut down));
        assert!(down
            .disposition
            .contains(Disposition::IMMEDIATE_PROPAGATION_STOPPED));
        assert!(!down.default_prevented());

        let mut up = PointerEvent::new(PointerKind::Up, Point2D::new(1.0, 1.0));
        assert!(!blocker.handle(&mut up));
        assert_eq!(up.disposition, Disposition::empty());

        blocker.set_allowed(true);
        let mut down = PointerEvent::new(PointerKind::Down, Point2D::new(1.0, 1.0));
        assert!(!blocker.handle(&mut down));
        assert_eq!(down.disposition, Disposition::empty());
    }

    #[test]
    fn blocker_ignores_non_wheel_pickers() {
        let blocker = EventBlocker::new([PointerKind::Down], false);
        let mut down = PointerEvent::new(PointerKind::Down, Point2D::new(1.0, 1.0));
        assert!(!blocker.handle(&mut down));
        assert!(!blocker.allowed());
    }

    #[test]
    fn policy_names() {
        let policy: SuppressionPolicy =
            serde_json::from_str("\"stopImmediatePropagation\"").unwrap();
        assert_eq!(policy, SuppressionPolicy::StopImmediatePropagation);
        assert_eq!(
            serde_json::to_string(&SuppressionPolicy::ReportOnly).unwrap(),
            "\"reportOnly\""
        );
    }
}

//! Host supplied settings for one gamut overlay.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    gamut::GamutId,
    pointer::{GateConfig, SuppressionPolicy},
    raster::FillColor,
};

/// Settings a host passes in for one picker's overlay.
///
/// ```rust
/// let config: gamut_wheel::OverlayConfig =
///     serde_json::from_str(r##"{"gamut": "B", "size": 256, "fillColor": "#1976d2"}"##).unwrap();
/// assert_eq!(config.gamut_id(), Some(gamut_wheel::GamutId::B));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayConfig {
    /// Gamut name, `"A"`, `"B"`, `"C"` or `"none"`.
    pub gamut: String,
    /// Wheel diameter in pixels.
    pub size: i32,
    /// CSS style fill color, usually the theme's accent color.
    pub fill_color: String,
    /// While set, pointer events are never suppressed.
    pub edit_mode: bool,
    /// How events outside the gamut are suppressed.
    pub suppression: SuppressionPolicy,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            gamut: "none".to_string(),
            size: 0,
            fill_color: "#1976d2".to_string(),
            edit_mode: false,
            suppression: SuppressionPolicy::default(),
        }
    }
}

impl OverlayConfig {
    /// The configured gamut, `None` for "no overlay".
    pub fn gamut_id(&self) -> Option<GamutId> {
        GamutId::from_name(&self.gamut)
    }

    /// The parsed fill color.
    pub fn fill(&self) -> Result<FillColor> {
        self.fill_color.parse()
    }

    /// Settings for the pointer gate.
    pub fn gate(&self) -> GateConfig {
        GateConfig {
            edit_mode: self.edit_mode,
            policy: self.suppression,
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Dolly range, speed and damping.
pub struct ZoomOptions {
    /// Whether dolly gestures are honoured.
    #[schemars(title = "Enable Zoom")]
    pub enabled: bool,
    /// Closest allowed distance to the target plane along the dolly track.
    #[schemars(title = "Min Distance", range(min = 0.01, max = 100.0), extend("step" = 0.01))]
    pub min_distance: f32,
    /// Farthest allowed distance to the target plane along the dolly track.
    #[schemars(title = "Max Distance", range(min = 0.1, max = 1000.0), extend("step" = 0.1))]
    pub max_distance: f32,
    /// Exponent of the per-step zoom scale (`0.95^speed`).
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Fraction of the remaining zoom error removed per update (higher =
    /// snappier).
    #[schemars(title = "Zoom Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_alpha: f32,
    /// Starting position on the dolly track (0 = far, 1 = near).
    #[schemars(title = "Initial Zoom", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub initial_zoom: f32,
    /// Close-up distance requested by zoom-to-object.
    #[schemars(title = "Focus Distance", range(min = 0.01, max = 100.0), extend("step" = 0.1))]
    pub focus_distance: f32,
    /// Re-aim the dolly track through the pointer on wheel events instead
    /// of dollying along the current track.
    #[schemars(skip)]
    pub aim_wheel_at_pointer: bool,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            min_distance: 1.0,
            max_distance: 100.0,
            speed: 6.0,
            damping_alpha: 0.1,
            initial_zoom: 0.0,
            focus_distance: 3.0,
            aim_wheel_at_pointer: false,
        }
    }
}

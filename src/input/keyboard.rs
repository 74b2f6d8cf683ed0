use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Camera nudges that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// pan_left = "ArrowLeft"
/// zoom_in = "]"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Pan the view left.
    PanLeft,
    /// Pan the view up.
    PanUp,
    /// Pan the view right.
    PanRight,
    /// Pan the view down.
    PanDown,
    /// Dolly closer to the plane.
    ZoomIn,
    /// Dolly away from the plane.
    ZoomOut,
}

impl KeyAction {
    /// Whether the action pans (as opposed to zooming).
    pub fn is_pan(self) -> bool {
        matches!(
            self,
            Self::PanLeft | Self::PanUp | Self::PanRight | Self::PanDown
        )
    }
}

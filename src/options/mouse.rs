use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Mouse", inline)]
#[serde(default)]
/// Which mouse buttons start which gesture.
pub struct MouseBindings {
    /// Button that starts a dolly drag.
    pub zoom: MouseButton,
    /// Button that starts a pan drag.
    pub pan: MouseButton,
}

impl Default for MouseBindings {
    fn default() -> Self {
        Self {
            zoom: MouseButton::Middle,
            pan: MouseButton::Left,
        }
    }
}

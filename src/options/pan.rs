use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pan", inline)]
#[serde(default)]
/// Pan enablement and damping.
pub struct PanOptions {
    /// Whether pan gestures are honoured.
    #[schemars(title = "Enable Pan")]
    pub enabled: bool,
    /// Fraction of the remaining pan offset applied per update.
    #[schemars(title = "Pan Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_alpha: f32,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            damping_alpha: 0.1,
        }
    }
}

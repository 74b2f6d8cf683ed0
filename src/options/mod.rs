//! Controller configuration with TOML preset support.
//!
//! All tweakable knobs (dolly range and damping, pan damping, keyboard
//! nudges, mouse-button bindings) are consolidated here. Options serialize
//! to/from TOML for presets, and to/from JSON for web bridges.

mod keybindings;
mod mouse;
mod pan;
mod zoom;

use std::path::Path;

pub use keybindings::KeybindingOptions;
pub use mouse::MouseBindings;
pub use pan::PanOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::ZoomOptions;

use crate::camera::geometry::Plane;
use crate::error::ControlsError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ControlOptions {
    /// Informational mode tag; not interpreted by the controller.
    pub mode: String,
    /// Master switch; when `false` every input handler is a no-op.
    pub enabled: bool,
    /// Plane all panning and dollying is constrained to. Required.
    #[schemars(skip)]
    pub target: Option<Plane>,
    /// Dolly range, speed and damping.
    pub zoom: ZoomOptions,
    /// Pan enablement and damping.
    pub pan: PanOptions,
    /// Keyboard nudges.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Mouse-button bindings.
    pub mouse: MouseBindings,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            mode: "plane".to_owned(),
            enabled: true,
            target: None,
            zoom: ZoomOptions::default(),
            pan: PanOptions::default(),
            keybindings: KeybindingOptions::default(),
            mouse: MouseBindings::default(),
        }
    }
}

impl ControlOptions {
    /// Default options constrained to `target`.
    #[must_use]
    pub fn with_target(target: Plane) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    /// Set the dolly range.
    #[must_use]
    pub fn with_distance_range(mut self, min: f32, max: f32) -> Self {
        self.zoom.min_distance = min;
        self.zoom.max_distance = max;
        self
    }

    /// Set the starting zoom alpha.
    #[must_use]
    pub fn with_initial_zoom(mut self, alpha: f32) -> Self {
        self.zoom.initial_zoom = alpha;
        self
    }

    /// Zoom speed used for key presses.
    pub fn key_zoom_speed(&self) -> f32 {
        self.keybindings.zoom_speed.unwrap_or(self.zoom.speed)
    }

    /// Check the numeric invariants the controller relies on.
    pub fn validate(&self) -> Result<(), ControlsError> {
        let zoom = &self.zoom;
        if !(zoom.min_distance.is_finite() && zoom.min_distance > 0.0) {
            return Err(ControlsError::InvalidOptions(format!(
                "min_distance must be positive, got {}",
                zoom.min_distance
            )));
        }
        if !(zoom.max_distance.is_finite()
            && zoom.max_distance >= zoom.min_distance)
        {
            return Err(ControlsError::InvalidOptions(format!(
                "max_distance ({}) must be >= min_distance ({})",
                zoom.max_distance, zoom.min_distance
            )));
        }
        for (name, alpha) in [
            ("zoom.damping_alpha", zoom.damping_alpha),
            ("pan.damping_alpha", self.pan.damping_alpha),
        ] {
            if !(alpha > 0.0 && alpha <= 1.0) {
                return Err(ControlsError::InvalidOptions(format!(
                    "{name} must be in (0, 1], got {alpha}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&zoom.initial_zoom) {
            return Err(ControlsError::InvalidOptions(format!(
                "initial_zoom must be in [0, 1], got {}",
                zoom.initial_zoom
            )));
        }
        let speeds = [
            zoom.speed,
            zoom.focus_distance,
            self.keybindings.pan_speed,
            self.key_zoom_speed(),
        ];
        if speeds.iter().any(|s| !s.is_finite()) {
            return Err(ControlsError::InvalidOptions(
                "speeds and focus distance must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ControlOptions)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ControlsError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| ControlsError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Parse options from a JSON string. Missing fields use defaults.
    pub fn from_json(content: &str) -> Result<Self, ControlsError> {
        let mut opts: Self = serde_json::from_str(content)
            .map_err(|e| ControlsError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, ControlsError> {
        serde_json::to_string(self)
            .map_err(|e| ControlsError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ControlsError> {
        let content = std::fs::read_to_string(path)?;
        let opts = Self::from_toml(&content)?;
        log::info!("Loaded control options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ControlsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ControlsError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved control options to {}", path.display());
        Ok(())
    }
}

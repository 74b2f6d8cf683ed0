use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Keyboard nudges: step sizes and the action → key mapping.
pub struct KeybindingOptions {
    /// Whether key presses are honoured.
    pub enabled: bool,
    /// Pixels panned per key press.
    pub pan_speed: f32,
    /// Zoom speed exponent for key presses; falls back to the wheel speed.
    pub zoom_speed: Option<f32>,
    /// Maps action → key string (e.g. `PanLeft` → `"ArrowLeft"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::PanLeft, "ArrowLeft".into()),
            (KeyAction::PanUp, "ArrowUp".into()),
            (KeyAction::PanRight, "ArrowRight".into()),
            (KeyAction::PanDown, "ArrowDown".into()),
            (KeyAction::ZoomIn, "]".into()),
            (KeyAction::ZoomOut, "[".into()),
        ]);

        let mut opts = Self {
            enabled: true,
            pan_speed: 50.0,
            zoom_speed: None,
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

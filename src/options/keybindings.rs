use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Keys held down to move the camera or the selected object.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MovementKeys {
    /// Negative X.
    pub left: String,
    /// Positive X.
    pub right: String,
    /// Forward (camera) / world -Z (objects).
    pub forward: String,
    /// Backward (camera) / world +Z (objects).
    pub backward: String,
    /// Positive Y.
    pub up: String,
    /// Negative Y.
    pub down: String,
}

impl Default for MovementKeys {
    fn default() -> Self {
        Self {
            left: "KeyA".into(),
            right: "KeyD".into(),
            forward: "KeyW".into(),
            backward: "KeyS".into(),
            up: "KeyQ".into(),
            down: "KeyE".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleMode` → `"Space"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Continuous movement keys.
    pub movement: MovementKeys,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ToggleMode, "Space".into()),
            (KeyAction::PulseSelected, "KeyP".into()),
            (KeyAction::SpinSelected, "KeyR".into()),
            (KeyAction::ToggleInstructions, "KeyH".into()),
            (KeyAction::Deselect, "Escape".into()),
        ]);
        Self {
            bindings,
            movement: MovementKeys::default(),
        }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    /// Key string bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}

/// Short human-readable form of a key code (`"KeyW"` → `"W"`,
/// `"Digit1"` → `"1"`).
#[must_use]
pub fn display_key(key: &str) -> &str {
    key.strip_prefix("Key")
        .or_else(|| key.strip_prefix("Digit"))
        .unwrap_or(key)
}

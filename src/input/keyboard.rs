use glam::Vec3;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::engine::ViewerCommand;
use crate::options::MovementKeys;

/// Discrete viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_mode = "Space"
/// pulse_selected = "KeyP"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Switch between camera and selection mode.
    ToggleMode,
    /// Pulse the selected object.
    PulseSelected,
    /// Spin the selected object.
    SpinSelected,
    /// Show or hide the instruction panel.
    ToggleInstructions,
    /// Clear the selection.
    Deselect,
}

impl KeyAction {
    /// Every action, in instruction-panel order.
    pub const ALL: [Self; 5] = [
        Self::ToggleMode,
        Self::PulseSelected,
        Self::SpinSelected,
        Self::ToggleInstructions,
        Self::Deselect,
    ];

    /// The command this action issues.
    #[must_use]
    pub fn to_command(self) -> ViewerCommand {
        match self {
            Self::ToggleMode => ViewerCommand::ToggleMode,
            Self::PulseSelected => ViewerCommand::PulseSelected,
            Self::SpinSelected => ViewerCommand::SpinSelected,
            Self::ToggleInstructions => ViewerCommand::ToggleInstructions,
            Self::Deselect => ViewerCommand::Deselect,
        }
    }

    /// Short description for the instruction panel.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::ToggleMode => "toggle camera / selection mode",
            Self::PulseSelected => "pulse the selected object",
            Self::SpinSelected => "spin the selected object",
            Self::ToggleInstructions => "show / hide these instructions",
            Self::Deselect => "deselect",
        }
    }
}

/// Set of physical keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: FxHashSet<String>,
}

impl KeyboardState {
    /// Record a press. Returns `true` if the key was not already held.
    pub fn press(&mut self, code: &str) -> bool {
        if self.held.contains(code) {
            return false;
        }
        self.held.insert(code.to_owned())
    }

    /// Record a release.
    pub fn release(&mut self, code: &str) {
        let _ = self.held.remove(code);
    }

    /// Forget every held key (focus loss).
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Whether `code` is held.
    #[must_use]
    pub fn is_held(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    /// Per-axis direction from the held movement keys.
    ///
    /// x = right − left, y = up − down, z = forward − backward.
    #[must_use]
    pub fn movement_axis(&self, keys: &MovementKeys) -> Vec3 {
        let axis = |positive: &str, negative: &str| -> f32 {
            f32::from(u8::from(self.is_held(positive)))
                - f32::from(u8::from(self.is_held(negative)))
        };
        Vec3::new(
            axis(&keys.right, &keys.left),
            axis(&keys.up, &keys.down),
            axis(&keys.forward, &keys.backward),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_reports_only_new_keys() {
        let mut kb = KeyboardState::default();
        assert!(kb.press("KeyW"));
        assert!(!kb.press("KeyW"));
        kb.release("KeyW");
        assert!(kb.press("KeyW"));
    }

    #[test]
    fn movement_axis_combines_held_keys() {
        let keys = MovementKeys::default();
        let mut kb = KeyboardState::default();
        assert_eq!(kb.movement_axis(&keys), Vec3::ZERO);

        let _ = kb.press("KeyW");
        let _ = kb.press("KeyD");
        let _ = kb.press("KeyE");
        assert_eq!(kb.movement_axis(&keys), Vec3::new(1.0, -1.0, 1.0));

        let _ = kb.press("KeyS");
        let _ = kb.press("KeyA");
        assert_eq!(kb.movement_axis(&keys), Vec3::new(0.0, -1.0, 0.0));

        kb.release_all();
        assert_eq!(kb.movement_axis(&keys), Vec3::ZERO);
    }

    #[test]
    fn actions_map_to_commands() {
        assert_eq!(
            KeyAction::ToggleMode.to_command(),
            ViewerCommand::ToggleMode
        );
        assert_eq!(KeyAction::Deselect.to_command(), ViewerCommand::Deselect);
    }
}

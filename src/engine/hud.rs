//! Status text and the instruction panel.

use crate::input::KeyAction;
use crate::options::{display_key, KeybindingOptions};

/// Text the viewer shows on top of the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    mode_text: String,
    selection_text: String,
    instructions_visible: bool,
    instructions: Vec<String>,
    help_key: Option<String>,
    changed: bool,
}

impl Hud {
    /// HUD with the given initial texts and instructions built from
    /// `bindings`.
    #[must_use]
    pub fn new(
        mode_text: &str,
        selection_text: &str,
        instructions_visible: bool,
        bindings: &KeybindingOptions,
    ) -> Self {
        Self {
            mode_text: mode_text.to_owned(),
            selection_text: selection_text.to_owned(),
            instructions_visible,
            instructions: instruction_lines(bindings),
            help_key: help_key(bindings),
            changed: true,
        }
    }

    /// Current mode label.
    #[must_use]
    pub fn mode_text(&self) -> &str {
        &self.mode_text
    }

    /// Current selection label.
    #[must_use]
    pub fn selection_text(&self) -> &str {
        &self.selection_text
    }

    /// Whether the instruction panel is shown.
    #[must_use]
    pub fn instructions_visible(&self) -> bool {
        self.instructions_visible
    }

    /// Instruction panel lines.
    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Replace the mode label.
    pub fn set_mode_text(&mut self, text: &str) {
        if self.mode_text != text {
            text.clone_into(&mut self.mode_text);
            self.changed = true;
        }
    }

    /// Replace the selection label.
    pub fn set_selection_text(&mut self, text: &str) {
        if self.selection_text != text {
            text.clone_into(&mut self.selection_text);
            self.changed = true;
        }
    }

    /// Flip instruction panel visibility.
    pub fn toggle_instructions(&mut self) {
        self.instructions_visible = !self.instructions_visible;
        self.changed = true;
    }

    /// Rebuild the instruction lines after a rebinding.
    pub fn set_bindings(&mut self, bindings: &KeybindingOptions) {
        let lines = instruction_lines(bindings);
        let help = help_key(bindings);
        if lines != self.instructions || help != self.help_key {
            self.instructions = lines;
            self.help_key = help;
            self.changed = true;
        }
    }

    /// Whether anything changed since the last call.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Window title: `base | mode | selection`, followed by the instruction
    /// lines while the panel is shown, or by a help hint while it is hidden.
    #[must_use]
    pub fn title(&self, base: &str) -> String {
        let mut title =
            format!("{base} | {} | {}", self.mode_text, self.selection_text);
        if self.instructions_visible {
            title.push_str(" | ");
            title.push_str(&self.instructions.join("; "));
        } else if let Some(key) = &self.help_key {
            title.push_str(&format!(" | {key}: help"));
        }
        title
    }
}

fn help_key(bindings: &KeybindingOptions) -> Option<String> {
    bindings
        .key_for(KeyAction::ToggleInstructions)
        .map(|key| display_key(key).to_owned())
}

fn instruction_lines(bindings: &KeybindingOptions) -> Vec<String> {
    let m = &bindings.movement;
    let mut lines = vec![
        format!(
            "{}/{}/{}/{}: move",
            display_key(&m.forward),
            display_key(&m.left),
            display_key(&m.backward),
            display_key(&m.right)
        ),
        format!("{}/{}: up / down", display_key(&m.up), display_key(&m.down)),
        "Mouse: look around (camera mode)".to_owned(),
        "Left click: select / deselect (selection mode)".to_owned(),
    ];
    lines.extend(KeyAction::ALL.iter().filter_map(|action| {
        bindings
            .key_for(*action)
            .map(|key| format!("{}: {}", display_key(key), action.description()))
    }));
    lines
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status text shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "HUD", inline)]
#[serde(default)]
pub struct HudOptions {
    /// Mode label while flying the camera.
    #[schemars(title = "Camera Mode Label")]
    pub camera_mode: String,
    /// Mode label while selecting objects.
    #[schemars(title = "Selection Mode Label")]
    pub selection_mode: String,
    /// Selection label when nothing is selected.
    #[schemars(title = "No Selection Label")]
    pub no_selection: String,
    /// Selection label template; `{name}` is replaced by the object name.
    #[schemars(title = "Selected Template")]
    pub selected_template: String,
    /// Whether the instruction panel starts visible.
    #[schemars(title = "Show Instructions")]
    pub show_instructions: bool,
}

impl Default for HudOptions {
    fn default() -> Self {
        Self {
            camera_mode: "Camera mode".into(),
            selection_mode: "Selection mode".into(),
            no_selection: "No object selected".into(),
            selected_template: "{name} selected".into(),
            show_instructions: false,
        }
    }
}

impl HudOptions {
    /// Selection label for an object called `name`.
    #[must_use]
    pub fn selected_label(&self, name: &str) -> String {
        self.selected_template.replace("{name}", name)
    }
}

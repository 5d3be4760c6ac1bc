use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Selection-mode behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
pub struct SelectionOptions {
    /// Speed of the selected object in world units per second.
    #[schemars(title = "Object Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub object_speed: f32,
    /// Start the viewer in camera mode instead of selection mode.
    #[schemars(title = "Start In Camera Mode")]
    pub start_in_camera_mode: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            object_speed: 2.5,
            start_in_camera_mode: false,
        }
    }
}

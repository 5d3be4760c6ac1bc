//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera, selection, feedback animations,
//! keybindings, HUD text) are consolidated here. Options serialize
//! to/from TOML so presets can live next to scene files.

mod animation;
mod camera;
mod hud;
mod keybindings;
mod selection;

use std::path::Path;

pub use animation::{AnimationOptions, PulseOptions, SpinAxis, SpinOptions};
pub use camera::CameraOptions;
pub use hud::HudOptions;
pub use keybindings::{display_key, KeybindingOptions, MovementKeys};
use schemars::JsonSchema;
pub use selection::SelectionOptions;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Free-fly camera parameters.
    pub camera: CameraOptions,
    /// Selection-mode parameters.
    pub selection: SelectionOptions,
    /// Pulse and spin feedback animations.
    pub animation: AnimationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Status and instruction text.
    pub hud: HudOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ViewerError> {
        toml::from_str(content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationCurve;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
move_speed = 12.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.move_speed, 12.0);
        assert_eq!(opts.camera.look_sensitivity, 0.1);
        assert_eq!(opts.selection.object_speed, 2.5);
        assert_eq!(opts.animation.pulse.scale_multiplier, 1.5);
        assert_eq!(opts.animation.spin.angle_degrees, 360.0);
    }

    #[test]
    fn curve_can_be_authored_in_toml() {
        let toml_str = r#"
[animation.pulse.curve]
type = "keyframes"
keys = [
    { time = 0.0, value = 0.0 },
    { time = 0.3, value = 1.0 },
    { time = 1.0, value = 0.0 },
]

[animation.spin]
axis = "y"
curve = { type = "easing", function = "linear" }
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        let AnimationCurve::Keyframes { keys } = &opts.animation.pulse.curve
        else {
            panic!("expected keyframes");
        };
        assert_eq!(keys.len(), 3);
        assert_eq!(opts.animation.spin.axis, SpinAxis::Y);
        assert_eq!(opts.animation.spin.curve.evaluate(0.25), 0.25);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::ToggleMode)
        );
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::Deselect)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
        assert_eq!(opts.keybindings.movement.up, "KeyQ");
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera]\nmove_speed = \"fast\"")
            .unwrap_err();
        assert!(matches!(err, ViewerError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("selection"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("hud"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("move_speed").is_some());
        assert!(camera.get("znear").is_none());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = std::env::temp_dir()
            .join(format!("flyview-options-{}", std::process::id()));
        let path = dir.join("fast.toml");
        let mut opts = Options::default();
        opts.camera.move_speed = 20.0;
        opts.hud.selected_template = "Picked {name}".into();
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["fast".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}

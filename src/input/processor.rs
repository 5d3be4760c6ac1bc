//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (held keys, cursor
//! position, accumulated mouse motion) and the key-binding map. Edge events
//! (a bound key going down, a left click) become at most one
//! [`ViewerCommand`]; continuous input is polled once per frame through
//! [`InputProcessor::movement_axis`] and
//! [`InputProcessor::take_look_delta`].

use glam::{Vec2, Vec3};

use super::event::{InputEvent, MouseButton};
use super::keyboard::{KeyAction, KeyboardState};
use super::mouse::MouseState;
use crate::engine::ViewerCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     engine.execute(cmd);
/// }
/// let direction = input_processor.movement_axis();
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    keyboard: KeyboardState,
    mouse: MouseState,
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::default()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held keys are kept.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.mouse.cursor()
    }

    /// Direction from the held movement keys: x right, y up, z forward.
    #[must_use]
    pub fn movement_axis(&self) -> Vec3 {
        self.keyboard.movement_axis(&self.key_bindings.movement)
    }

    /// Mouse motion accumulated since the previous call.
    pub fn take_look_delta(&mut self) -> Vec2 {
        self.mouse.take_look_delta()
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::Key {
                code,
                pressed,
                repeat,
            } => self.handle_key(code, *pressed, *repeat),
            InputEvent::CursorMoved { x, y } => {
                self.mouse.set_cursor(*x, *y);
                None
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse.accumulate(*dx, *dy);
                None
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            } => Some(ViewerCommand::ClickHovered),
            InputEvent::MouseButton { .. } => None,
            InputEvent::FocusLost => {
                self.keyboard.release_all();
                let _ = self.mouse.take_look_delta();
                None
            }
        }
    }

    fn handle_key(
        &mut self,
        code: &str,
        pressed: bool,
        repeat: bool,
    ) -> Option<ViewerCommand> {
        if !pressed {
            self.keyboard.release(code);
            return None;
        }
        let newly_pressed = self.keyboard.press(code);
        if repeat || !newly_pressed {
            return None;
        }
        self.key_bindings.lookup(code).map(KeyAction::to_command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.into(),
            pressed,
            repeat: false,
        }
    }

    #[test]
    fn bound_keys_fire_once_per_press() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(&key("Space", true)),
            Some(ViewerCommand::ToggleMode)
        );
        let repeat = InputEvent::Key {
            code: "Space".into(),
            pressed: true,
            repeat: true,
        };
        assert_eq!(p.handle_event(&repeat), None);
        assert_eq!(p.handle_event(&key("Space", true)), None);
        assert_eq!(p.handle_event(&key("Space", false)), None);
        assert_eq!(
            p.handle_event(&key("Space", true)),
            Some(ViewerCommand::ToggleMode)
        );
    }

    #[test]
    fn movement_keys_are_held_not_commands() {
        let mut p = InputProcessor::new();
        assert_eq!(p.handle_event(&key("KeyW", true)), None);
        assert_eq!(p.handle_event(&key("KeyQ", true)), None);
        assert_eq!(p.movement_axis(), Vec3::new(0.0, 1.0, 1.0));
        let _ = p.handle_event(&key("KeyW", false));
        assert_eq!(p.movement_axis(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(&key("KeyA", true));
        let _ = p.handle_event(&InputEvent::MouseMotion { dx: 3.0, dy: 1.0 });
        let _ = p.handle_event(&InputEvent::FocusLost);
        assert_eq!(p.movement_axis(), Vec3::ZERO);
        assert_eq!(p.take_look_delta(), Vec2::ZERO);
    }

    #[test]
    fn look_delta_accumulates_and_drains() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(&InputEvent::MouseMotion { dx: 2.0, dy: -1.0 });
        let _ = p.handle_event(&InputEvent::MouseMotion { dx: 3.0, dy: 4.0 });
        assert_eq!(p.take_look_delta(), Vec2::new(5.0, 3.0));
        assert_eq!(p.take_look_delta(), Vec2::ZERO);
    }

    #[test]
    fn only_left_press_clicks() {
        let mut p = InputProcessor::new();
        let press = |button, pressed| InputEvent::MouseButton { button, pressed };
        assert_eq!(
            p.handle_event(&press(MouseButton::Left, true)),
            Some(ViewerCommand::ClickHovered)
        );
        assert_eq!(p.handle_event(&press(MouseButton::Left, false)), None);
        assert_eq!(p.handle_event(&press(MouseButton::Right, true)), None);
    }

    #[test]
    fn rebinding_takes_effect() {
        let mut bindings = KeybindingOptions::default();
        let _ = bindings
            .bindings
            .insert(KeyAction::ToggleMode, "Tab".into());
        let mut p = InputProcessor::with_key_bindings(bindings);
        assert_eq!(p.handle_event(&key("Space", true)), None);
        assert_eq!(
            p.handle_event(&key("Tab", true)),
            Some(ViewerCommand::ToggleMode)
        );
    }

    #[test]
    fn cursor_tracks_last_position() {
        let mut p = InputProcessor::new();
        assert_eq!(p.cursor(), None);
        let _ = p.handle_event(&InputEvent::CursorMoved { x: 10.0, y: 20.0 });
        assert_eq!(p.cursor(), Some(Vec2::new(10.0, 20.0)));
    }
}

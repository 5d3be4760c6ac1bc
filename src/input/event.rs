/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// tracks held keys and mouse motion and converts edge events into
/// [`ViewerCommand`](crate::engine::ViewerCommand) values.
///
/// # Example
///
/// ```ignore
/// let event = InputEvent::Key { code: "Space".into(), pressed: true, repeat: false };
/// if let Some(cmd) = engine.handle_input(&event) {
///     log::debug!("{cmd:?}");
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// `winit::keyboard::KeyCode` debug name (`"KeyW"`, `"Space"`).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Auto-repeat of a held key.
        repeat: bool,
    },
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Raw relative mouse motion, independent of the cursor.
    MouseMotion {
        /// Horizontal motion in pixels (positive = right).
        dx: f32,
        /// Vertical motion in pixels (positive = down).
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window lost keyboard focus.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

use glam::Vec2;

/// Cursor position and accumulated relative motion.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MouseState {
    cursor: Option<Vec2>,
    look_delta: Vec2,
}

impl MouseState {
    pub(crate) fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Some(Vec2::new(x, y));
    }

    pub(crate) fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub(crate) fn accumulate(&mut self, dx: f32, dy: f32) {
        self.look_delta += Vec2::new(dx, dy);
    }

    /// Motion since the last call.
    pub(crate) fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }
}

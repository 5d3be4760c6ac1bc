use std::fmt;

/// What mouse and movement keys control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    /// Mouse looks around, movement keys fly the camera.
    Camera,
    /// Mouse hovers and clicks objects, movement keys move the selection.
    #[default]
    Selection,
}

impl InteractionMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Camera => Self::Selection,
            Self::Selection => Self::Camera,
        }
    }

    /// Whether this is [`InteractionMode::Camera`].
    #[must_use]
    pub fn is_camera(self) -> bool {
        self == Self::Camera
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera => write!(f, "camera"),
            Self::Selection => write!(f, "selection"),
        }
    }
}

//! Serializable scene files.
//!
//! ```toml
//! [camera]
//! position = [0.0, 2.0, 8.0]
//! pitch_degrees = -10.0
//!
//! [[objects]]
//! name = "Cube"
//! shape = "cube"
//! position = [-2.0, 0.5, 0.0]
//! color = [0.9, 0.3, 0.25]
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::object::{Shape, Transform};

/// Initial camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Rotation about the camera's right axis; positive looks up.
    pub pitch_degrees: f32,
    /// Rotation about world up; positive turns left.
    pub yaw_degrees: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 8.0),
            pitch_degrees: -10.0,
            yaw_degrees: 0.0,
        }
    }
}

impl CameraPose {
    /// Reason this pose cannot be used, if any.
    #[must_use]
    pub fn problem(&self) -> Option<String> {
        let finite = self.position.is_finite()
            && self.pitch_degrees.is_finite()
            && self.yaw_degrees.is_finite();
        (!finite).then(|| "camera pose has non-finite values".to_owned())
    }
}

/// One object entry of a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    /// Display name.
    pub name: String,
    /// Primitive geometry.
    #[serde(default)]
    pub shape: Shape,
    /// World position.
    #[serde(default)]
    pub position: Vec3,
    /// XYZ Euler rotation in degrees.
    #[serde(default)]
    pub rotation_degrees: Vec3,
    /// Per-axis scale.
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    /// Linear RGB color.
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    /// Whether the object can be hovered and clicked.
    #[serde(default = "default_selectable")]
    pub selectable: bool,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

fn default_color() -> [f32; 3] {
    [0.7, 0.7, 0.7]
}

fn default_selectable() -> bool {
    true
}

impl ObjectDescription {
    /// Selectable object with default transform and color.
    #[must_use]
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            position: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: unit_scale(),
            color: default_color(),
            selectable: default_selectable(),
        }
    }

    /// Set the world position.
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the per-axis scale.
    #[must_use]
    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set the XYZ Euler rotation in degrees.
    #[must_use]
    pub fn rotated(mut self, degrees: Vec3) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Set the color.
    #[must_use]
    pub fn colored(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Mark as scenery: rendered, never hovered or clicked.
    #[must_use]
    pub fn scenery(mut self) -> Self {
        self.selectable = false;
        self
    }

    /// Transform described by this entry.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::from_position(self.position)
            .with_euler_degrees(self.rotation_degrees)
            .with_scale(self.scale)
    }

    /// Reason this entry cannot be placed in a scene, if any.
    #[must_use]
    pub fn problem(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("object with an empty name".into());
        }
        let finite = self.position.is_finite()
            && self.rotation_degrees.is_finite()
            && self.scale.is_finite()
            && self.color.iter().all(|c| c.is_finite());
        if !finite {
            return Some(format!("object '{}' has non-finite values", self.name));
        }
        None
    }
}

/// Complete scene file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Starting camera pose.
    pub camera: CameraPose,
    /// Objects in draw order.
    pub objects: Vec<ObjectDescription>,
}

use std::fmt;

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ObjectId
// ---------------------------------------------------------------------------

/// Stable identifier of a scene object.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Position, rotation and scale of an object in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, rotation or scaling.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Identity transform moved to `position`.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Replace the rotation with XYZ Euler angles in degrees.
    #[must_use]
    pub fn with_euler_degrees(mut self, degrees: Vec3) -> Self {
        self.rotation = Quat::from_euler(
            EulerRot::XYZ,
            degrees.x.to_radians(),
            degrees.y.to_radians(),
            degrees.z.to_radians(),
        );
        self
    }

    /// Replace the scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation as XYZ Euler angles in degrees.
    #[must_use]
    pub fn euler_degrees(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }

    /// Local-to-world matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.position,
        )
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Primitive geometry of an object, centered on its local origin.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned unit cube spanning [-0.5, 0.5] on each axis.
    #[default]
    Cube,
    /// Sphere of radius 0.5.
    Sphere,
}

impl Shape {
    /// Radius of the local-space bounding sphere.
    #[must_use]
    pub fn local_radius(self) -> f32 {
        match self {
            Self::Cube => 0.5 * 3.0_f32.sqrt(),
            Self::Sphere => 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// SceneObject
// ---------------------------------------------------------------------------

/// A renderable object in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Identifier assigned by the owning [`Scene`](super::Scene).
    pub id: ObjectId,
    /// Name shown in the HUD when selected.
    pub name: String,
    /// Primitive geometry.
    pub shape: Shape,
    /// World transform (animated in place by pulse/spin feedback).
    pub transform: Transform,
    /// Linear RGB base color.
    pub color: [f32; 3],
    /// Whether the object reacts to hover and clicks.
    pub selectable: bool,
}

impl SceneObject {
    /// World-space bounding sphere as (center, radius).
    #[must_use]
    pub fn bounding_sphere(&self) -> (Vec3, f32) {
        let scale = self.transform.scale.abs().max_element();
        (
            self.transform.position,
            self.shape.local_radius() * scale,
        )
    }
}

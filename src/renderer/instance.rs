//! Per-object instance data and frustum culling.

use glam::{Mat4, Vec3};

use crate::camera::Frustum;
use crate::scene::{ObjectId, Scene, SceneObject, Shape};

/// Blend toward white for the hovered object.
const HOVER_LIGHTEN: f32 = 0.3;
/// Selection tint color and blend weight.
const SELECTED_TINT: Vec3 = Vec3::new(1.0, 0.78, 0.2);
const SELECTED_WEIGHT: f32 = 0.45;

/// Highlight state of a drawn object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Plain.
    None,
    /// Under the cursor.
    Hovered,
    /// Currently selected. Takes precedence over hover.
    Selected,
}

impl Highlight {
    /// Highlight of `id` given the current hover and selection.
    #[must_use]
    pub fn of(
        id: ObjectId,
        hovered: Option<ObjectId>,
        selected: Option<ObjectId>,
    ) -> Self {
        if selected == Some(id) {
            Self::Selected
        } else if hovered == Some(id) {
            Self::Hovered
        } else {
            Self::None
        }
    }

    /// Rim strength passed to the shader.
    fn rim(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Hovered => 0.5,
            Self::Selected => 1.0,
        }
    }

    /// Tint `base` for this highlight.
    #[must_use]
    pub fn tint(self, base: Vec3) -> Vec3 {
        match self {
            Self::None => base,
            Self::Hovered => base.lerp(Vec3::ONE, HOVER_LIGHTEN),
            Self::Selected => base.lerp(SELECTED_TINT, SELECTED_WEIGHT),
        }
    }
}

/// GPU instance record: model matrix, normal matrix and tinted color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectInstance {
    /// Object-to-world transform.
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of `model` for normals.
    pub normal: [[f32; 4]; 4],
    /// RGB color; alpha carries the highlight rim strength.
    pub color: [f32; 4],
}

impl ObjectInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
        6 => Float32x4, 7 => Float32x4, 8 => Float32x4, 9 => Float32x4,
        10 => Float32x4,
    ];

    /// Per-instance buffer layout at slot 1.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Instance for `object` drawn with `highlight`.
    #[must_use]
    pub fn new(object: &SceneObject, highlight: Highlight) -> Self {
        let model = object.transform.matrix();
        let normal = if model.determinant().abs() <= f32::EPSILON {
            Mat4::IDENTITY
        } else {
            model.inverse().transpose()
        };
        let color = highlight.tint(Vec3::from_array(object.color));
        Self {
            model: model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
            color: color.extend(highlight.rim()).to_array(),
        }
    }
}

/// Visible instances grouped by mesh.
#[derive(Debug, Clone, Default)]
pub struct InstanceBatches {
    /// Instances drawn with the cube mesh.
    pub cubes: Vec<ObjectInstance>,
    /// Instances drawn with the sphere mesh.
    pub spheres: Vec<ObjectInstance>,
}

impl InstanceBatches {
    /// Total instance count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cubes.len() + self.spheres.len()
    }

    /// Whether nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build instances for every object whose bounding sphere touches the
/// frustum.
#[must_use]
pub fn build_instances(
    scene: &Scene,
    frustum: &Frustum,
    hovered: Option<ObjectId>,
    selected: Option<ObjectId>,
) -> InstanceBatches {
    let mut batches = InstanceBatches::default();
    for object in scene.objects() {
        let (center, radius) = object.bounding_sphere();
        if !frustum.intersects_sphere(center, radius) {
            continue;
        }
        let instance =
            ObjectInstance::new(object, Highlight::of(object.id, hovered, selected));
        match object.shape {
            Shape::Cube => batches.cubes.push(instance),
            Shape::Sphere => batches.spheres.push(instance),
        }
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::scene::ObjectDescription;

    fn frustum() -> Frustum {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            pitch: 0.0,
            yaw: 0.0,
            aspect: 1.0,
            fovy: 60.0,
            znear: 0.1,
            zfar: 100.0,
        };
        Frustum::from_view_projection(camera.build_matrix())
    }

    #[test]
    fn objects_outside_the_frustum_are_culled() {
        let mut scene = Scene::new();
        let _ = scene.add(ObjectDescription::new("Front", Shape::Cube));
        let _ = scene.add(
            ObjectDescription::new("Behind", Shape::Sphere)
                .at(Vec3::new(0.0, 0.0, 20.0)),
        );
        let _ = scene.add(
            ObjectDescription::new("Side", Shape::Sphere)
                .at(Vec3::new(50.0, 0.0, 0.0)),
        );
        let batches = build_instances(&scene, &frustum(), None, None);
        assert_eq!(batches.cubes.len(), 1);
        assert!(batches.spheres.is_empty());
    }

    #[test]
    fn selection_tint_wins_over_hover() {
        let id = ObjectId(3);
        assert_eq!(Highlight::of(id, Some(id), Some(id)), Highlight::Selected);
        assert_eq!(Highlight::of(id, Some(id), None), Highlight::Hovered);
        assert_eq!(Highlight::of(id, None, Some(ObjectId(4))), Highlight::None);
    }

    #[test]
    fn instance_carries_tint_and_rim() {
        let mut scene = Scene::new();
        let id = scene.add(
            ObjectDescription::new("Box", Shape::Cube)
                .at(Vec3::new(1.0, 2.0, 3.0))
                .colored([0.0, 0.0, 0.0]),
        );
        let object = scene.get(id).unwrap();

        let plain = ObjectInstance::new(object, Highlight::None);
        assert_eq!(plain.color, [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(plain.model[3], [1.0, 2.0, 3.0, 1.0]);

        let hovered = ObjectInstance::new(object, Highlight::Hovered);
        assert!((hovered.color[0] - HOVER_LIGHTEN).abs() < 1e-6);
        assert_eq!(hovered.color[3], 0.5);
    }
}

//! Scene model: a flat list of primitive objects plus the starting camera
//! pose.
//!
//! Objects are addressed by [`ObjectId`]. Scenes come from a TOML
//! [`SceneDescription`] or from [`Scene::demo`].

mod description;
mod object;

use std::path::Path;

pub use description::{CameraPose, ObjectDescription, SceneDescription};
use glam::Vec3;
pub use object::{ObjectId, SceneObject, Shape, Transform};

use crate::error::ViewerError;

/// The authoritative scene. Owns all objects in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    camera: CameraPose,
    next_object_id: u32,
}

impl Scene {
    /// Empty scene with the default camera pose.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from a parsed description.
    pub fn from_description(
        description: SceneDescription,
    ) -> Result<Self, ViewerError> {
        if let Some(problem) = description.camera.problem() {
            return Err(ViewerError::InvalidScene(problem));
        }
        let mut scene = Self::new();
        scene.camera = description.camera;
        for object in description.objects {
            if let Some(problem) = object.problem() {
                return Err(ViewerError::InvalidScene(problem));
            }
            let _ = scene.add(object);
        }
        Ok(scene)
    }

    /// Parse a TOML scene description.
    pub fn from_toml_str(content: &str) -> Result<Self, ViewerError> {
        let description: SceneDescription = toml::from_str(content)
            .map_err(|e| ViewerError::SceneParse(e.to_string()))?;
        Self::from_description(description)
    }

    /// Load a TOML scene file.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path)?;
        let scene = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded scene {} ({} objects)",
            path.display(),
            scene.len()
        );
        Ok(scene)
    }

    /// A small showcase scene: a floor, a few selectable primitives.
    #[must_use]
    pub fn demo() -> Self {
        let mut scene = Self::new();
        let objects = [
            ObjectDescription::new("Floor", Shape::Cube)
                .at(Vec3::new(0.0, -0.05, 0.0))
                .scaled(Vec3::new(20.0, 0.1, 20.0))
                .colored([0.32, 0.34, 0.38])
                .scenery(),
            ObjectDescription::new("Red Cube", Shape::Cube)
                .at(Vec3::new(-3.0, 0.5, 0.0))
                .colored([0.85, 0.25, 0.2]),
            ObjectDescription::new("Blue Sphere", Shape::Sphere)
                .at(Vec3::new(0.0, 0.75, 0.0))
                .scaled(Vec3::splat(1.5))
                .colored([0.2, 0.45, 0.9]),
            ObjectDescription::new("Green Pillar", Shape::Cube)
                .at(Vec3::new(3.0, 1.0, -1.0))
                .scaled(Vec3::new(0.8, 2.0, 0.8))
                .rotated(Vec3::new(0.0, 30.0, 0.0))
                .colored([0.25, 0.75, 0.35]),
            ObjectDescription::new("Gold Ball", Shape::Sphere)
                .at(Vec3::new(1.5, 0.4, 2.5))
                .scaled(Vec3::splat(0.8))
                .colored([0.95, 0.75, 0.2]),
        ];
        for object in objects {
            let _ = scene.add(object);
        }
        scene
    }

    /// Add an object and return its identifier.
    pub fn add(&mut self, description: ObjectDescription) -> ObjectId {
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        let transform = description.transform();
        self.objects.push(SceneObject {
            id,
            name: description.name,
            shape: description.shape,
            transform,
            color: description.color,
            selectable: description.selectable,
        });
        id
    }

    /// Remove an object, returning it if it existed.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    /// Object by id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Mutable object by id.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// First object with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// All objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Objects that react to hover and clicks.
    pub fn selectable(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| o.selectable)
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Starting camera pose.
    #[must_use]
    pub fn camera_pose(&self) -> CameraPose {
        self.camera
    }

    /// Replace the starting camera pose.
    pub fn set_camera_pose(&mut self, pose: CameraPose) {
        self.camera = pose;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_stable_across_removal() {
        let mut scene = Scene::new();
        let a = scene.add(ObjectDescription::new("A", Shape::Cube));
        let b = scene.add(ObjectDescription::new("B", Shape::Sphere));
        assert_ne!(a, b);
        assert!(scene.remove(a).is_some());
        let c = scene.add(ObjectDescription::new("C", Shape::Cube));
        assert_ne!(c, a);
        assert_eq!(scene.get(b).map(|o| o.name.as_str()), Some("B"));
        assert!(scene.get(a).is_none());
    }

    #[test]
    fn demo_scene_has_scenery_and_selectables() {
        let scene = Scene::demo();
        assert_eq!(scene.len(), 5);
        assert!(!scene.find_by_name("Floor").unwrap().selectable);
        assert_eq!(scene.selectable().count(), 4);
    }

    #[test]
    fn toml_scene_parses_with_defaults() {
        let toml_str = r#"
[camera]
position = [1.0, 2.0, 3.0]
yaw_degrees = 45.0

[[objects]]
name = "Crate"
position = [0.0, 0.5, 0.0]

[[objects]]
name = "Ball"
shape = "sphere"
scale = [2.0, 2.0, 2.0]
selectable = false
"#;
        let scene = Scene::from_toml_str(toml_str).unwrap();
        assert_eq!(scene.len(), 2);
        let pose = scene.camera_pose();
        assert_eq!(pose.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.yaw_degrees, 45.0);
        assert_eq!(pose.pitch_degrees, CameraPose::default().pitch_degrees);

        let crate_obj = scene.find_by_name("Crate").unwrap();
        assert_eq!(crate_obj.shape, Shape::Cube);
        assert_eq!(crate_obj.transform.scale, Vec3::ONE);
        assert!(crate_obj.selectable);

        let ball = scene.find_by_name("Ball").unwrap();
        assert_eq!(ball.shape, Shape::Sphere);
        assert!(!ball.selectable);
    }

    #[test]
    fn empty_names_are_rejected() {
        let err = Scene::from_toml_str("[[objects]]\nname = \"  \"\n")
            .unwrap_err();
        assert!(matches!(err, ViewerError::InvalidScene(_)));
    }

    #[test]
    fn non_finite_camera_pose_is_rejected() {
        for camera in [
            "[camera]\npitch_degrees = nan\n",
            "[camera]\nposition = [0.0, inf, 0.0]\n",
        ] {
            let err = Scene::from_toml_str(camera).unwrap_err();
            assert!(matches!(err, ViewerError::InvalidScene(_)), "{camera}");
        }
    }

    #[test]
    fn unknown_shapes_are_parse_errors() {
        let err = Scene::from_toml_str(
            "[[objects]]\nname = \"X\"\nshape = \"torus\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ViewerError::SceneParse(_)));
    }

    #[test]
    fn descriptions_round_trip_through_toml() {
        let description = SceneDescription {
            camera: CameraPose::default(),
            objects: vec![ObjectDescription::new("Solo", Shape::Sphere)
                .at(Vec3::new(0.0, 1.0, 0.0))],
        };
        let text = toml::to_string_pretty(&description).unwrap();
        let scene = Scene::from_toml_str(&text).unwrap();
        assert_eq!(
            scene.find_by_name("Solo").unwrap().transform.position,
            Vec3::new(0.0, 1.0, 0.0)
        );
    }
}

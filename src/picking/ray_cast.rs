//! CPU ray casting against scene primitives.

use glam::Vec3;

use super::ray::Ray;
use crate::scene::{ObjectId, Scene, SceneObject, Shape};

const HALF_EXTENT: f32 = 0.5;
const SPHERE_RADIUS: f32 = 0.5;

/// Object under a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Hit object.
    pub id: ObjectId,
    /// Distance along the ray (world units for a unit-length ray).
    pub distance: f32,
}

/// Ray parameter of the first hit with `object`, if any.
///
/// Objects with a degenerate (zero-scale) transform are never hit. A ray
/// starting inside an object hits it at t = 0.
#[must_use]
pub fn intersect_object(ray: &Ray, object: &SceneObject) -> Option<f32> {
    let model = object.transform.matrix();
    if model.determinant().abs() <= f32::EPSILON {
        return None;
    }
    let local = ray.transformed(&model.inverse());
    match object.shape {
        Shape::Cube => {
            ray_box(&local, Vec3::splat(-HALF_EXTENT), Vec3::splat(HALF_EXTENT))
        }
        Shape::Sphere => ray_sphere(&local, Vec3::ZERO, SPHERE_RADIUS),
    }
}

/// Nearest object along `ray`.
///
/// Every object takes part in occlusion; the hit is reported only when the
/// nearest object is selectable.
#[must_use]
pub fn pick(ray: &Ray, scene: &Scene) -> Option<PickHit> {
    let (object, distance) = scene
        .objects()
        .iter()
        .filter_map(|o| intersect_object(ray, o).map(|t| (o, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1))?;
    object.selectable.then_some(PickHit {
        id: object.id,
        distance,
    })
}

/// Slab test against an axis-aligned box.
fn ray_box(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray.direction.recip();
    let t1 = (min - ray.origin) * inv;
    let t2 = (max - ray.origin) * inv;
    let t_near = t1.min(t2).max_element();
    let t_far = t1.max(t2).min_element();
    if t_far < 0.0 || t_near > t_far {
        return None;
    }
    Some(t_near.max(0.0))
}

fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.direction.length_squared();
    if a <= f32::EPSILON {
        return None;
    }
    let half_b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sq = discriminant.sqrt();
    let t_far = (-half_b + sq) / a;
    if t_far < 0.0 {
        return None;
    }
    let t_near = (-half_b - sq) / a;
    Some(t_near.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ObjectDescription;

    fn towards_neg_z(x: f32, y: f32) -> Ray {
        Ray::new(Vec3::new(x, y, 10.0), Vec3::NEG_Z)
    }

    fn scene(objects: Vec<ObjectDescription>) -> Scene {
        let mut scene = Scene::new();
        for o in objects {
            let _ = scene.add(o);
        }
        scene
    }

    #[test]
    fn cube_hit_distance_is_in_world_units() {
        let s = scene(vec![ObjectDescription::new("Box", Shape::Cube)
            .scaled(Vec3::splat(2.0))]);
        let hit = pick(&towards_neg_z(0.0, 0.0), &s).unwrap();
        // front face at z = 1
        assert!((hit.distance - 9.0).abs() < 1e-4);
    }

    #[test]
    fn rotated_cube_uses_its_local_frame() {
        let s = scene(vec![ObjectDescription::new("Diamond", Shape::Cube)
            .rotated(Vec3::new(0.0, 45.0, 0.0))]);
        // Corner of the rotated cube points at the ray; the edge sits at
        // z = √2/2.
        let hit = pick(&towards_neg_z(0.0, 0.0), &s).unwrap();
        assert!((hit.distance - (10.0 - 0.5 * 2f32.sqrt())).abs() < 1e-4);
        // Outside the unrotated footprint but inside the rotated one.
        assert!(pick(&towards_neg_z(0.6, 0.0), &s).is_some());
    }

    #[test]
    fn sphere_hit_and_miss() {
        let s = scene(vec![ObjectDescription::new("Ball", Shape::Sphere)
            .at(Vec3::new(0.0, 1.0, 0.0))]);
        let hit = pick(&towards_neg_z(0.0, 1.0), &s).unwrap();
        assert!((hit.distance - 9.5).abs() < 1e-4);
        assert!(pick(&towards_neg_z(0.0, 1.6), &s).is_none());
    }

    #[test]
    fn nearest_object_wins() {
        let s = scene(vec![
            ObjectDescription::new("Far", Shape::Cube).at(Vec3::new(0.0, 0.0, -5.0)),
            ObjectDescription::new("Near", Shape::Sphere),
        ]);
        let hit = pick(&towards_neg_z(0.0, 0.0), &s).unwrap();
        assert_eq!(s.get(hit.id).unwrap().name, "Near");
    }

    #[test]
    fn scenery_occludes_but_is_never_picked() {
        let s = scene(vec![
            ObjectDescription::new("Wall", Shape::Cube)
                .at(Vec3::new(0.0, 0.0, 2.0))
                .scaled(Vec3::new(4.0, 4.0, 0.2))
                .scenery(),
            ObjectDescription::new("Hidden", Shape::Cube),
        ]);
        assert!(pick(&towards_neg_z(0.0, 0.0), &s).is_none());
        // Around the wall the selectable cube is reachable.
        let side = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::NEG_X);
        assert!(pick(&side, &s).is_some());
    }

    #[test]
    fn objects_behind_the_ray_are_ignored() {
        let s = scene(vec![ObjectDescription::new("Behind", Shape::Cube)
            .at(Vec3::new(0.0, 0.0, 20.0))]);
        assert!(pick(&towards_neg_z(0.0, 0.0), &s).is_none());
    }

    #[test]
    fn ray_from_inside_hits_at_zero() {
        let s = scene(vec![ObjectDescription::new("Room", Shape::Cube)
            .scaled(Vec3::splat(30.0))]);
        let hit = pick(&towards_neg_z(0.0, 0.0), &s).unwrap();
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn zero_scale_objects_are_not_hit() {
        let s = scene(vec![ObjectDescription::new("Flat", Shape::Cube)
            .scaled(Vec3::new(1.0, 0.0, 1.0))]);
        assert!(pick(&towards_neg_z(0.0, 0.0), &s).is_none());
    }
}

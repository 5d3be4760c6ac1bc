//! Per-object feedback animation scheduler.

use rustc_hash::FxHashMap;

use super::feedback::{AnimationStatus, FeedbackAnimation, FeedbackKind};
use crate::options::{PulseOptions, SpinOptions};
use crate::scene::{ObjectId, Scene, SceneObject};

/// Runs at most one feedback animation per object.
///
/// Starting an animation on an object stops whatever was running on it
/// first, restoring that animation's rest value before the new one captures
/// its own.
#[derive(Debug, Default)]
pub struct Animator {
    active: FxHashMap<ObjectId, FeedbackAnimation>,
}

impl Animator {
    /// Animator with nothing running.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a scale pulse on `object`.
    pub fn pulse(&mut self, object: &mut SceneObject, options: &PulseOptions) {
        self.stop(object);
        let animation = FeedbackAnimation::pulse(&object.transform, options);
        self.start(object, animation);
    }

    /// Start a spin on `object`.
    pub fn spin(&mut self, object: &mut SceneObject, options: &SpinOptions) {
        self.stop(object);
        let animation = FeedbackAnimation::spin(&object.transform, options);
        self.start(object, animation);
    }

    fn start(&mut self, object: &mut SceneObject, animation: FeedbackAnimation) {
        if animation.is_finished() {
            animation.restore(&mut object.transform);
            log::debug!(
                "{:?} on '{}' has no duration, skipped",
                animation.kind(),
                object.name
            );
            return;
        }
        log::debug!(
            "{:?} started on '{}' {}",
            animation.kind(),
            object.name,
            object.id
        );
        animation.apply(&mut object.transform);
        let _ = self.active.insert(object.id, animation);
    }

    /// Stop any animation on `object` and restore its rest value.
    pub fn stop(&mut self, object: &mut SceneObject) {
        if let Some(previous) = self.active.remove(&object.id) {
            previous.restore(&mut object.transform);
            log::debug!(
                "{:?} on '{}' interrupted at {:.2}s",
                previous.kind(),
                object.name,
                previous.elapsed()
            );
        }
    }

    /// Stop everything, restoring rest values on objects still in `scene`.
    pub fn stop_all(&mut self, scene: &mut Scene) {
        for (id, animation) in self.active.drain() {
            if let Some(object) = scene.get_mut(id) {
                animation.restore(&mut object.transform);
            }
        }
    }

    /// Advance every running animation by `dt` seconds.
    ///
    /// Animations whose object has left the scene are dropped.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        self.active.retain(|id, animation| {
            let Some(object) = scene.get_mut(*id) else {
                return false;
            };
            match animation.advance(dt, &mut object.transform) {
                AnimationStatus::Running => true,
                AnimationStatus::Finished => {
                    log::debug!(
                        "{:?} finished on '{}'",
                        animation.kind(),
                        object.name
                    );
                    false
                }
            }
        });
    }

    /// Whether `id` has an animation running.
    #[must_use]
    pub fn is_animating(&self, id: ObjectId) -> bool {
        self.active.contains_key(&id)
    }

    /// Kind of the animation running on `id`, if any.
    #[must_use]
    pub fn active_kind(&self, id: ObjectId) -> Option<FeedbackKind> {
        self.active.get(&id).map(FeedbackAnimation::kind)
    }

    /// Number of running animations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether nothing is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{ObjectDescription, Shape};

    fn scene_with_cube() -> (Scene, ObjectId) {
        let mut scene = Scene::new();
        let id = scene.add(
            ObjectDescription::new("Cube", Shape::Cube)
                .scaled(Vec3::new(1.0, 2.0, 1.0))
                .rotated(Vec3::new(0.0, 20.0, 0.0)),
        );
        (scene, id)
    }

    fn run_to_completion(animator: &mut Animator, scene: &mut Scene) {
        for _ in 0..200 {
            animator.update(1.0 / 60.0, scene);
        }
    }

    #[test]
    fn pulse_completes_and_restores_scale() {
        let (mut scene, id) = scene_with_cube();
        let rest = scene.get(id).unwrap().transform;
        let mut animator = Animator::new();

        animator.pulse(scene.get_mut(id).unwrap(), &PulseOptions::default());
        assert_eq!(animator.active_kind(id), Some(FeedbackKind::Pulse));

        animator.update(0.5, &mut scene);
        assert!(scene.get(id).unwrap().transform.scale.y > rest.scale.y);

        run_to_completion(&mut animator, &mut scene);
        assert!(animator.is_empty());
        assert_eq!(scene.get(id).unwrap().transform, rest);
    }

    #[test]
    fn restarting_does_not_drift_the_rest_value() {
        let (mut scene, id) = scene_with_cube();
        let rest = scene.get(id).unwrap().transform;
        let mut animator = Animator::new();
        let options = PulseOptions::default();

        for _ in 0..5 {
            animator.pulse(scene.get_mut(id).unwrap(), &options);
            animator.update(0.4, &mut scene);
        }
        assert_eq!(animator.len(), 1);

        run_to_completion(&mut animator, &mut scene);
        assert_eq!(scene.get(id).unwrap().transform.scale, rest.scale);
    }

    #[test]
    fn spin_replaces_running_pulse() {
        let (mut scene, id) = scene_with_cube();
        let rest = scene.get(id).unwrap().transform;
        let mut animator = Animator::new();

        animator.pulse(scene.get_mut(id).unwrap(), &PulseOptions::default());
        animator.update(0.5, &mut scene);
        animator.spin(scene.get_mut(id).unwrap(), &SpinOptions::default());

        assert_eq!(animator.len(), 1);
        assert_eq!(animator.active_kind(id), Some(FeedbackKind::Spin));
        assert_eq!(scene.get(id).unwrap().transform.scale, rest.scale);

        run_to_completion(&mut animator, &mut scene);
        assert_eq!(scene.get(id).unwrap().transform, rest);
    }

    #[test]
    fn zero_duration_completes_without_touching_the_object() {
        let (mut scene, id) = scene_with_cube();
        let rest = scene.get(id).unwrap().transform;
        let mut animator = Animator::new();
        let options = SpinOptions {
            duration: 0.0,
            angle_degrees: 90.0,
            ..SpinOptions::default()
        };

        animator.spin(scene.get_mut(id).unwrap(), &options);
        assert!(!animator.is_animating(id));
        assert_eq!(scene.get(id).unwrap().transform, rest);

        let pulse = PulseOptions {
            duration: -1.0,
            ..PulseOptions::default()
        };
        animator.pulse(scene.get_mut(id).unwrap(), &pulse);
        assert!(animator.is_empty());
        assert_eq!(scene.get(id).unwrap().transform, rest);
    }

    #[test]
    fn zero_duration_request_still_stops_a_running_animation() {
        let (mut scene, id) = scene_with_cube();
        let rest = scene.get(id).unwrap().transform;
        let mut animator = Animator::new();

        animator.pulse(scene.get_mut(id).unwrap(), &PulseOptions::default());
        animator.update(0.5, &mut scene);
        let instant = SpinOptions {
            duration: 0.0,
            ..SpinOptions::default()
        };
        animator.spin(scene.get_mut(id).unwrap(), &instant);
        assert!(animator.is_empty());
        assert_eq!(scene.get(id).unwrap().transform, rest);
    }

    #[test]
    fn removed_objects_drop_their_animation() {
        let (mut scene, id) = scene_with_cube();
        let mut animator = Animator::new();
        animator.spin(scene.get_mut(id).unwrap(), &SpinOptions::default());
        let _ = scene.remove(id);
        animator.update(0.1, &mut scene);
        assert!(!animator.is_animating(id));
    }

    #[test]
    fn stop_all_restores_every_object() {
        let (mut scene, a) = scene_with_cube();
        let b = scene.add(ObjectDescription::new("Ball", Shape::Sphere));
        let rest_a = scene.get(a).unwrap().transform;
        let rest_b = scene.get(b).unwrap().transform;
        let mut animator = Animator::new();

        animator.pulse(scene.get_mut(a).unwrap(), &PulseOptions::default());
        animator.spin(scene.get_mut(b).unwrap(), &SpinOptions::default());
        animator.update(0.3, &mut scene);
        animator.stop_all(&mut scene);

        assert!(animator.is_empty());
        assert_eq!(scene.get(a).unwrap().transform, rest_a);
        assert_eq!(scene.get(b).unwrap().transform, rest_b);
    }
}

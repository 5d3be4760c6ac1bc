use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;
use crate::scene::CameraPose;

const PITCH_LIMIT: f32 = 89.0;

/// First-person fly camera: mouse look plus translation along the camera's
/// own axes.
#[derive(Debug, Clone)]
pub struct FlyCameraController {
    /// Current camera state.
    pub camera: Camera,
    move_speed: f32,
    look_sensitivity: f32,
    clamp_pitch: bool,
}

impl FlyCameraController {
    /// Controller placed at `pose`.
    #[must_use]
    pub fn new(pose: CameraPose, options: &CameraOptions, aspect: f32) -> Self {
        let mut controller = Self {
            camera: Camera {
                eye: pose.position,
                pitch: pose.pitch_degrees,
                yaw: pose.yaw_degrees,
                aspect,
                fovy: options.fovy,
                znear: options.znear,
                zfar: options.zfar,
            },
            move_speed: options.move_speed,
            look_sensitivity: options.look_sensitivity,
            clamp_pitch: options.clamp_pitch,
        };
        controller.normalize_angles();
        controller
    }

    /// Apply a mouse delta in pixels.
    ///
    /// Moving the mouse right turns right; moving it down looks down.
    pub fn look(&mut self, delta: Vec2) {
        self.camera.yaw -= delta.x * self.look_sensitivity;
        self.camera.pitch -= delta.y * self.look_sensitivity;
        self.normalize_angles();
    }

    /// Move along the camera's local axes.
    ///
    /// `direction` is (right, up, forward), each component usually in
    /// {-1, 0, 1}.
    pub fn translate(&mut self, direction: Vec3, dt: f32) {
        let c = &self.camera;
        let offset = (c.right() * direction.x
            + c.up() * direction.y
            + c.forward() * direction.z)
            * (self.move_speed * dt);
        self.camera.eye += offset;
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Pick up new projection and speed settings without moving.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.move_speed = options.move_speed;
        self.look_sensitivity = options.look_sensitivity;
        self.clamp_pitch = options.clamp_pitch;
        self.normalize_angles();
    }

    /// Current pose, suitable for writing back into a scene file.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.camera.eye,
            pitch_degrees: self.camera.pitch,
            yaw_degrees: self.camera.yaw,
        }
    }

    fn normalize_angles(&mut self) {
        if self.clamp_pitch {
            self.camera.pitch =
                self.camera.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.camera.yaw = (self.camera.yaw + 180.0).rem_euclid(360.0) - 180.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(pose: CameraPose) -> FlyCameraController {
        FlyCameraController::new(pose, &CameraOptions::default(), 1.5)
    }

    fn origin() -> CameraPose {
        CameraPose {
            position: Vec3::ZERO,
            pitch_degrees: 0.0,
            yaw_degrees: 0.0,
        }
    }

    #[test]
    fn translate_displacement_is_direction_times_speed_times_dt() {
        let mut c = controller(origin());
        c.translate(Vec3::new(0.0, 0.0, 1.0), 0.5);
        // default speed 5 → 2.5 units forward (-Z)
        assert!((c.camera.eye - Vec3::new(0.0, 0.0, -2.5)).length() < 1e-5);

        c.translate(Vec3::new(1.0, 1.0, 0.0), 0.2);
        assert!((c.camera.eye - Vec3::new(1.0, 1.0, -2.5)).length() < 1e-5);
    }

    #[test]
    fn translation_follows_camera_orientation() {
        let mut c = controller(CameraPose {
            yaw_degrees: 90.0,
            ..origin()
        });
        c.translate(Vec3::Z, 1.0);
        assert!((c.camera.eye - Vec3::new(-5.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn look_inverts_mouse_axes_into_yaw_and_pitch() {
        let mut c = controller(origin());
        c.look(Vec2::new(100.0, 50.0));
        // sensitivity 0.1 deg/px
        assert!((c.camera.yaw - -10.0).abs() < 1e-4);
        assert!((c.camera.pitch - -5.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped_when_enabled() {
        let mut c = controller(origin());
        c.look(Vec2::new(0.0, -10_000.0));
        assert_eq!(c.camera.pitch, PITCH_LIMIT);

        let options = CameraOptions {
            clamp_pitch: false,
            ..CameraOptions::default()
        };
        let mut free = FlyCameraController::new(origin(), &options, 1.0);
        free.look(Vec2::new(0.0, -1_000.0));
        assert!((free.camera.pitch - 100.0).abs() < 1e-3);
    }

    #[test]
    fn yaw_wraps_into_half_open_range() {
        let mut c = controller(origin());
        c.look(Vec2::new(-2_000.0, 0.0));
        assert!(c.camera.yaw >= -180.0 && c.camera.yaw < 180.0);
        assert!((c.camera.yaw - -160.0).abs() < 1e-3);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut c = controller(origin());
        c.resize(800, 0);
        assert_eq!(c.camera.aspect, 1.5);
        c.resize(800, 400);
        assert_eq!(c.camera.aspect, 2.0);
    }
}

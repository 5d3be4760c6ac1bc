use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use crate::picking::Ray;

/// Perspective camera defined by eye position, Euler angles, and projection
/// parameters.
///
/// Orientation is yaw about world up followed by pitch about the camera's
/// right axis. With both angles at zero the camera looks down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Pitch in degrees; positive looks up.
    pub pitch: f32,
    /// Yaw in degrees; positive turns left.
    pub yaw: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for the headlight.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// World-space orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Unit up vector (tilts with pitch).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward(), self.up())
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// World-space ray through a cursor position given in physical pixels
    /// from the viewport's top-left corner.
    ///
    /// Returns `None` for a degenerate viewport.
    #[must_use]
    pub fn screen_ray(&self, cursor: Vec2, viewport: Vec2) -> Option<Ray> {
        if viewport.x < 1.0 || viewport.y < 1.0 {
            return None;
        }
        let x_ndc = (cursor.x / viewport.x) * 2.0 - 1.0;
        let y_ndc = 1.0 - (cursor.y / viewport.y) * 2.0;

        let half_h = (0.5 * self.fovy.to_radians()).tan();
        let half_w = half_h * self.aspect;
        let dir = (self.forward()
            + self.right() * (x_ndc * half_w)
            + self.up() * (y_ndc * half_h))
            .normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }
        Some(Ray::new(self.eye, dir))
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 60.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.forward().to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 5.0),
            pitch: 0.0,
            yaw: 0.0,
            aspect: 1.0,
            fovy: 90.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn zero_angles_look_down_negative_z() {
        let c = camera();
        assert!(close(c.forward(), Vec3::NEG_Z));
        assert!(close(c.right(), Vec3::X));
        assert!(close(c.up(), Vec3::Y));
    }

    #[test]
    fn positive_yaw_turns_left_and_positive_pitch_looks_up() {
        let mut c = camera();
        c.yaw = 90.0;
        assert!(close(c.forward(), Vec3::NEG_X));
        c.yaw = 0.0;
        c.pitch = 90.0;
        assert!(close(c.forward(), Vec3::Y));
    }

    #[test]
    fn centre_ray_follows_forward() {
        let c = camera();
        let ray = c.screen_ray(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0))
            .unwrap();
        assert_eq!(ray.origin, c.eye);
        assert!(close(ray.direction, c.forward()));
    }

    #[test]
    fn corner_ray_matches_field_of_view() {
        let c = camera();
        // 90° fov with aspect 1: top-left corner is 45° up and 45° left.
        let ray = c.screen_ray(Vec2::ZERO, Vec2::new(100.0, 100.0)).unwrap();
        let expected = Vec3::new(-1.0, 1.0, -1.0).normalize();
        assert!(close(ray.direction, expected));
    }

    #[test]
    fn degenerate_viewport_has_no_ray() {
        assert!(camera().screen_ray(Vec2::ZERO, Vec2::new(0.0, 10.0)).is_none());
    }

    #[test]
    fn view_projection_puts_target_in_front() {
        let c = camera();
        let clip = c.build_matrix() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}

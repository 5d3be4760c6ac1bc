//! View frustum for culling
//!
//! Extracts the six clip planes from a view-projection matrix and tests
//! object bounding spheres against them.

use glam::{Mat4, Vec3, Vec4};

/// Plane `normal · p + distance = 0` with a unit normal pointing inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Offset from the origin along `normal`.
    pub distance: f32,
}

impl Plane {
    /// Plane from raw `(a, b, c, d)` coefficients, normalized.
    #[must_use]
    pub fn from_vec4(v: Vec4) -> Self {
        let len = v.truncate().length();
        if len > 0.0 {
            Self {
                normal: v.truncate() / len,
                distance: v.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from the plane; positive is inside.
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 inward-facing planes.
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// Left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Gribb/Hartmann extraction for a right-handed projection with [0, 1]
    /// depth.
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let (r0, r1, r2, r3) = (vp.row(0), vp.row(1), vp.row(2), vp.row(3));
        Self {
            planes: [
                Plane::from_vec4(r3 + r0),
                Plane::from_vec4(r3 - r0),
                Plane::from_vec4(r3 + r1),
                Plane::from_vec4(r3 - r1),
                Plane::from_vec4(r2),
                Plane::from_vec4(r3 - r2),
            ],
        }
    }

    /// Whether `point` lies inside every plane.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|p| p.signed_distance(point) >= 0.0)
    }

    /// Whether a sphere is at least partially inside.
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|p| p.signed_distance(center) >= -radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frustum() -> Frustum {
        let proj = Mat4::perspective_rh(60f32.to_radians(), 1.0, 0.1, 50.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn origin_is_visible_and_behind_is_not() {
        let f = frustum();
        assert!(f.contains_point(Vec3::ZERO));
        assert!(!f.contains_point(Vec3::new(0.0, 0.0, 20.0)));
        assert!(!f.contains_point(Vec3::new(0.0, 0.0, -100.0)));
    }

    #[test]
    fn spheres_straddling_a_plane_intersect() {
        let f = frustum();
        // Left plane at z=0 is x = -10·tan(30°) ≈ -5.77.
        assert!(!f.contains_point(Vec3::new(-6.5, 0.0, 0.0)));
        assert!(f.intersects_sphere(Vec3::new(-6.5, 0.0, 0.0), 1.0));
        assert!(!f.intersects_sphere(Vec3::new(-12.0, 0.0, 0.0), 1.0));
    }
}

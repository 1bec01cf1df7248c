//! Perspective projection parameters.
//!
//! [`Projection`] owns the field of view, aspect ratio and clipping distances,
//! and derives both the projection matrix and the clipping frustum from them.

use crate::clipper::Frustum;
use crate::math::mat4::Mat4;

/// Perspective projection parameters.
///
/// Stores the canonical projection parameters and provides methods to derive
/// the projection matrix and view-space frustum for clipping.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    /// Returns the vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Returns the horizontal field of view in radians.
    ///
    /// Computed from the vertical FOV and aspect ratio.
    pub fn fov_x(&self) -> f32 {
        2.0 * (self.aspect_ratio * (self.fov_y / 2.0).tan()).atan()
    }

    /// Returns the aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Returns the near clipping plane distance.
    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    /// Returns the far clipping plane distance.
    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Updates the aspect ratio (typically called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Generates the perspective projection matrix.
    ///
    /// Maps view space to clip space; after the divide by `w` (view-space z)
    /// visible points land in x, y in [-1, 1] and z in [0, 1].
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }

    /// Builds view-space frustum planes for clipping.
    ///
    /// Must be rebuilt whenever the field of view, aspect ratio or clipping
    /// distances change.
    pub fn frustum(&self) -> Frustum {
        Frustum::new(self.fov_x(), self.fov_y, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::clipper::FrustumPlane;
    use crate::math::vec3::Vec3;
    use crate::math::vec4::Vec4;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn fov_x_matches_aspect_ratio() {
        // With aspect ratio 1:1, fov_x should equal fov_y
        let proj = Projection::new(FRAC_PI_4, 1.0, 0.1, 100.0);
        assert_relative_eq!(proj.fov_x(), proj.fov_y(), epsilon = 1e-6);
    }

    #[test]
    fn fov_x_wider_with_higher_aspect() {
        // With wider aspect ratio, fov_x should be larger than fov_y
        let proj = Projection::new(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        assert!(proj.fov_x() > proj.fov_y());
    }

    #[test]
    fn from_degrees_converts_correctly() {
        let proj = Projection::from_degrees(45.0, 1.0, 0.1, 100.0);
        assert_relative_eq!(proj.fov_y(), FRAC_PI_4, epsilon = 1e-6);
    }

    #[test]
    fn frustum_edges_project_to_viewport_edges() {
        let proj = Projection::new(FRAC_PI_2, 2.0, 1.0, 10.0);
        let frustum = proj.frustum();
        let m = proj.matrix();

        // Points on the right and top side planes land on x = 1 and y = 1.
        let half_w = (proj.fov_x() / 2.0).tan() * 5.0;
        let right = Vec3::new(half_w, 0.0, 5.0);
        assert_relative_eq!(
            frustum.plane(FrustumPlane::Right).signed_distance(right),
            0.0,
            epsilon = 1e-4
        );
        assert_relative_eq!(m.mul_vec4_project(Vec4::from_vec3(right, 1.0)).x, 1.0, epsilon = 1e-5);

        let top = Vec3::new(0.0, 5.0, 5.0);
        assert_relative_eq!(
            frustum.plane(FrustumPlane::Top).signed_distance(top),
            0.0,
            epsilon = 1e-4
        );
        assert_relative_eq!(m.mul_vec4_project(Vec4::from_vec3(top, 1.0)).y, 1.0, epsilon = 1e-5);
    }
}

//! Object transform of a mesh.
//!
//! Input and animation code mutates it between frames; the geometry pass
//! only reads the world matrix it produces.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// Position, Euler rotation (radians; x pitch, y yaw, z roll) and scale.
///
/// Setters chain:
///
/// ```ignore
/// mesh.transform
///     .set_position_xyz(0.0, 0.0, 5.0)
///     .rotate_y(0.1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    pub fn set_rotation_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    /// Adds `angle` to the pitch.
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation.x += angle;
        self
    }

    /// Adds `angle` to the yaw.
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation.y += angle;
        self
    }

    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    /// World matrix `T * Rz * Ry * Rx * S`: a vertex is scaled, rotated
    /// about x, then y, then z, and finally translated.
    pub fn to_matrix(&self) -> Mat4 {
        let Vec3 { x, y, z } = self.rotation;
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            * Mat4::rotation_z(z)
            * Mat4::rotation_y(y)
            * Mat4::rotation_x(x)
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn default_is_identity() {
        let t = Transform::new();
        assert_eq!(t.position(), Vec3::ZERO);
        assert_eq!(t.rotation(), Vec3::ZERO);
        assert_eq!(t.scale(), Vec3::ONE);
        assert_eq!(t.to_matrix(), Mat4::identity());
    }

    #[test]
    fn setters_chain() {
        let mut t = Transform::new();
        t.set_position_xyz(1.0, 2.0, 3.0)
            .set_rotation_xyz(0.1, 0.2, 0.3)
            .rotate_x(0.4)
            .rotate_y(-0.2)
            .set_scale_uniform(2.0);

        assert_eq!(t.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(t.rotation().x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(t.rotation().y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(t.rotation().z, 0.3);
        assert_eq!(t.scale(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn scale_then_rotate_then_translate() {
        let mut t = Transform::new();
        t.set_position_xyz(0.0, 0.0, 5.0)
            .set_rotation_xyz(0.0, FRAC_PI_2, 0.0)
            .set_scale_uniform(2.0);

        // (1,0,0) scaled to (2,0,0), yawed onto -Z, then pushed to z = 5.
        let p = t.to_matrix() * Vec4::point(1.0, 0.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn x_rotation_applied_before_z() {
        let mut t = Transform::new();
        t.set_rotation_xyz(FRAC_PI_2, 0.0, FRAC_PI_2);

        // Rx takes +Y to +Z, which Rz leaves alone.
        let p = t.to_matrix() * Vec4::point(0.0, 1.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-5);
    }
}

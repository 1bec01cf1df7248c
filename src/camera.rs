//! Scene camera
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! # Orientation
//!
//! Orientation is stored as Euler angles and converted to a rotation matrix
//! when needed:
//!
//! - **Yaw** (`rotation.y`): positive = look right
//! - **Pitch** (`rotation.x`): positive = look down
//! - **Roll** (`rotation.z`)

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Camera with a world position and Euler rotation.
///
/// Both fields are plain data: input code mutates them between frames and
/// the engine rebuilds the view matrix from them every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub position: Vec3,
    /// Euler angles in radians: x=pitch, y=yaw, z=roll
    pub rotation: Vec3,
}

impl Camera {
    /// Creates a camera at the given position, looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Creates a camera at `position` looking toward `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self::new(position);
        let direction = target - position;
        let horizontal_len = (direction.x * direction.x + direction.z * direction.z).sqrt();

        if horizontal_len > f32::EPSILON {
            camera.rotation.y = direction.x.atan2(direction.z);
        }
        if direction.magnitude() > f32::EPSILON {
            camera.rotation.x = (-direction.y)
                .atan2(horizontal_len)
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        camera
    }

    /// Rotates the camera horizontally (around Y-axis).
    pub fn rotate_yaw(&mut self, delta: f32) {
        self.rotation.y = (self.rotation.y + delta).rem_euclid(std::f32::consts::TAU);
    }

    /// Rotates the camera vertically, clamped to just short of straight up
    /// or down.
    pub fn rotate_pitch(&mut self, delta: f32) {
        self.rotation.x = (self.rotation.x + delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Moves the camera along its forward direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.position = self.position + self.forward() * distance;
    }

    /// Returns the camera's forward direction (normalized).
    pub fn forward(&self) -> Vec3 {
        let rot = Mat4::rotation_y(self.rotation.y)
            * Mat4::rotation_x(self.rotation.x)
            * Mat4::rotation_z(self.rotation.z);
        // Third column of the rotation is +Z in world space
        Vec3::new(rot.get(0, 2), rot.get(1, 2), rot.get(2, 2))
    }

    /// Computes the world-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::view_from_euler(self.position, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn camera_starts_looking_forward() {
        let camera = Camera::new(Vec3::ZERO);
        assert_relative_eq!(camera.forward().z, 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.forward().x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn yaw_rotates_horizontally() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.rotate_yaw(FRAC_PI_2);

        assert_relative_eq!(camera.forward().x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.forward().z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.rotate_pitch(PI);
        assert_relative_eq!(camera.rotation.x, PITCH_LIMIT);

        camera.rotate_pitch(-2.0 * PI);
        assert_relative_eq!(camera.rotation.x, -PITCH_LIMIT);
    }

    #[test]
    fn positive_pitch_looks_down() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.rotate_pitch(0.5);
        assert!(camera.forward().y < 0.0);
    }

    #[test]
    fn move_forward_changes_position() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.move_forward(5.0);
        assert_relative_eq!(camera.position.z, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn view_matrix_puts_target_ahead() {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO);
        let origin = camera.view_matrix() * Vec4::point(0.0, 0.0, 0.0);
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(origin.z, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn looking_at_from_the_side() {
        let camera = Camera::looking_at(Vec3::new(-5.0, 3.0, 0.0), Vec3::ZERO);
        let origin = camera.view_matrix() * Vec4::point(0.0, 0.0, 0.0);

        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(origin.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(origin.z, 34.0_f32.sqrt(), epsilon = 1e-4);
    }
}

//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the sun,
/// where all rays are effectively parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is pointing (not where it comes from).
    direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::FORWARD,
        }
    }
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    ///
    /// Returns `None` for a zero-length direction.
    pub fn new(direction: Vec3) -> Option<Self> {
        direction
            .try_normalize()
            .map(|direction| DirectionalLight { direction })
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Flat-shading intensity for a unit face normal: `-dot(normal, direction)`.
    ///
    /// Not clamped here; [`colors::modulate`](crate::colors::modulate) clamps
    /// when the intensity is applied to a color.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        -normal.dot(self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_illumination() {
        // Light pointing toward +Z, normal facing back at it
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), 1.0);
    }

    #[test]
    fn test_facing_away_is_negative() {
        let light = DirectionalLight::default();
        assert_relative_eq!(light.intensity(Vec3::new(0.0, 0.0, 1.0)), -1.0);
    }

    #[test]
    fn test_angled_illumination() {
        // Light pointing straight down (-Y), normal at 45 degrees
        let light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0)).unwrap();
        let normal = Vec3::new(0.0, 1.0, 1.0).normalize();
        assert_relative_eq!(light.intensity(normal), 0.5_f32.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_direction_is_normalized() {
        let light = DirectionalLight::new(Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(light.direction().magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_direction_rejected() {
        assert!(DirectionalLight::new(Vec3::ZERO).is_none());
    }
}

use super::polygon::Polygon;
use crate::error::RenderError;
use crate::math::vec3::Vec3;

/// A plane defined by a point on the plane and its unit normal.
/// The normal points toward the "inside" (visible) half-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Returns the signed distance from a point to this plane.
    /// Positive = inside (same side as normal), Negative = outside.
    pub fn signed_distance(&self, position: Vec3) -> f32 {
        (position - self.point).dot(self.normal)
    }
}

/// The six frustum planes, in the order they are clipped against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrustumPlane {
    Left,
    Right,
    Top,
    Bottom,
    Near,
    Far,
}

impl FrustumPlane {
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Top,
        FrustumPlane::Bottom,
        FrustumPlane::Near,
        FrustumPlane::Far,
    ];
}

/// View-space frustum defined by 6 clipping planes.
///
/// ```text
///            /|
///          /  |
///        /    |
///  eye *------|----> +z
///        \    |
///          \  |
///            \|
///        near   far
/// ```
///
/// Side planes pass through the eye (the view-space origin); near and far
/// planes sit at `z_near`/`z_far` along +Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Creates a new view frustum from projection parameters.
    ///
    /// # Arguments
    /// * `fov_x` - Horizontal field of view in radians
    /// * `fov_y` - Vertical field of view in radians
    /// * `z_near` - Near clipping plane distance
    /// * `z_far` - Far clipping plane distance
    pub fn new(fov_x: f32, fov_y: f32, z_near: f32, z_far: f32) -> Self {
        let (sin_x, cos_x) = (fov_x / 2.0).sin_cos();
        let (sin_y, cos_y) = (fov_y / 2.0).sin_cos();
        let origin = Vec3::ZERO;

        Self {
            planes: [
                Plane::new(origin, Vec3::new(cos_x, 0.0, sin_x)),
                Plane::new(origin, Vec3::new(-cos_x, 0.0, sin_x)),
                Plane::new(origin, Vec3::new(0.0, -cos_y, sin_y)),
                Plane::new(origin, Vec3::new(0.0, cos_y, sin_y)),
                Plane::new(Vec3::new(0.0, 0.0, z_near), Vec3::FORWARD),
                Plane::new(Vec3::new(0.0, 0.0, z_far), -Vec3::FORWARD),
            ],
        }
    }

    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which as usize]
    }

    /// Clip a polygon in place against all frustum planes, in
    /// [`FrustumPlane::ALL`] order.
    ///
    /// A polygon that collapses below three vertices is left empty.
    pub fn clip(&self, polygon: &mut Polygon) -> Result<(), RenderError> {
        for plane in &self.planes {
            if polygon.is_empty() {
                break;
            }
            polygon.clip_against_plane(plane)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn frustum() -> Frustum {
        Frustum::new(FRAC_PI_2, FRAC_PI_2, 1.0, 10.0)
    }

    fn polygon(points: [Vec3; 3]) -> Polygon {
        Polygon::from_triangle(points, [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::ONE])
    }

    #[test]
    fn planes_have_unit_normals() {
        let f = frustum();
        for which in FrustumPlane::ALL {
            assert_relative_eq!(f.plane(which).normal.magnitude(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn point_on_axis_is_inside_every_plane() {
        let f = frustum();
        let p = Vec3::new(0.0, 0.0, 5.0);
        for which in FrustumPlane::ALL {
            assert!(f.plane(which).signed_distance(p) > 0.0, "{which:?}");
        }
    }

    #[test]
    fn side_planes_match_field_of_view() {
        let f = frustum();
        // 90 degree fov: the frustum edge is the line x = z.
        let on_edge = Vec3::new(5.0, 0.0, 5.0);
        assert_relative_eq!(
            f.plane(FrustumPlane::Right).signed_distance(on_edge),
            0.0,
            epsilon = 1e-5
        );
        assert!(f.plane(FrustumPlane::Right).signed_distance(Vec3::new(6.0, 0.0, 5.0)) < 0.0);
        assert!(f.plane(FrustumPlane::Top).signed_distance(Vec3::new(0.0, 6.0, 5.0)) < 0.0);
        assert!(f.plane(FrustumPlane::Bottom).signed_distance(Vec3::new(0.0, -6.0, 5.0)) < 0.0);
        assert!(f.plane(FrustumPlane::Left).signed_distance(Vec3::new(-6.0, 0.0, 5.0)) < 0.0);
    }

    #[test]
    fn triangle_inside_survives_untouched() {
        let points = [
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
        ];
        let mut p = polygon(points);
        frustum().clip(&mut p).unwrap();

        assert_eq!(p.len(), 3);
        for (vertex, expected) in p.vertices().iter().zip(points) {
            assert_eq!(vertex.position, expected);
        }
    }

    #[test]
    fn triangle_behind_camera_is_discarded() {
        let mut p = polygon([
            Vec3::new(-1.0, -1.0, -5.0),
            Vec3::new(0.0, 1.0, -5.0),
            Vec3::new(1.0, -1.0, -5.0),
        ]);
        frustum().clip(&mut p).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn triangle_larger_than_frustum_is_trimmed() {
        let mut p = polygon([
            Vec3::new(-100.0, -100.0, 5.0),
            Vec3::new(0.0, 100.0, 5.0),
            Vec3::new(100.0, -100.0, 5.0),
        ]);
        frustum().clip(&mut p).unwrap();

        assert!(p.len() >= 3);
        let f = frustum();
        for vertex in p.vertices() {
            for which in FrustumPlane::ALL {
                assert!(f.plane(which).signed_distance(vertex.position) >= -1e-3);
            }
        }
    }
}

use super::frustum::Plane;
use super::{MAX_POLYGON_TRIANGLES, MAX_POLYGON_VERTICES};
use crate::arena::FixedVec;
use crate::error::RenderError;
use crate::math::{vec2::Vec2, vec3::Vec3, vec4::Vec4};

/// A vertex with all attributes needed for clipping interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipVertex {
    pub position: Vec3,
    pub texcoord: Vec2,
}

impl ClipVertex {
    pub fn new(position: Vec3, texcoord: Vec2) -> Self {
        Self { position, texcoord }
    }

    /// Linearly interpolate between two vertices.
    /// Used when a polygon edge crosses a clipping plane.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            texcoord: self.texcoord.lerp(other.texcoord, t),
        }
    }
}

/// A triangle that survived clipping, still in view space.
///
/// Positions carry `w = 1` so they can go straight through the projection
/// matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipTriangle {
    pub positions: [Vec4; 3],
    pub texcoords: [Vec2; 3],
}

/// Triangles produced by fan-triangulating one clipped polygon.
pub type ClipTriangles = FixedVec<ClipTriangle, MAX_POLYGON_TRIANGLES>;

/// A convex polygon being clipped.
///
/// Starts life as a triangle, is clipped in place plane by plane and is
/// then fan-triangulated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Polygon {
    vertices: FixedVec<ClipVertex, MAX_POLYGON_VERTICES>,
}

impl Polygon {
    pub fn from_triangle(positions: [Vec3; 3], texcoords: [Vec2; 3]) -> Self {
        let vertices = [0, 1, 2].map(|i| ClipVertex::new(positions[i], texcoords[i]));
        Self {
            vertices: FixedVec::from_array(vertices),
        }
    }

    pub fn vertices(&self) -> &[ClipVertex] {
        self.vertices.as_slice()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has been completely clipped away.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Clip this polygon against a single plane (Sutherland-Hodgman).
    ///
    /// Each edge runs from the previous vertex to the current one, starting
    /// with the closing edge. An intersection is emitted when the two
    /// distances have strictly opposite signs, and the current vertex is kept
    /// when it lies on or inside the plane. Fewer than three surviving
    /// vertices empties the polygon.
    pub fn clip_against_plane(&mut self, plane: &Plane) -> Result<(), RenderError> {
        let overflow = |_| RenderError::PolygonOverflow {
            capacity: MAX_POLYGON_VERTICES,
        };

        let input = self.vertices.as_slice();
        let mut output = FixedVec::<ClipVertex, MAX_POLYGON_VERTICES>::new();

        let Some(mut prev) = input.last() else {
            return Ok(());
        };
        let mut prev_dist = plane.signed_distance(prev.position);

        for current in input {
            let current_dist = plane.signed_distance(current.position);

            if prev_dist * current_dist < 0.0 {
                let t = prev_dist / (prev_dist - current_dist);
                output.push(prev.lerp(current, t)).map_err(overflow)?;
            }
            if current_dist >= 0.0 {
                output.push(*current).map_err(overflow)?;
            }

            prev = current;
            prev_dist = current_dist;
        }

        if output.len() < 3 {
            output.clear();
        }
        self.vertices = output;
        Ok(())
    }

    /// Fan-triangulate from vertex 0: `(0, i + 1, i + 2)`.
    pub fn triangulate(&self) -> Result<ClipTriangles, RenderError> {
        let mut triangles = ClipTriangles::new();
        let v = self.vertices.as_slice();

        for i in 0..v.len().saturating_sub(2) {
            let corners = [v[0], v[i + 1], v[i + 2]];
            triangles
                .push(ClipTriangle {
                    positions: corners.map(|c| Vec4::from_vec3(c.position, 1.0)),
                    texcoords: corners.map(|c| c.texcoord),
                })
                .map_err(|_| RenderError::TriangleOverflow {
                    capacity: MAX_POLYGON_TRIANGLES,
                })?;
        }
        Ok(triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const UVS: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];

    fn near_plane() -> Plane {
        Plane::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn inside_triangle_is_unchanged() {
        let positions = [
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 3.0),
            Vec3::new(0.0, 1.0, 4.0),
        ];
        let mut p = Polygon::from_triangle(positions, UVS);
        p.clip_against_plane(&near_plane()).unwrap();

        assert_eq!(p.len(), 3);
        let kept: Vec<Vec3> = p.vertices().iter().map(|v| v.position).collect();
        assert_eq!(kept, positions);
    }

    #[test]
    fn outside_triangle_is_emptied() {
        let mut p = Polygon::from_triangle(
            [
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.5),
            ],
            UVS,
        );
        p.clip_against_plane(&near_plane()).unwrap();

        assert!(p.is_empty());
        assert!(p.triangulate().unwrap().is_empty());
    }

    #[test]
    fn one_vertex_outside_makes_a_quad() {
        let mut p = Polygon::from_triangle(
            [
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, 2.0),
                Vec3::new(0.0, 1.0, 2.0),
            ],
            UVS,
        );
        p.clip_against_plane(&near_plane()).unwrap();

        assert_eq!(p.len(), 4);
        let crossings: Vec<&ClipVertex> = p
            .vertices()
            .iter()
            .filter(|v| (v.position.z - 1.0).abs() < 1e-6)
            .collect();
        assert_eq!(crossings.len(), 2);

        assert_eq!(p.triangulate().unwrap().len(), 2);
    }

    #[test]
    fn intersection_interpolates_texcoords() {
        let mut p = Polygon::from_triangle(
            [
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, 2.0),
                Vec3::new(0.0, 1.0, 2.0),
            ],
            UVS,
        );
        p.clip_against_plane(&near_plane()).unwrap();

        // Closing edge (v2 -> v0) crosses first: 1/3 of the way from v2.
        let first = p.vertices()[0];
        assert_relative_eq!(first.position.y, 2.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(first.texcoord.y, 2.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(first.texcoord.x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn vertex_on_plane_is_kept_once() {
        let mut p = Polygon::from_triangle(
            [
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 2.0),
                Vec3::new(0.0, 1.0, 2.0),
            ],
            UVS,
        );
        p.clip_against_plane(&near_plane()).unwrap();
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn fan_triangulation_shares_first_vertex() {
        let mut p = Polygon::from_triangle(
            [
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, 2.0),
                Vec3::new(0.0, 1.0, 2.0),
            ],
            UVS,
        );
        p.clip_against_plane(&near_plane()).unwrap();
        let tris = p.triangulate().unwrap();
        let v = p.vertices();

        for (i, tri) in tris.iter().enumerate() {
            assert_eq!(tri.positions[0].to_vec3(), v[0].position);
            assert_eq!(tri.positions[1].to_vec3(), v[i + 1].position);
            assert_eq!(tri.positions[2].to_vec3(), v[i + 2].position);
            assert!(tri.positions.iter().all(|p| p.w == 1.0));
        }
    }
}

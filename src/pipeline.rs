//! Per-face geometry stages between the view transform and rasterization.

use crate::clipper::ClipTriangle;
use crate::math::{mat4::Mat4, vec3::Vec3, vec4::Vec4};
use crate::render::Triangle;

/// Unit normal of the triangle `abc`: `normalize((b - a) x (c - a))`.
///
/// `None` for degenerate (zero-area) triangles.
pub fn face_normal(points: &[Vec3; 3]) -> Option<Vec3> {
    let [a, b, c] = *points;
    (b - a).cross(c - a).try_normalize()
}

/// In view space the camera sits at the origin, so the ray from the face
/// back to the camera is just `-a`. A face whose normal points away from
/// that ray is facing away from the viewer.
pub fn is_back_facing(points: &[Vec3; 3], normal: Vec3) -> bool {
    let camera_ray = -points[0];
    normal.dot(camera_ray) < 0.0
}

/// Projects a clipped view-space triangle to pixel coordinates.
///
/// After the perspective divide, NDC x and y in [-1, 1] are scaled by half
/// the viewport and shifted to its center, with y flipped so it grows
/// downward. Each point keeps its projected z and its view-space depth in w.
pub fn project_to_screen(
    projection: &Mat4,
    clipped: &ClipTriangle,
    width: u32,
    height: u32,
    color: u32,
    light_intensity: f32,
) -> Triangle {
    let half_width = width as f32 / 2.0;
    let half_height = height as f32 / 2.0;

    let points = clipped.positions.map(|position| {
        let ndc = projection.mul_vec4_project(position);
        Vec4::new(
            ndc.x * half_width + half_width,
            -ndc.y * half_height + half_height,
            ndc.z,
            ndc.w,
        )
    });

    Triangle {
        points,
        texcoords: clipped.texcoords,
        color,
        light_intensity,
    }
}

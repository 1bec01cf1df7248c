//! Triangle rasterization.
//!
//! [`ScanlineRasterizer`] walks the covered scanlines of a screen-space
//! triangle and hands every covered pixel to a [`PixelShader`]. Overlays
//! (wireframe edges and vertex markers) are drawn separately and skip the
//! depth test.

mod scanline;
mod shader;

pub use scanline::ScanlineRasterizer;
pub use shader::{FlatShader, PixelShader, TextureShader};

use super::framebuffer::FrameBuffer;
use crate::math::{vec2::Vec2, vec4::Vec4};
use crate::texture::Texture;

/// Side length of the square drawn at each vertex in vertex-point mode.
pub const VERTEX_MARKER_SIZE: i32 = 4;

/// A triangle ready for rasterization in screen space.
///
/// `points[i].x`/`.y` are pixel coordinates, `.z` is the projected depth and
/// `.w` the view-space depth used for perspective correction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    pub points: [Vec4; 3],
    pub texcoords: [Vec2; 3],
    pub color: u32,
    /// Flat shading term shared by the whole triangle.
    pub light_intensity: f32,
}

/// How the interior of a triangle is colored.
#[derive(Clone, Copy, Debug)]
pub enum FillMode<'a> {
    /// Face color scaled by the light intensity.
    Solid,
    /// Perspective-correct texture lookup scaled by the light intensity.
    Textured(&'a Texture),
}

/// Barycentric weights of `p` with respect to triangle `abc`.
///
/// Returns `None` when the triangle has (near) zero area. The weights
/// always sum to one; all three are non-negative exactly when `p` lies in
/// the triangle, edges included.
#[inline]
pub fn barycentric_weights(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> Option<[f32; 3]> {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;
    let bc = c - b;
    let bp = p - b;

    // Twice the signed area of abc
    let area = ab.x * ac.y - ab.y * ac.x;
    if area.abs() < f32::EPSILON {
        return None;
    }

    let alpha = (bc.x * bp.y - bp.x * bc.y) / area;
    let beta = (ap.x * ac.y - ac.x * ap.y) / area;
    let gamma = 1.0 - alpha - beta;

    Some([alpha, beta, gamma])
}

/// Nearest pixel to a screen-space point.
#[inline]
fn pixel(p: Vec4) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

/// Draws the three edges of `triangle`.
pub fn draw_wireframe(triangle: &Triangle, color: u32, buffer: &mut FrameBuffer) {
    let [p0, p1, p2] = triangle.points.map(pixel);

    buffer.draw_line(p0.0, p0.1, p1.0, p1.1, color);
    buffer.draw_line(p1.0, p1.1, p2.0, p2.1, color);
    buffer.draw_line(p2.0, p2.1, p0.0, p0.1, color);
}

/// Draws a small square centered on each vertex of `triangle`.
pub fn draw_vertex_points(triangle: &Triangle, color: u32, buffer: &mut FrameBuffer) {
    let half = VERTEX_MARKER_SIZE / 2;
    for (x, y) in triangle.points.map(pixel) {
        buffer.draw_rect(
            x - half,
            y - half,
            VERTEX_MARKER_SIZE,
            VERTEX_MARKER_SIZE,
            color,
        );
    }
}

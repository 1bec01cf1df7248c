//! Scanline-based triangle rasterization.
//!
//! This module implements triangle rasterization using the classic scanline algorithm
//! with flat-top/flat-bottom triangle decomposition.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Decompose** the triangle at the middle vertex's Y into an upper
//!    (flat-bottom) and lower (flat-top) half
//! 3. **Rasterize** each scanline between the left and right edge
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//! ```
//!
//! # Coverage
//!
//! Edge positions come from inverse slopes (`dx / dy`) evaluated at each
//! pixel center. The span they give is widened by a pixel on both sides and
//! every candidate pixel is then tested with its barycentric weights, so a
//! pixel is written exactly when its center lies inside the triangle
//! (edges included), regardless of rounding in the span.
//!
//! # Depth and Perspective
//!
//! `1/w` is linear in screen space, so it is interpolated with the
//! barycentric weights and stored as `depth = 1 - 1/w` (smaller is nearer).

use super::{barycentric_weights, FillMode, FlatShader, PixelShader, TextureShader, Triangle};
use crate::math::vec2::Vec2;
use crate::render::framebuffer::FrameBuffer;

/// Scanline-based triangle rasterizer.
///
/// Stateless: everything it needs arrives with each triangle, and the only
/// thing it touches is the frame buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Sorts vertex indices by screen Y (ascending: top to bottom).
    ///
    /// Attributes stay in their original order; the shader receives weights
    /// for the original vertices, so sorting indices carries every attribute.
    fn sort_by_y(points: &[Vec2; 3]) -> [usize; 3] {
        let mut order = [0, 1, 2];
        // Three comparisons suffice for 3 elements (bubble sort)
        if points[order[1]].y < points[order[0]].y {
            order.swap(0, 1);
        }
        if points[order[2]].y < points[order[1]].y {
            order.swap(1, 2);
        }
        if points[order[1]].y < points[order[0]].y {
            order.swap(0, 1);
        }
        order
    }

    /// X of the edge `from -> to` at height `y`.
    #[inline]
    fn edge_x(from: Vec2, to: Vec2, y: f32) -> f32 {
        let dy = to.y - from.y;
        if dy.abs() < f32::EPSILON {
            return from.x;
        }
        let inv_slope = (to.x - from.x) / dy;
        from.x + (y - from.y) * inv_slope
    }

    /// Fills a triangle with the shader `mode` calls for.
    pub fn fill(&self, triangle: &Triangle, mode: FillMode, buffer: &mut FrameBuffer) {
        match mode {
            FillMode::Solid => {
                let shader = FlatShader::new(triangle.color, triangle.light_intensity);
                self.fill_triangle(triangle, &shader, buffer);
            }
            FillMode::Textured(texture) => {
                let shader = TextureShader::new(
                    texture,
                    triangle.texcoords,
                    triangle.points.map(|p| p.w),
                    triangle.light_intensity,
                );
                self.fill_triangle(triangle, &shader, buffer);
            }
        }
    }

    /// Fills a triangle, depth-testing every covered pixel.
    ///
    /// Triangles with zero area, or with a vertex at `w == 0`, draw nothing.
    pub fn fill_triangle<S: PixelShader>(
        &self,
        triangle: &Triangle,
        shader: &S,
        buffer: &mut FrameBuffer,
    ) {
        if triangle.points.iter().any(|p| p.w == 0.0) {
            return;
        }
        let points = triangle.points.map(|p| Vec2::new(p.x, p.y));
        let recip_w = triangle.points.map(|p| 1.0 / p.w);
        let [a, b, c] = points;
        if barycentric_weights(a, b, c, a).is_none() {
            return;
        }

        let [i0, i1, i2] = Self::sort_by_y(&points);
        let (v0, v1, v2) = (points[i0], points[i1], points[i2]);

        let max_x = buffer.width() as i32 - 1;
        let max_y = buffer.height() as i32 - 1;
        if max_x < 0 || max_y < 0 {
            return;
        }

        // First row whose pixel center is at or below each vertex.
        let top = (v0.y - 0.5).ceil() as i32;
        let mid = (v1.y - 0.5).ceil() as i32;
        let bottom = (v2.y - 0.5).floor() as i32;

        let span = |row: i32, xa: f32, xb: f32, buffer: &mut FrameBuffer| {
            let (x_start, x_end) = if xb < xa { (xb, xa) } else { (xa, xb) };
            let first = ((x_start - 0.5).ceil() as i32 - 1).max(0);
            let last = ((x_end - 0.5).floor() as i32 + 1).min(max_x);
            let cy = row as f32 + 0.5;

            for x in first..=last {
                let p = Vec2::new(x as f32 + 0.5, cy);
                let Some(lambda) = barycentric_weights(a, b, c, p) else {
                    return;
                };
                if lambda.iter().any(|&l| l < 0.0) {
                    continue;
                }

                let w = lambda[0] * recip_w[0] + lambda[1] * recip_w[1] + lambda[2] * recip_w[2];
                if w == 0.0 {
                    continue;
                }
                let depth = 1.0 - w;
                if buffer.depth_at(x, row).is_some_and(|stored| depth < stored) {
                    buffer.set_pixel_with_depth(x, row, depth, shader.shade(lambda, w));
                }
            }
        };

        // Upper half (flat-bottom): long edge v0 -> v2, short edge v0 -> v1
        for row in top.max(0)..mid.min(max_y + 1) {
            let cy = row as f32 + 0.5;
            span(row, Self::edge_x(v0, v1, cy), Self::edge_x(v0, v2, cy), buffer);
        }

        // Lower half (flat-top): long edge v0 -> v2, short edge v1 -> v2
        for row in mid.max(0)..=bottom.min(max_y) {
            let cy = row as f32 + 0.5;
            span(row, Self::edge_x(v1, v2, cy), Self::edge_x(v0, v2, cy), buffer);
        }
    }
}

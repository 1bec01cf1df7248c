//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer decides which pixels a triangle covers and whether they
//! pass the depth test. The shader only computes the color.

use crate::colors::modulate;
use crate::math::vec2::Vec2;
use crate::texture::Texture;

/// Trait for per-pixel shading computations.
///
/// The rasterizer calls `shade()` for each covered pixel that passes the
/// depth test.
///
/// # Arguments
/// * `lambda` - Barycentric weights [λ₀, λ₁, λ₂] of the pixel center,
///   in the triangle's original vertex order
/// * `recip_w` - The interpolated `1/w` at the pixel, never zero
pub trait PixelShader {
    fn shade(&self, lambda: [f32; 3], recip_w: f32) -> u32;
}

/// Flat shader - returns a constant color for all pixels.
pub struct FlatShader {
    color: u32,
}

impl FlatShader {
    /// `color` scaled by the triangle's light intensity.
    pub fn new(color: u32, intensity: f32) -> Self {
        Self {
            color: modulate(color, intensity),
        }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: [f32; 3], _recip_w: f32) -> u32 {
        self.color
    }
}

/// Texture shader with perspective-correct UVs.
///
/// UVs are interpolated as `u/w` and `v/w` and divided by the interpolated
/// `1/w`. V is flipped before lookup: mesh UVs put the origin bottom-left,
/// textures store the top row first.
pub struct TextureShader<'a> {
    texture: &'a Texture,
    uv_over_w: [Vec2; 3],
    intensity: f32,
}

impl<'a> TextureShader<'a> {
    /// `ws` are the view-space depths of the three vertices; all non-zero.
    pub fn new(texture: &'a Texture, uvs: [Vec2; 3], ws: [f32; 3], intensity: f32) -> Self {
        Self {
            texture,
            uv_over_w: [uvs[0] / ws[0], uvs[1] / ws[1], uvs[2] / ws[2]],
            intensity,
        }
    }
}

impl PixelShader for TextureShader<'_> {
    #[inline]
    fn shade(&self, lambda: [f32; 3], recip_w: f32) -> u32 {
        let [t0, t1, t2] = self.uv_over_w;
        let uv = (t0 * lambda[0] + t1 * lambda[1] + t2 * lambda[2]) / recip_w;

        let texel = self.texture.texel(uv.x, 1.0 - uv.y);
        modulate(texel, self.intensity)
    }
}

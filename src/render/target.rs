//! Caller-owned color and depth storage.
//!
//! [`RenderTarget`] owns the buffers across frames; the pipeline only ever
//! writes through the short-lived [`FrameBuffer`] view it hands out.

use super::framebuffer::{FrameBuffer, FAR_DEPTH};
use crate::colors;

pub struct RenderTarget {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl RenderTarget {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![FAR_DEPTH; size],
            width,
            height,
        }
    }

    /// Reallocate both buffers for a new viewport size. Contents are reset.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color_buffer(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// The color buffer as raw ARGB8888 bytes, ready to upload to a texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8, and the
        // byte length covers exactly the initialized elements of the Vec.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_target_is_cleared() {
        let target = RenderTarget::new(3, 2);
        assert_eq!(target.color_buffer().len(), 6);
        assert!(target.depth_buffer().iter().all(|&d| d == FAR_DEPTH));
        assert_eq!(target.as_bytes().len(), 24);
    }

    #[test]
    fn resize_reallocates() {
        let mut target = RenderTarget::new(3, 2);
        target.as_framebuffer().set_pixel(0, 0, 1);
        target.resize(4, 4);

        assert_eq!((target.width(), target.height()), (4, 4));
        assert_eq!(target.color_buffer().len(), 16);
        assert_eq!(target.color_buffer()[0], colors::BACKGROUND);
    }

    #[test]
    fn bytes_follow_native_layout() {
        let mut target = RenderTarget::new(1, 1);
        target.as_framebuffer().set_pixel(0, 0, 0x11223344);
        assert_eq!(target.as_bytes(), &0x11223344u32.to_ne_bytes());
    }
}

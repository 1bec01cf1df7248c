//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into color and depth buffers with bounds-checked access.
//! The depth buffer enables proper hidden surface removal via z-buffer algorithm.

/// Depth a cleared pixel holds. Anything drawn lands strictly in front of it.
pub const FAR_DEPTH: f32 = 1.0;

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass buffers + dimensions together.
///
/// # Depth Buffer
///
/// The depth buffer stores `1 - 1/w` per pixel, where `w` is the view-space
/// depth of the surface. Smaller values are closer to the camera; a cleared
/// buffer holds [`FAR_DEPTH`].
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// Pixels past the end of a short buffer are treated as out of bounds.
    pub fn new(
        color_buffer: &'a mut [u32],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            (width * height) as usize,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Reset every pixel to `color` and every depth to [`FAR_DEPTH`].
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
        self.depth_buffer.fill(FAR_DEPTH);
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is strictly smaller than the
    /// stored depth. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            if let (Some(stored), Some(pixel)) =
                (self.depth_buffer.get_mut(idx), self.color_buffer.get_mut(idx))
            {
                if depth < *stored {
                    *stored = depth;
                    *pixel = color;
                }
            }
        }
    }

    /// Set a pixel without depth testing (for overlays, UI, etc.)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(pixel) = self.index(x, y).and_then(|i| self.color_buffer.get_mut(i)) {
            *pixel = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y)
            .and_then(|i| self.color_buffer.get(i))
            .copied()
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y)
            .and_then(|i| self.depth_buffer.get(i))
            .copied()
    }

    /// Draws a line with a digital differential analyzer.
    ///
    /// Takes `max(|dx|, |dy|)` steps, advancing both coordinates by
    /// `delta / steps` and plotting the rounded position, endpoints included.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs());

        if steps == 0 {
            self.set_pixel(x0, y0, color);
            return;
        }

        let x_increment = dx as f32 / steps as f32;
        let y_increment = dy as f32 / steps as f32;
        let mut current_x = x0 as f32;
        let mut current_y = y0 as f32;

        for _ in 0..=steps {
            self.set_pixel(current_x.round() as i32, current_y.round() as i32, color);
            current_x += x_increment;
            current_y += y_increment;
        }
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Lines every `spacing` pixels in both directions.
    pub fn draw_grid(&mut self, spacing: u32, color: u32) {
        if spacing == 0 {
            return;
        }
        let spacing = spacing as usize;
        let width = self.width as usize;

        for (i, pixel) in self.color_buffer.iter_mut().enumerate() {
            let (x, y) = (i % width, i / width);
            if x % spacing == 0 || y % spacing == 0 {
                *pixel = color;
            }
        }
    }
}

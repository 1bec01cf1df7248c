use std::fmt;
use std::path::Path;

/// Errors that can occur when creating a texture.
#[derive(Debug)]
pub enum TextureError {
    Image(image::ImageError),
    /// Pixel data does not match the stated dimensions, or a dimension is zero.
    Dimensions { width: u32, height: u32, len: usize },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Image(e) => write!(f, "failed to load texture: {e}"),
            TextureError::Dimensions { width, height, len } => {
                write!(f, "{len} pixels do not form a {width}x{height} texture")
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Image(e) => Some(e),
            TextureError::Dimensions { .. } => None,
        }
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Image(e)
    }
}

/// Represents a 2D texture for texture mapping.
#[derive(Clone, Debug)]
pub struct Texture {
    data: Vec<u32>, // The pixel data of the texture in ARGB format.
    width: u32,     // The width of the texture in pixels.
    height: u32,    // The height of the texture in pixels.
}

impl Texture {
    // Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        // Convert RGBA bytes to ARGB u32
        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                crate::colors::argb(a, r, g, b)
            })
            .collect();

        log::info!("loaded {width}x{height} texture from {}", path.display());
        Self::from_pixels(width, height, data)
    }

    /// Wrap row-major ARGB pixels, top row first.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize {
            return Err(TextureError::Dimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A `size`x`size` checkerboard of `cells`x`cells` squares.
    pub fn checkerboard(size: u32, cells: u32, light: u32, dark: u32) -> Self {
        let size = size.max(1);
        let cell = (size / cells.max(1)).max(1);
        let data = (0..size * size)
            .map(|i| {
                let (x, y) = (i % size, i / size);
                if (x / cell + y / cell) % 2 == 0 {
                    light
                } else {
                    dark
                }
            })
            .collect();

        Self {
            data,
            width: size,
            height: size,
        }
    }

    /// Nearest-neighbor lookup at normalized coordinates.
    ///
    /// The texel is `(|u * width| mod width, |v * height| mod height)`, with
    /// the scaled coordinates truncated toward zero. Row 0 is the top of the
    /// image; flipping V for bottom-left UVs is the caller's job.
    #[inline]
    pub fn texel(&self, u: f32, v: f32) -> u32 {
        let x = ((u * self.width as f32) as i32).unsigned_abs() % self.width;
        let y = ((v * self.height as f32) as i32).unsigned_abs() % self.height;

        // Sample from flat array: index = y * width + x
        self.data[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
}

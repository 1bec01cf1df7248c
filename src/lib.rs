//! A CPU-based software-rendered 3D graphics engine.
//!
//! Meshes are transformed, back-face culled, flat lit, clipped against the
//! view frustum and rasterized with a depth buffer into a caller-owned ARGB
//! pixel buffer. SDL2 is only used by the demo binary for window management
//! and display.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastrum::prelude::*;
//!
//! let config = EngineConfig::default();
//! let mut engine = Engine::new(&config)?;
//! let mut target = RenderTarget::new(config.width, config.height);
//!
//! let mut mesh = Mesh::cube();
//! mesh.transform.set_position_xyz(0.0, 0.0, 5.0);
//! engine.render_frame(&mesh, None, &mut target.as_framebuffer())?;
//! ```

// Public API - exposed to library consumers
pub mod arena;
pub mod camera;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod draw_mode;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod texture;
pub mod transform;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::EngineConfig;
pub use draw_mode::DrawMode;
pub use engine::Engine;
pub use error::{ConfigError, RenderError};
pub use mesh::{LoadError, Mesh};
pub use projection::Projection;
pub use texture::{Texture, TextureError};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rastrum::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::{Face, Mesh};
    pub use crate::texture::Texture;
    pub use crate::transform::Transform;

    // Engine
    pub use crate::config::EngineConfig;
    pub use crate::draw_mode::DrawMode;
    pub use crate::engine::Engine;
    pub use crate::error::RenderError;
    pub use crate::projection::Projection;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::render::{FrameBuffer, RenderTarget};
}

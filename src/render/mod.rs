//! Rasterization: frame buffers and triangle fill.

pub mod framebuffer;
pub mod rasterizer;
pub mod target;

pub use framebuffer::{FrameBuffer, FAR_DEPTH};
pub use rasterizer::{FillMode, ScanlineRasterizer, Triangle};
pub use target::RenderTarget;

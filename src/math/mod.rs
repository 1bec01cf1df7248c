//! Vector and matrix types used throughout the pipeline.
//!
//! All types are plain `Copy` values. Coordinates are left-handed: +X right,
//! +Y up, +Z into the screen.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

//! View-space frustum clipping.
//!
//! Triangles are clipped after the view transform and before projection,
//! using the Sutherland-Hodgman algorithm against the six frustum planes.
//! The clipped polygon is then fan-triangulated back into triangles.
//!
//! All scratch storage is fixed-size: a triangle clipped against six planes
//! gains at most one vertex per plane, so [`MAX_POLYGON_VERTICES`] bounds
//! every intermediate polygon and [`MAX_POLYGON_TRIANGLES`] bounds the fan.

mod frustum;
mod polygon;

pub use frustum::{Frustum, FrustumPlane, Plane};
pub use polygon::{ClipTriangle, ClipTriangles, ClipVertex, Polygon};

/// Maximum vertices a clipped polygon may hold.
pub const MAX_POLYGON_VERTICES: usize = 10;

/// Maximum triangles produced from one clipped polygon.
pub const MAX_POLYGON_TRIANGLES: usize = MAX_POLYGON_VERTICES - 2;

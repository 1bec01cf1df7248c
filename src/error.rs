//! Errors surfaced by the rendering pipeline and its configuration.

use std::fmt;

/// A bounded buffer was asked to hold more items than it was sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub capacity: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity of {} exceeded", self.capacity)
    }
}

impl std::error::Error for CapacityError {}

/// Fatal per-frame errors from the geometry pass.
///
/// These indicate that a fixed bound was sized too small for the scene. They
/// are never raised for degenerate or clipped-away geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// A clipped polygon needed more vertices than the polygon arena holds.
    PolygonOverflow { capacity: usize },
    /// Fan triangulation produced more triangles than the arena holds.
    TriangleOverflow { capacity: usize },
    /// The frame produced more triangles than the per-frame budget.
    FrameOverflow { capacity: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::PolygonOverflow { capacity } => {
                write!(f, "clipped polygon exceeds {capacity} vertices")
            }
            RenderError::TriangleOverflow { capacity } => {
                write!(f, "polygon triangulation exceeds {capacity} triangles")
            }
            RenderError::FrameOverflow { capacity } => {
                write!(f, "frame exceeds budget of {capacity} triangles")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Errors from loading or validating an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

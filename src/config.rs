//! Engine configuration
//!
//! Uses RON (Rusty Object Notation) so configs stay hand-editable. Every field
//! has a default, so a config file only needs the values it changes:
//!
//! ```ron
//! (
//!     width: 1280,
//!     height: 720,
//!     fov_y_degrees: 75.0,
//!     draw_mode: (wireframe: false),
//! )
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colors;
use crate::draw_mode::DrawMode;
use crate::error::ConfigError;
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::projection::Projection;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub clear_color: u32,
    pub grid_color: u32,
    /// Pixels between debug grid lines; 0 disables the grid.
    pub grid_spacing: u32,
    pub light_direction: [f32; 3],
    pub camera_position: [f32; 3],
    /// Upper bound on triangles produced by one frame's geometry pass.
    pub max_triangles: usize,
    pub draw_mode: DrawMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov_y_degrees: 60.0,
            z_near: 1.0,
            z_far: 100.0,
            clear_color: colors::BACKGROUND,
            grid_color: colors::GRID,
            grid_spacing: 0,
            light_direction: [0.0, 0.0, 1.0],
            camera_position: [0.0, 0.0, 0.0],
            max_triangles: 10_000,
            draw_mode: DrawMode::default(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a config from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Parse and validate a config from a RON string.
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| Err(ConfigError::Invalid(reason.to_string()));

        if self.width == 0 || self.height == 0 {
            return invalid("viewport must be at least 1x1");
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return invalid("fov_y_degrees must be between 0 and 180");
        }
        if !(self.z_near > 0.0) {
            return invalid("z_near must be positive");
        }
        if !(self.z_far > self.z_near) {
            return invalid("z_far must be greater than z_near");
        }
        if self.max_triangles == 0 {
            return invalid("max_triangles must be positive");
        }
        if self.light().is_none() {
            return invalid("light_direction must be non-zero");
        }
        Ok(())
    }

    pub fn projection(&self) -> Projection {
        Projection::from_degrees(
            self.fov_y_degrees,
            self.width as f32 / self.height as f32,
            self.z_near,
            self.z_far,
        )
    }

    pub fn light(&self) -> Option<DirectionalLight> {
        let [x, y, z] = self.light_direction;
        DirectionalLight::new(Vec3::new(x, y, z))
    }

    pub fn camera_position(&self) -> Vec3 {
        let [x, y, z] = self.camera_position;
        Vec3::new(x, y, z)
    }
}

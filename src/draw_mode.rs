//! Draw-mode toggles.
//!
//! Wireframe, vertex points and backface culling are independent switches.
//! Solid and textured fill are mutually exclusive: turning one on turns the
//! other off, and a config asking for both is rejected.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fill {
    None,
    Solid,
    Textured,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDrawMode", into = "RawDrawMode")]
pub struct DrawMode {
    wireframe: bool,
    vertex_points: bool,
    fill: Fill,
    backface_cull: bool,
}

impl Default for DrawMode {
    fn default() -> Self {
        Self {
            wireframe: true,
            vertex_points: true,
            fill: Fill::Solid,
            backface_cull: true,
        }
    }
}

impl DrawMode {
    /// Every toggle off.
    pub fn none() -> Self {
        Self {
            wireframe: false,
            vertex_points: false,
            fill: Fill::None,
            backface_cull: false,
        }
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn vertex_points(&self) -> bool {
        self.vertex_points
    }

    pub fn solid(&self) -> bool {
        self.fill == Fill::Solid
    }

    pub fn textured(&self) -> bool {
        self.fill == Fill::Textured
    }

    pub fn backface_cull(&self) -> bool {
        self.backface_cull
    }

    pub fn set_wireframe(&mut self, on: bool) -> &mut Self {
        self.wireframe = on;
        self
    }

    pub fn set_vertex_points(&mut self, on: bool) -> &mut Self {
        self.vertex_points = on;
        self
    }

    /// Enabling solid fill disables textured fill.
    pub fn set_solid(&mut self, on: bool) -> &mut Self {
        self.set_fill(Fill::Solid, on)
    }

    /// Enabling textured fill disables solid fill.
    pub fn set_textured(&mut self, on: bool) -> &mut Self {
        self.set_fill(Fill::Textured, on)
    }

    pub fn set_backface_cull(&mut self, on: bool) -> &mut Self {
        self.backface_cull = on;
        self
    }

    fn set_fill(&mut self, fill: Fill, on: bool) -> &mut Self {
        if on {
            self.fill = fill;
        } else if self.fill == fill {
            self.fill = Fill::None;
        }
        self
    }

    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
    }

    pub fn toggle_vertex_points(&mut self) {
        self.vertex_points = !self.vertex_points;
    }

    pub fn toggle_solid(&mut self) {
        let on = !self.solid();
        self.set_solid(on);
    }

    pub fn toggle_textured(&mut self) {
        let on = !self.textured();
        self.set_textured(on);
    }

    pub fn toggle_backface_cull(&mut self) {
        self.backface_cull = !self.backface_cull;
    }
}

/// Flat on-disk form of [`DrawMode`].
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct RawDrawMode {
    wireframe: bool,
    vertex_points: bool,
    solid: bool,
    textured: bool,
    backface_cull: bool,
}

impl Default for RawDrawMode {
    fn default() -> Self {
        DrawMode::default().into()
    }
}

impl From<DrawMode> for RawDrawMode {
    fn from(mode: DrawMode) -> Self {
        Self {
            wireframe: mode.wireframe,
            vertex_points: mode.vertex_points,
            solid: mode.solid(),
            textured: mode.textured(),
            backface_cull: mode.backface_cull,
        }
    }
}

impl TryFrom<RawDrawMode> for DrawMode {
    type Error = &'static str;

    fn try_from(raw: RawDrawMode) -> Result<Self, Self::Error> {
        let fill = match (raw.solid, raw.textured) {
            (true, true) => return Err("solid and textured fill are mutually exclusive"),
            (true, false) => Fill::Solid,
            (false, true) => Fill::Textured,
            (false, false) => Fill::None,
        };
        Ok(Self {
            wireframe: raw.wireframe,
            vertex_points: raw.vertex_points,
            fill,
            backface_cull: raw.backface_cull,
        })
    }
}

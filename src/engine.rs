//! Core rendering engine.
//!
//! The [`Engine`] is the render context: it owns everything the pipeline
//! needs between frames (projection, frustum, camera, light, draw mode and
//! the triangle list) while the caller owns the mesh and the pixel buffers.
//!
//! A frame is two passes:
//! 1. [`Engine::update`] transforms, culls, lights, clips and projects every
//!    face into the triangle list.
//! 2. [`Engine::render`] rasterizes that list into a [`FrameBuffer`].
//!
//! [`Engine::clear`] resets the buffers between frames.

use crate::camera::Camera;
use crate::clipper::{Frustum, Polygon};
use crate::colors;
use crate::config::EngineConfig;
use crate::draw_mode::DrawMode;
use crate::error::{ConfigError, RenderError};
use crate::light::DirectionalLight;
use crate::math::mat4::Mat4;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;
use crate::pipeline;
use crate::projection::Projection;
use crate::render::rasterizer::{draw_vertex_points, draw_wireframe};
use crate::render::{FillMode, FrameBuffer, ScanlineRasterizer, Triangle};
use crate::texture::Texture;

pub struct Engine {
    projection: Projection,
    projection_matrix: Mat4,
    frustum: Frustum,
    width: u32,
    height: u32,
    camera: Camera,
    light: DirectionalLight,
    draw_mode: DrawMode,
    clear_color: u32,
    grid_color: u32,
    grid_spacing: u32,
    max_triangles: usize,
    triangles: Vec<Triangle>,
    rasterizer: ScanlineRasterizer,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let light = config
            .light()
            .ok_or_else(|| ConfigError::Invalid("light_direction must be non-zero".into()))?;
        let projection = config.projection();

        Ok(Self {
            projection,
            projection_matrix: projection.matrix(),
            frustum: projection.frustum(),
            width: config.width,
            height: config.height,
            camera: Camera::new(config.camera_position()),
            light,
            draw_mode: config.draw_mode,
            clear_color: config.clear_color,
            grid_color: config.grid_color,
            grid_spacing: config.grid_spacing,
            max_triangles: config.max_triangles,
            triangles: Vec::with_capacity(config.max_triangles),
            rasterizer: ScanlineRasterizer::new(),
        })
    }

    /// Replace the projection and rebuild the matrix and frustum from it.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.projection_matrix = projection.matrix();
        self.frustum = projection.frustum();
        log::debug!(
            "projection rebuilt: fov_y {:.1} deg, aspect {:.3}, near {}, far {}",
            projection.fov_y().to_degrees(),
            projection.aspect_ratio(),
            projection.z_near(),
            projection.z_far()
        );
    }

    /// Adopt a new viewport size. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("ignoring resize to {width}x{height}");
            return;
        }
        self.width = width;
        self.height = height;

        let mut projection = self.projection;
        projection.set_aspect_ratio(width as f32 / height as f32);
        self.set_projection(projection);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn draw_mode_mut(&mut self) -> &mut DrawMode {
        &mut self.draw_mode
    }

    pub fn grid_spacing(&self) -> u32 {
        self.grid_spacing
    }

    /// Pixels between debug grid lines; 0 turns the grid off.
    pub fn set_grid_spacing(&mut self, spacing: u32) {
        self.grid_spacing = spacing;
    }

    /// Triangles produced by the last [`update`](Self::update).
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Geometry pass: rebuilds the triangle list from `mesh`.
    ///
    /// Returns the number of triangles produced. Faces with out-of-range
    /// indices or zero area are skipped. Running out of clip or frame
    /// capacity aborts the frame.
    pub fn update(&mut self, mesh: &Mesh) -> Result<usize, RenderError> {
        self.triangles.clear();

        let model_view = self.camera.view_matrix() * mesh.transform.to_matrix();

        for (index, face) in mesh.faces.iter().enumerate() {
            let Some(corners) = mesh.face_vertices(face) else {
                log::warn!("face {index} references a missing vertex, skipping");
                continue;
            };

            // Model space -> world space -> view space
            let view_points = corners.map(|v| (model_view * Vec4::from_vec3(v, 1.0)).to_vec3());

            let Some(normal) = pipeline::face_normal(&view_points) else {
                continue;
            };
            if self.draw_mode.backface_cull() && pipeline::is_back_facing(&view_points, normal) {
                continue;
            }
            let intensity = self.light.intensity(normal);

            let mut polygon = Polygon::from_triangle(view_points, face.texcoords());
            let clipped = self
                .frustum
                .clip(&mut polygon)
                .and_then(|()| polygon.triangulate())
                .inspect_err(|e| log::error!("face {index}: {e}"))?;

            for clip_triangle in &clipped {
                if self.triangles.len() >= self.max_triangles {
                    let err = RenderError::FrameOverflow {
                        capacity: self.max_triangles,
                    };
                    log::error!("face {index}: {err}");
                    return Err(err);
                }
                self.triangles.push(pipeline::project_to_screen(
                    &self.projection_matrix,
                    clip_triangle,
                    self.width,
                    self.height,
                    face.color,
                    intensity,
                ));
            }
        }

        Ok(self.triangles.len())
    }

    /// Rasterization pass: fills, then overlays on top of every fill.
    ///
    /// Textured mode without a texture falls back to solid fill.
    pub fn render(&self, texture: Option<&Texture>, buffer: &mut FrameBuffer) {
        let mode = self.draw_mode;

        let fill = if mode.textured() {
            match texture {
                Some(texture) => Some(FillMode::Textured(texture)),
                None => {
                    log::debug!("textured fill requested without a texture, using solid");
                    Some(FillMode::Solid)
                }
            }
        } else if mode.solid() {
            Some(FillMode::Solid)
        } else {
            None
        };

        if let Some(fill) = fill {
            for triangle in &self.triangles {
                self.rasterizer.fill(triangle, fill, buffer);
            }
        }

        if mode.wireframe() {
            for triangle in &self.triangles {
                draw_wireframe(triangle, colors::WIREFRAME, buffer);
            }
        }
        if mode.vertex_points() {
            for triangle in &self.triangles {
                draw_vertex_points(triangle, colors::VERTEX, buffer);
            }
        }
    }

    /// Reset color and depth, and draw the debug grid if it is enabled.
    pub fn clear(&self, buffer: &mut FrameBuffer) {
        buffer.clear(self.clear_color);
        buffer.draw_grid(self.grid_spacing, self.grid_color);
    }

    /// `clear`, `update` and `render` in one go.
    pub fn render_frame(
        &mut self,
        mesh: &Mesh,
        texture: Option<&Texture>,
        buffer: &mut FrameBuffer,
    ) -> Result<usize, RenderError> {
        self.clear(buffer);
        let count = self.update(mesh)?;
        self.render(texture, buffer);
        Ok(count)
    }
}

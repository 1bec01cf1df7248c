//! Triangle meshes: the built-in cube and Wavefront OBJ loading.

use std::fmt;
use std::io::BufRead;
use std::path::Path;

use crate::colors;
use crate::math::{vec2::Vec2, vec3::Vec3};
use crate::transform::Transform;

/// A triangle face: three indices into [`Mesh::vertices`], a texture
/// coordinate per corner, and a base color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub a_uv: Vec2,
    pub b_uv: Vec2,
    pub c_uv: Vec2,
    pub color: u32,
}

impl Face {
    pub fn texcoords(&self) -> [Vec2; 3] {
        [self.a_uv, self.b_uv, self.c_uv]
    }
}

/// Errors that can occur when loading a mesh.
#[derive(Debug)]
pub enum LoadError {
    Obj(tobj::LoadError),
    /// A face references a vertex or texture coordinate that does not exist.
    InvalidIndex { face: usize, index: u32 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to load OBJ: {e}"),
            LoadError::InvalidIndex { face, index } => {
                write!(f, "face {face} references missing index {index}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::InvalidIndex { .. } => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

/// A mesh: vertex positions, faces and an object transform.
///
/// The pipeline only reads meshes. Input code is free to change
/// `transform` between frames.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Face>,
    pub transform: Transform,
}

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

// Two triangles per side, wound so the outside face is front-facing.
const CUBE_FACES: [[u32; 3]; 12] = [
    // front
    [0, 1, 2],
    [0, 2, 3],
    // right
    [3, 2, 4],
    [3, 4, 5],
    // back
    [5, 4, 6],
    [5, 6, 7],
    // left
    [7, 6, 1],
    [7, 1, 0],
    // top
    [1, 6, 4],
    [1, 4, 2],
    // bottom
    [5, 7, 0],
    [5, 0, 3],
];

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            transform: Transform::default(),
        }
    }

    /// The 2x2x2 cube centered on the origin, with each side mapped to the
    /// full texture.
    pub fn cube() -> Self {
        let faces = CUBE_FACES
            .iter()
            .enumerate()
            .map(|(i, &[a, b, c])| {
                // Even faces take the upper-left half of the side, odd faces
                // the lower-right.
                let (b_uv, c_uv) = if i % 2 == 0 {
                    (Vec2::new(0.0, 1.0), Vec2::ONE)
                } else {
                    (Vec2::ONE, Vec2::new(1.0, 0.0))
                };
                Face {
                    a,
                    b,
                    c,
                    a_uv: Vec2::ZERO,
                    b_uv,
                    c_uv,
                    color: colors::WHITE,
                }
            })
            .collect();

        Self::new(CUBE_VERTICES.to_vec(), faces)
    }

    /// Load every object in an OBJ file into a single mesh.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &Self::load_options())?;
        let mesh = Self::from_models(&models)?;

        log::info!(
            "loaded {} vertices and {} faces from {}",
            mesh.vertices.len(),
            mesh.faces.len(),
            path.display()
        );
        Ok(mesh)
    }

    /// Load OBJ data from a reader. Material libraries are ignored.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj_buf(reader, &Self::load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Self::from_models(&models)
    }

    fn load_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: true,
            single_index: false,
            ..Default::default()
        }
    }

    fn from_models(models: &[tobj::Model]) -> Result<Self, LoadError> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let mesh = &model.mesh;
            let offset = vertices.len() as u32;
            let vertex_count = (mesh.positions.len() / 3) as u32;

            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            let texcoords: Vec<Vec2> = mesh
                .texcoords
                .chunks_exact(2)
                .map(|t| Vec2::new(t[0], t[1]))
                .collect();

            for (i, corners) in mesh.indices.chunks_exact(3).enumerate() {
                let face = faces.len();

                if let Some(&index) = corners.iter().find(|&&index| index >= vertex_count) {
                    return Err(LoadError::InvalidIndex { face, index });
                }

                let mut uvs = [Vec2::ZERO; 3];
                if let Some(uv_indices) = mesh.texcoord_indices.get(i * 3..i * 3 + 3) {
                    for (uv, &index) in uvs.iter_mut().zip(uv_indices) {
                        *uv = *texcoords
                            .get(index as usize)
                            .ok_or(LoadError::InvalidIndex { face, index })?;
                    }
                }

                faces.push(Face {
                    a: corners[0] + offset,
                    b: corners[1] + offset,
                    c: corners[2] + offset,
                    a_uv: uvs[0],
                    b_uv: uvs[1],
                    c_uv: uvs[2],
                    color: colors::FILL,
                });
            }
        }

        Ok(Self::new(vertices, faces))
    }

    /// The three corner positions of `face`, or `None` if any index is out
    /// of range.
    pub fn face_vertices(&self, face: &Face) -> Option<[Vec3; 3]> {
        Some([
            *self.vertices.get(face.a as usize)?,
            *self.vertices.get(face.b as usize)?,
            *self.vertices.get(face.c as usize)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD_OBJ: &str = "\
o quad
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
f 1/1 2/2 3/3 4/4
";

    #[test]
    fn cube_faces_are_in_range() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.faces.len(), 12);
        for face in &cube.faces {
            assert!(cube.face_vertices(face).is_some());
        }
    }

    #[test]
    fn cube_side_covers_full_texture() {
        let cube = Mesh::cube();
        let uvs: Vec<Vec2> = cube.faces[..2]
            .iter()
            .flat_map(|f| f.texcoords())
            .collect();
        assert!(uvs.contains(&Vec2::new(0.0, 0.0)));
        assert!(uvs.contains(&Vec2::new(0.0, 1.0)));
        assert!(uvs.contains(&Vec2::new(1.0, 1.0)));
        assert!(uvs.contains(&Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn face_vertices_rejects_bad_index() {
        let cube = Mesh::cube();
        let mut face = cube.faces[0];
        face.c = 8;
        assert!(cube.face_vertices(&face).is_none());
    }

    #[test]
    fn obj_quad_is_triangulated() {
        let mesh = Mesh::from_obj_reader(&mut QUAD_OBJ.as_bytes()).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces.len(), 2);

        for face in &mesh.faces {
            assert_eq!(face.color, colors::FILL);
            let [a, b, c] = mesh.face_vertices(face).unwrap();
            // Every corner keeps the UV that was paired with its position.
            for (p, uv) in [a, b, c].iter().zip(face.texcoords()) {
                assert_eq!(Vec2::new(p.x, p.y), uv);
            }
        }
    }

    #[test]
    fn obj_without_texcoords_uses_zero_uvs() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = Mesh::from_obj_reader(&mut src.as_bytes()).unwrap();
        assert_eq!(mesh.faces.len(), 1);
        assert_eq!(mesh.faces[0].texcoords(), [Vec2::ZERO; 3]);
    }

    #[test]
    fn obj_objects_are_merged() {
        let src = "\
o first
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o second
v 0 0 1
v 1 0 1
v 0 1 1
f 4 5 6
";
        let mesh = Mesh::from_obj_reader(&mut src.as_bytes()).unwrap();
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.faces.len(), 2);

        let [a, _, _] = mesh.face_vertices(&mesh.faces[1]).unwrap();
        assert_eq!(a, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn obj_out_of_range_face_is_an_error() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n";
        assert!(Mesh::from_obj_reader(&mut src.as_bytes()).is_err());
    }
}

//! The indexed triangle mesh produced and consumed by every pipeline stage.

use glam::{DVec2, DVec3};

use crate::GeometryError;

/// An indexed triangle mesh with optional per-vertex attributes.
///
/// `triangles` stores flat index triples with consistent outward winding.
/// `uvs` and `normals` are parallel to `positions`: either empty (not yet
/// assigned) or exactly one entry per vertex. Vertex indices are stable for
/// the lifetime of the mesh; every rebuild allocates fresh buffers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions; the index into this buffer is the vertex id.
    pub positions: Vec<DVec3>,
    /// Flat triples of vertex indices, one triple per triangle.
    pub triangles: Vec<u32>,
    /// Per-vertex texture coordinates, parallel to `positions`.
    pub uvs: Vec<DVec2>,
    /// Per-vertex smooth normals, parallel to `positions`.
    pub normals: Vec<DVec3>,
}

impl MeshData {
    /// Create an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with preallocated position/index capacity.
    #[must_use]
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(indices),
            uvs: Vec::with_capacity(vertices),
            normals: Vec::new(),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles (index triples).
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Returns `true` if the mesh has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over triangles as `[i, j, k]` index triples.
    pub fn triangle_iter(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Check the structural invariants: complete index triples, in-bounds
    /// indices, and attribute buffers that are either empty or parallel to
    /// the position buffer.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertex_count = self.positions.len();

        if self.triangles.len() % 3 != 0 {
            return Err(GeometryError::IncompleteTriangle {
                index_count: self.triangles.len(),
            });
        }
        for &index in &self.triangles {
            if index as usize >= vertex_count {
                return Err(GeometryError::IndexOutOfBounds {
                    index,
                    vertex_count,
                });
            }
        }

        if !self.uvs.is_empty() && self.uvs.len() != vertex_count {
            return Err(GeometryError::AttributeLengthMismatch {
                attribute: "uv",
                expected: vertex_count,
                actual: self.uvs.len(),
            });
        }
        if !self.normals.is_empty() && self.normals.len() != vertex_count {
            return Err(GeometryError::AttributeLengthMismatch {
                attribute: "normal",
                expected: vertex_count,
                actual: self.normals.len(),
            });
        }

        Ok(())
    }

    /// Append another mesh, re-basing its triangle indices past the vertices
    /// already present. This is the stitching step of the six-face merge:
    /// the running vertex offset keeps the appended indices valid into the
    /// merged position buffer.
    pub fn append(&mut self, other: &MeshData) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.uvs.extend_from_slice(&other.uvs);
        self.normals.extend_from_slice(&other.normals);
        self.triangles
            .extend(other.triangles.iter().map(|&i| i + base));
    }

    /// Scale every position about the origin.
    pub fn scale(&mut self, factor: f64) {
        for position in &mut self.positions {
            *position *= factor;
        }
    }
}

//! Recursive icosahedron subdivision with an edge-midpoint cache.

use glam::DVec3;
use hashbrown::HashMap;
use helios_mesh::{GeometryError, MeshData, smooth_normals};

use crate::base::{ICOSAHEDRON_FACES, icosahedron_vertices};

/// Build-time state for one subdivision pass: the growing vertex list plus
/// the edge → midpoint-index cache. Discarded once the pass completes.
struct SubdivisionState<'a> {
    positions: &'a mut Vec<DVec3>,
    midpoints: HashMap<(u32, u32), u32>,
}

impl<'a> SubdivisionState<'a> {
    fn new(positions: &'a mut Vec<DVec3>) -> Self {
        Self {
            positions,
            midpoints: HashMap::new(),
        }
    }

    /// Index of the midpoint of edge `(a, b)`, re-normalized onto the unit
    /// sphere.
    ///
    /// The cache key is the ordered `(min, max)` pair, so `(a, b)` and
    /// `(b, a)` resolve to the same vertex. Without this cache the two
    /// triangles sharing an edge would each mint their own midpoint and the
    /// mesh would stop being watertight.
    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let key = (a.min(b), a.max(b));
        if let Some(&index) = self.midpoints.get(&key) {
            return index;
        }

        let mid = (self.positions[a as usize] + self.positions[b as usize]) / 2.0;
        let index = self.positions.len() as u32;
        self.positions.push(mid.normalize());
        self.midpoints.insert(key, index);
        index
    }
}

/// Split every face into four, keeping all vertices on the unit sphere.
fn subdivide(positions: &mut Vec<DVec3>, faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let mut state = SubdivisionState::new(positions);
    let mut next = Vec::with_capacity(faces.len() * 4);

    for &[v0, v1, v2] in faces {
        let a = state.midpoint(v0, v1);
        let b = state.midpoint(v1, v2);
        let c = state.midpoint(v2, v0);

        // Corner triangles first, center triangle last; this order keeps
        // the outward winding of the parent face.
        next.push([v0, a, c]);
        next.push([v1, b, a]);
        next.push([v2, c, b]);
        next.push([a, b, c]);
    }

    next
}

/// Build a watertight icosphere of the given radius.
///
/// Starts from the unit icosahedron and subdivides `subdivisions` times,
/// re-normalizing each new midpoint so every intermediate level already lies
/// on the unit sphere, then scales by `radius` and computes smooth normals.
/// `subdivisions = 0` yields the bare icosahedron.
///
/// The result has exactly `10·4^L + 2` vertices and `20·4^L` triangles for
/// subdivision level `L`; shared edge midpoints are deduplicated through the
/// per-pass edge cache. UVs are left unassigned (the assembly stage derives
/// them from the sphere positions).
///
/// Fails with [`GeometryError::InvalidRadius`] for a radius that is not
/// positive and finite, before any allocation.
pub fn build(subdivisions: u32, radius: f64) -> Result<MeshData, GeometryError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::InvalidRadius(radius));
    }

    let mut positions = icosahedron_vertices().to_vec();
    let mut faces: Vec<[u32; 3]> = ICOSAHEDRON_FACES.to_vec();

    for _ in 0..subdivisions {
        faces = subdivide(&mut positions, &faces);
    }

    let mut mesh = MeshData {
        positions,
        triangles: faces.iter().flatten().copied().collect(),
        uvs: Vec::new(),
        normals: Vec::new(),
    };
    mesh.scale(radius);
    smooth_normals(&mut mesh)?;

    Ok(mesh)
}

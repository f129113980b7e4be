//! Edge-level topology checks used to verify watertightness.

use hashbrown::HashMap;

use crate::MeshData;

/// Directed usage counts for one undirected edge, keyed by the canonical
/// `(min, max)` vertex pair. `forward` counts appearances as `(min, max)` in
/// winding order, `backward` as `(max, min)`.
#[derive(Clone, Copy, Debug, Default)]
struct EdgeUse {
    forward: u32,
    backward: u32,
}

fn edge_uses(mesh: &MeshData) -> HashMap<(u32, u32), EdgeUse> {
    let mut edges: HashMap<(u32, u32), EdgeUse> = HashMap::new();

    for [i, j, k] in mesh.triangle_iter() {
        for (a, b) in [(i, j), (j, k), (k, i)] {
            let entry = edges
                .entry((a.min(b), a.max(b)))
                .or_default();
            if a < b {
                entry.forward += 1;
            } else {
                entry.backward += 1;
            }
        }
    }

    edges
}

/// Returns `true` if every edge is shared by exactly two triangles with
/// opposite orientation.
///
/// This is the closed-manifold criterion the sphere tessellations must
/// satisfy: a single missed vertex deduplication or flipped winding breaks
/// it.
#[must_use]
pub fn is_watertight(mesh: &MeshData) -> bool {
    if mesh.triangles.is_empty() {
        return false;
    }
    edge_uses(mesh)
        .values()
        .all(|u| u.forward == 1 && u.backward == 1)
}

/// Number of boundary edges: edges used by exactly one triangle.
///
/// Zero for a closed mesh; an open grid patch such as a single cube face has
/// its perimeter edges counted here.
#[must_use]
pub fn boundary_edge_count(mesh: &MeshData) -> usize {
    edge_uses(mesh)
        .values()
        .filter(|u| u.forward + u.backward == 1)
        .count()
}

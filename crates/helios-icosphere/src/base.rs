//! The base icosahedron: 12 golden-ratio vertices and the canonical 20-face
//! adjacency table.

use glam::DVec3;

/// The 20 faces of the regular icosahedron, wound outward.
///
/// The ordering and winding of this table are load-bearing: subdivision
/// replaces each face in sequence, so both the resulting vertex indices and
/// the outward orientation of every generated triangle depend on it.
pub const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    // 5 faces around vertex 0
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    // 5 adjacent faces
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    // 5 faces around vertex 3
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    // 5 adjacent faces
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// The 12 icosahedron vertices, normalized to the unit sphere.
///
/// Built from the coordinate permutations of `(±1, ±φ, 0)` with
/// `φ = (1 + √5) / 2`: three orthogonal golden rectangles.
#[must_use]
pub fn icosahedron_vertices() -> [DVec3; 12] {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;

    [
        DVec3::new(-1.0, phi, 0.0),
        DVec3::new(1.0, phi, 0.0),
        DVec3::new(-1.0, -phi, 0.0),
        DVec3::new(1.0, -phi, 0.0),
        DVec3::new(0.0, -1.0, phi),
        DVec3::new(0.0, 1.0, phi),
        DVec3::new(0.0, -1.0, -phi),
        DVec3::new(0.0, 1.0, -phi),
        DVec3::new(phi, 0.0, -1.0),
        DVec3::new(phi, 0.0, 1.0),
        DVec3::new(-phi, 0.0, -1.0),
        DVec3::new(-phi, 0.0, 1.0),
    ]
    .map(|v| v.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_vertices_are_unit_length() {
        for (i, v) in icosahedron_vertices().iter().enumerate() {
            assert!(
                (v.length() - 1.0).abs() < EPSILON,
                "base vertex {i} is not unit length: {}",
                v.length()
            );
        }
    }

    #[test]
    fn test_all_vertices_are_distinct() {
        let vertices = icosahedron_vertices();
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                assert!(
                    (vertices[i] - vertices[j]).length() > 0.5,
                    "vertices {i} and {j} coincide"
                );
            }
        }
    }

    #[test]
    fn test_every_face_references_valid_vertices() {
        for face in ICOSAHEDRON_FACES {
            for index in face {
                assert!(index < 12);
            }
        }
    }

    #[test]
    fn test_faces_are_equilateral() {
        let vertices = icosahedron_vertices();
        let mut edge_lengths = Vec::new();
        for [a, b, c] in ICOSAHEDRON_FACES {
            edge_lengths.push((vertices[a as usize] - vertices[b as usize]).length());
            edge_lengths.push((vertices[b as usize] - vertices[c as usize]).length());
            edge_lengths.push((vertices[c as usize] - vertices[a as usize]).length());
        }
        let first = edge_lengths[0];
        for (i, len) in edge_lengths.iter().enumerate() {
            assert!(
                (len - first).abs() < EPSILON,
                "edge {i} has length {len}, expected {first}"
            );
        }
    }

    #[test]
    fn test_faces_are_wound_outward() {
        let vertices = icosahedron_vertices();
        for (f, [a, b, c]) in ICOSAHEDRON_FACES.iter().copied().enumerate() {
            let v0 = vertices[a as usize];
            let v1 = vertices[b as usize];
            let v2 = vertices[c as usize];
            let normal = (v1 - v0).cross(v2 - v0);
            let centroid = (v0 + v1 + v2) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "face {f} is wound inward");
        }
    }
}

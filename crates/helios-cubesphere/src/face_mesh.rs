//! Grid mesh generation for a single cube face.

use glam::DVec2;
use helios_mesh::{GeometryError, MeshData};

use crate::{CubeFace, cube_to_sphere};

/// Generate the `resolution × resolution` vertex grid for one cube face,
/// projected onto the unit sphere.
///
/// Produces `resolution²` vertices with per-face grid UVs (the assembly step
/// later replaces them with global spherical UVs) and
/// `(resolution − 1)² × 2` triangles. Only interior cells are triangulated;
/// the two triangles of each quad keep the winding that faces outward:
///
/// ```text
/// (i, i + R + 1, i + R)  and  (i, i + 1, i + R + 1)    with i = x + y·R
/// ```
///
/// Fails with [`GeometryError::ResolutionTooLow`] for `resolution < 2`,
/// before any buffer is allocated.
pub fn build_face(face: &CubeFace, resolution: u32) -> Result<MeshData, GeometryError> {
    if resolution < 2 {
        return Err(GeometryError::ResolutionTooLow(resolution));
    }

    let r = resolution as usize;
    let mut mesh = MeshData::with_capacity(r * r, (r - 1) * (r - 1) * 6);

    for y in 0..resolution {
        for x in 0..resolution {
            let i = x + y * resolution;
            let percent = DVec2::new(f64::from(x), f64::from(y)) / f64::from(resolution - 1);

            mesh.positions.push(cube_to_sphere(face.point_on_cube(percent)));
            mesh.uvs.push(percent);

            if x != resolution - 1 && y != resolution - 1 {
                mesh.triangles
                    .extend_from_slice(&[i, i + resolution + 1, i + resolution]);
                mesh.triangles.extend_from_slice(&[i, i + 1, i + resolution + 1]);
            }
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vertex_and_triangle_counts() {
        for resolution in 2..=8 {
            let face = CubeFace::new(DVec3::Y).unwrap();
            let mesh = build_face(&face, resolution).unwrap();
            let r = resolution as usize;
            assert_eq!(mesh.vertex_count(), r * r);
            assert_eq!(mesh.triangles.len(), (r - 1) * (r - 1) * 6);
            assert_eq!(mesh.uvs.len(), mesh.vertex_count());
            assert!(mesh.validate().is_ok());
        }
    }

    #[test]
    fn test_single_face_resolution_four() {
        let face = CubeFace::new(DVec3::X).unwrap();
        let mesh = build_face(&face, 4).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 18);
    }

    #[test]
    fn test_all_vertices_lie_on_the_unit_sphere() {
        for direction in CubeFace::CANONICAL_DIRECTIONS {
            let face = CubeFace::new(direction).unwrap();
            let mesh = build_face(&face, 7).unwrap();
            for (i, p) in mesh.positions.iter().enumerate() {
                assert!(
                    (p.length() - 1.0).abs() < EPSILON,
                    "vertex {i} of face {direction:?} is off-sphere: length {}",
                    p.length()
                );
            }
        }
    }

    #[test]
    fn test_grid_center_vertex_is_the_face_direction() {
        // Odd resolution puts a grid point exactly at percent (0.5, 0.5).
        let face = CubeFace::new(DVec3::Z).unwrap();
        let mesh = build_face(&face, 5).unwrap();
        let center = mesh.positions[2 + 2 * 5];
        assert!((center - DVec3::Z).length() < EPSILON);
    }

    #[test]
    fn test_winding_faces_outward() {
        for direction in CubeFace::CANONICAL_DIRECTIONS {
            let face = CubeFace::new(direction).unwrap();
            let mesh = build_face(&face, 4).unwrap();
            for [i, j, k] in mesh.triangle_iter() {
                let v0 = mesh.positions[i as usize];
                let v1 = mesh.positions[j as usize];
                let v2 = mesh.positions[k as usize];
                let normal = (v1 - v0).cross(v2 - v0);
                let centroid = (v0 + v1 + v2) / 3.0;
                assert!(
                    normal.dot(centroid) > 0.0,
                    "inward-facing triangle on face {direction:?}"
                );
            }
        }
    }

    #[test]
    fn test_grid_patch_boundary_is_open() {
        let face = CubeFace::new(DVec3::NEG_Y).unwrap();
        let mesh = build_face(&face, 6).unwrap();
        // A single face is an open patch: its perimeter has 2·(R−1) edges
        // per side.
        assert_eq!(helios_mesh::boundary_edge_count(&mesh), 4 * 5);
        assert!(!helios_mesh::is_watertight(&mesh));
    }

    #[test]
    fn test_uvs_span_the_unit_square() {
        let face = CubeFace::new(DVec3::Y).unwrap();
        let mesh = build_face(&face, 4).unwrap();
        assert_eq!(mesh.uvs[0], DVec2::new(0.0, 0.0));
        assert_eq!(mesh.uvs[3], DVec2::new(1.0, 0.0));
        assert_eq!(mesh.uvs[12], DVec2::new(0.0, 1.0));
        assert_eq!(mesh.uvs[15], DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_resolution_below_two_is_rejected() {
        let face = CubeFace::new(DVec3::Y).unwrap();
        for resolution in [0, 1] {
            assert!(matches!(
                build_face(&face, resolution),
                Err(GeometryError::ResolutionTooLow(r)) if r == resolution
            ));
        }
    }
}

//! Global spherical UV assignment.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use helios_mesh::{GeometryError, MeshData};

use crate::LatitudeSign;

/// Replace the mesh's UVs with a global equirectangular mapping derived from
/// each vertex's direction from the origin:
///
/// ```text
/// u = 0.5 + atan2(z, x) / 2π
/// v = 0.5 ∓ asin(y / |p|) / π      (sign per LatitudeSign)
/// ```
///
/// Per-face grid UVs from the cube tessellation are overwritten here so that
/// all six faces share one continuous mapping.
///
/// Fails with [`GeometryError::DegenerateVertex`] on a zero-length vertex,
/// which has no direction to derive coordinates from.
pub fn assign_spherical_uvs(mesh: &mut MeshData, sign: LatitudeSign) -> Result<(), GeometryError> {
    let mut uvs = Vec::with_capacity(mesh.positions.len());

    for (index, position) in mesh.positions.iter().enumerate() {
        let length = position.length();
        if length == 0.0 || !length.is_finite() {
            return Err(GeometryError::DegenerateVertex { index });
        }

        let u = 0.5 + position.z.atan2(position.x) / TAU;
        // Clamp against rounding drift pushing |y|/|p| past 1.
        let latitude = (position.y / length).clamp(-1.0, 1.0).asin() / PI;
        let v = match sign {
            LatitudeSign::North => 0.5 - latitude,
            LatitudeSign::South => 0.5 + latitude,
        };
        uvs.push(DVec2::new(u, v));
    }

    mesh.uvs = uvs;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    const EPSILON: f64 = 1e-12;

    fn mesh_of(positions: Vec<DVec3>) -> MeshData {
        MeshData {
            positions,
            triangles: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
        }
    }

    #[test]
    fn test_poles_map_to_v_extremes() {
        let mut mesh = mesh_of(vec![DVec3::Y, DVec3::NEG_Y]);
        assign_spherical_uvs(&mut mesh, LatitudeSign::North).unwrap();
        assert!((mesh.uvs[0].y - 0.0).abs() < EPSILON, "north pole at v=0");
        assert!((mesh.uvs[1].y - 1.0).abs() < EPSILON, "south pole at v=1");

        assign_spherical_uvs(&mut mesh, LatitudeSign::South).unwrap();
        assert!((mesh.uvs[0].y - 1.0).abs() < EPSILON);
        assert!((mesh.uvs[1].y - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_equator_maps_to_v_half() {
        let mut mesh = mesh_of(vec![DVec3::X, DVec3::Z, DVec3::NEG_X]);
        for sign in [LatitudeSign::North, LatitudeSign::South] {
            assign_spherical_uvs(&mut mesh, sign).unwrap();
            for uv in &mesh.uvs {
                assert!((uv.y - 0.5).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_longitude_wraps_around_u() {
        let mut mesh = mesh_of(vec![DVec3::X, DVec3::Z, DVec3::NEG_X]);
        assign_spherical_uvs(&mut mesh, LatitudeSign::North).unwrap();
        assert!((mesh.uvs[0].x - 0.5).abs() < EPSILON, "+X is mid-texture");
        assert!((mesh.uvs[1].x - 0.75).abs() < EPSILON, "+Z is a quarter turn");
        // atan2 flips sign at ±π, so −X lands on either seam edge.
        assert!(
            mesh.uvs[2].x.abs() < EPSILON || (mesh.uvs[2].x - 1.0).abs() < EPSILON,
            "−X is the seam"
        );
    }

    #[test]
    fn test_sign_conventions_mirror_each_other() {
        let positions = vec![
            DVec3::new(0.3, 0.8, -0.2).normalize(),
            DVec3::new(-0.5, -0.1, 0.9).normalize(),
        ];
        let mut north = mesh_of(positions.clone());
        let mut south = mesh_of(positions);
        assign_spherical_uvs(&mut north, LatitudeSign::North).unwrap();
        assign_spherical_uvs(&mut south, LatitudeSign::South).unwrap();
        for (a, b) in north.uvs.iter().zip(&south.uvs) {
            assert!((a.x - b.x).abs() < EPSILON, "u must not depend on sign");
            assert!((a.y + b.y - 1.0).abs() < EPSILON, "v mirrors about 0.5");
        }
    }

    #[test]
    fn test_uvs_are_independent_of_radius() {
        let direction = DVec3::new(0.6, -0.3, 0.5).normalize();
        let mut near = mesh_of(vec![direction]);
        let mut far = mesh_of(vec![direction * 1000.0]);
        assign_spherical_uvs(&mut near, LatitudeSign::North).unwrap();
        assign_spherical_uvs(&mut far, LatitudeSign::North).unwrap();
        assert!((near.uvs[0] - far.uvs[0]).length() < EPSILON);
    }

    #[test]
    fn test_zero_vertex_is_rejected() {
        let mut mesh = mesh_of(vec![DVec3::X, DVec3::ZERO]);
        match assign_spherical_uvs(&mut mesh, LatitudeSign::North) {
            Err(GeometryError::DegenerateVertex { index }) => assert_eq!(index, 1),
            other => panic!("expected DegenerateVertex, got {other:?}"),
        }
    }
}

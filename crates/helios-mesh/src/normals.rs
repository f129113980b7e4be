//! Smooth per-vertex normals for Phong-style shading.

use glam::DVec3;

use crate::{GeometryError, MeshData};

/// Recompute `mesh.normals` by averaging incident face normals.
///
/// Each triangle contributes its unit face normal to its three vertices; the
/// per-vertex normal is the normalized arithmetic mean of those
/// contributions. Contributions are unweighted by triangle area or corner
/// angle: every incident face counts equally. Callers that need
/// area-weighted shading must post-process externally.
///
/// Fails with [`GeometryError::UnreferencedVertex`] if any vertex is touched
/// by no triangle, since its normal would be undefined.
pub fn smooth_normals(mesh: &mut MeshData) -> Result<(), GeometryError> {
    mesh.validate()?;

    let vertex_count = mesh.positions.len();
    let mut sums = vec![DVec3::ZERO; vertex_count];
    let mut counts = vec![0u32; vertex_count];

    for [i, j, k] in mesh.triangle_iter() {
        let v0 = mesh.positions[i as usize];
        let v1 = mesh.positions[j as usize];
        let v2 = mesh.positions[k as usize];

        let face_normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();

        for index in [i, j, k] {
            sums[index as usize] += face_normal;
            counts[index as usize] += 1;
        }
    }

    let mut normals = Vec::with_capacity(vertex_count);
    for (index, (sum, count)) in sums.iter().zip(&counts).enumerate() {
        if *count == 0 {
            return Err(GeometryError::UnreferencedVertex { index });
        }
        let mean = *sum / f64::from(*count);
        normals.push(mean.normalize_or_zero());
    }

    mesh.normals = normals;
    Ok(())
}

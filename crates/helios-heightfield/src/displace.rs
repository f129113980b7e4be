//! Heightmap-driven radial vertex displacement.

use helios_mesh::{GeometryError, MeshData};

use crate::HeightField;

/// Fixed damping applied to the inward (below-threshold) branch.
///
/// Deliberately asymmetric with the outward branch, which uses the full
/// exaggeration factor: sea floors sink gently while peaks are exaggerated.
pub const INWARD_DAMPING: f64 = 0.5;

/// Parameters for heightmap displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplacementParams {
    /// Base world-space scale of the displacement.
    pub height_scale: f64,
    /// Heights above this value push the vertex outward, heights below pull
    /// it inward. Must lie in `[0, 1]`.
    pub threshold: f64,
    /// Extra multiplier applied to outward displacement only.
    pub exaggeration: f64,
}

impl Default for DisplacementParams {
    fn default() -> Self {
        Self {
            height_scale: 1.0,
            threshold: 0.5,
            exaggeration: 1.0,
        }
    }
}

impl DisplacementParams {
    /// Fail-fast parameter validation, run before any vertex is touched.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.height_scale.is_finite() || self.height_scale <= 0.0 {
            return Err(GeometryError::InvalidHeightScale(self.height_scale));
        }
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(GeometryError::ThresholdOutOfRange(self.threshold));
        }
        if !self.exaggeration.is_finite() || self.exaggeration < 0.0 {
            return Err(GeometryError::InvalidExaggeration(self.exaggeration));
        }
        Ok(())
    }
}

/// Displace every vertex along its own radial direction by the sampled
/// height.
///
/// The vertex position is treated as a direction from the sphere center, so
/// the mesh must be centered at the origin. Per vertex, with
/// `h = field.sample_bilinear(uv)`:
///
/// - `h > threshold`: `position += radial · h · height_scale · exaggeration`
/// - otherwise: `position −= radial · (threshold − h) · height_scale · 0.5`
///
/// Normals are cleared on success — they are stale after displacement and
/// must be recomputed before the mesh is used for shading.
///
/// Fails with [`GeometryError::MissingUvs`] when the mesh carries no UVs and
/// with [`GeometryError::DegenerateVertex`] when a vertex sits exactly at
/// the origin, where no radial direction exists. Radial directions are
/// resolved before any position moves, so a failed call leaves the mesh
/// unmodified.
pub fn displace(
    mesh: &mut MeshData,
    field: &dyn HeightField,
    params: &DisplacementParams,
) -> Result<(), GeometryError> {
    params.validate()?;
    mesh.validate()?;
    if mesh.uvs.is_empty() && !mesh.positions.is_empty() {
        return Err(GeometryError::MissingUvs);
    }

    // Resolve every radial direction up front so a degenerate vertex fails
    // the call before any position has moved.
    let mut radials = Vec::with_capacity(mesh.positions.len());
    for (index, position) in mesh.positions.iter().enumerate() {
        let radial = position
            .try_normalize()
            .ok_or(GeometryError::DegenerateVertex { index })?;
        radials.push(radial);
    }

    for ((position, uv), radial) in mesh.positions.iter_mut().zip(&mesh.uvs).zip(radials) {
        let height = field.sample_bilinear(uv.x, uv.y);
        if height > params.threshold {
            *position += radial * (height * params.height_scale * params.exaggeration);
        } else {
            *position -=
                radial * ((params.threshold - height) * params.height_scale * INWARD_DAMPING);
        }
    }

    mesh.normals.clear();
    Ok(())
}

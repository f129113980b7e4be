//! The rebuild pipeline: tessellate, merge, UV, displace, smooth.

use helios_cubesphere::{CubeFace, build_face};
use helios_heightfield::{HeightField, displace};
use helios_mesh::{GeometryError, MeshData, smooth_normals};
use tracing::{debug, info};

use crate::config::{PlanetGenConfig, Tessellation};
use crate::uv::assign_spherical_uvs;

/// Build one planet mesh from scratch.
///
/// A pure function of its inputs: the returned mesh shares no state with
/// earlier rebuilds, and on error the caller's previous mesh is simply left
/// in place — no partial result is ever published.
///
/// Pipeline order:
///
/// 1. Validate the config (fail fast, before allocation).
/// 2. Tessellate: merge six cube faces with index-offset stitching, or build
///    one icosphere.
/// 3. Assign global spherical UVs, replacing any per-face grid UVs.
/// 4. If a height field is supplied, displace vertices radially.
/// 5. Recompute smooth normals.
pub fn build_planet(
    config: &PlanetGenConfig,
    height_field: Option<&dyn HeightField>,
) -> Result<MeshData, GeometryError> {
    config.validate()?;

    let mut mesh = match config.tessellation {
        Tessellation::CubeSphere { resolution } => {
            let r = resolution as usize;
            let mut merged = MeshData::with_capacity(6 * r * r, 6 * (r - 1) * (r - 1) * 6);

            for direction in config.face_directions {
                let face = CubeFace::new(direction)?;
                let face_mesh = build_face(&face, resolution)?;
                debug!(
                    direction = ?direction,
                    vertices = face_mesh.vertex_count(),
                    "generated cube face"
                );
                merged.append(&face_mesh);
            }

            merged.scale(config.radius);
            merged
        }
        Tessellation::Icosphere { subdivisions } => {
            helios_icosphere::build(subdivisions, config.radius)?
        }
    };

    assign_spherical_uvs(&mut mesh, config.latitude_sign)?;

    if let Some(field) = height_field {
        displace(&mut mesh, field, &config.displacement)?;
    }

    smooth_normals(&mut mesh)?;

    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        displaced = height_field.is_some(),
        "planet mesh built"
    );
    Ok(mesh)
}

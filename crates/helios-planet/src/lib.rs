//! Planet mesh assembly: tessellation selection, six-face merging, global
//! spherical UVs, heightmap displacement, and normal smoothing.

mod assemble;
mod config;
mod uv;

pub use assemble::build_planet;
pub use config::{LatitudeSign, PlanetGenConfig, Tessellation};
pub use uv::assign_spherical_uvs;

pub use helios_heightfield::{DisplacementParams, GridHeightField, HeightField};
pub use helios_mesh::{GeometryError, MeshData};

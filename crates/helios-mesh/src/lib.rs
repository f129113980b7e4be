//! Indexed triangle mesh buffers, smooth normals, and topology checks for the
//! Helios planet generator.

mod error;
mod mesh_data;
mod normals;
mod topology;

pub use error::GeometryError;
pub use mesh_data::MeshData;
pub use normals::smooth_normals;
pub use topology::{boundary_edge_count, is_watertight};

//! Cube-to-sphere tessellation: six grid faces projected onto the unit
//! sphere with an area-preserving warp.

mod cube_face;
mod face_mesh;
mod projection;

pub use cube_face::CubeFace;
pub use face_mesh::build_face;
pub use projection::cube_to_sphere;

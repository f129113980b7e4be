//! Icosphere tessellation: recursive subdivision of a regular icosahedron
//! with shared-edge vertex deduplication.

mod base;
mod builder;

pub use base::{ICOSAHEDRON_FACES, icosahedron_vertices};
pub use builder::build;

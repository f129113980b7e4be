//! Height-field sampling and radial vertex displacement.

mod displace;
mod error;
mod field;

pub use displace::{DisplacementParams, INWARD_DAMPING, displace};
pub use error::HeightFieldError;
pub use field::{GridHeightField, HeightField};

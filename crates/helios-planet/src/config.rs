//! Generation parameters for one planet rebuild.
//!
//! Regeneration is driven by the host passing a config into
//! [`build_planet`](crate::build_planet); there is no observed mutable state,
//! and every rebuild is a pure function of this struct.

use glam::DVec3;
use helios_cubesphere::CubeFace;
use helios_heightfield::DisplacementParams;
use helios_mesh::GeometryError;

/// Which sphere tessellation to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tessellation {
    /// Six warped grid faces of `resolution × resolution` vertices each.
    CubeSphere {
        /// Grid density per face; must be at least 2.
        resolution: u32,
    },
    /// Recursively subdivided icosahedron.
    Icosphere {
        /// Subdivision depth; 0 yields the bare icosahedron.
        subdivisions: u32,
    },
}

/// Sign convention for the latitude term of the spherical UV mapping.
///
/// Both conventions are in real-world use; which one is "right" depends on
/// the texture authoring convention, so it is configurable rather than
/// hard-coded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LatitudeSign {
    /// `v = 0.5 − asin(y/|p|)/π`: v grows toward the south pole.
    #[default]
    North,
    /// `v = 0.5 + asin(y/|p|)/π`: v grows toward the north pole.
    South,
}

/// All inputs of one planet rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetGenConfig {
    /// Sphere tessellation and its density.
    pub tessellation: Tessellation,
    /// Planet radius; must be positive and finite.
    pub radius: f64,
    /// The six cube face directions, unit length. Only used by the
    /// cube-sphere tessellation.
    pub face_directions: [DVec3; 6],
    /// Latitude sign convention for the global UV mapping.
    pub latitude_sign: LatitudeSign,
    /// Displacement parameters, applied when the host supplies a height
    /// field.
    pub displacement: DisplacementParams,
}

impl Default for PlanetGenConfig {
    fn default() -> Self {
        Self {
            tessellation: Tessellation::CubeSphere { resolution: 10 },
            radius: 1.0,
            face_directions: CubeFace::CANONICAL_DIRECTIONS,
            latitude_sign: LatitudeSign::default(),
            displacement: DisplacementParams::default(),
        }
    }
}

impl PlanetGenConfig {
    /// Check every precondition up front, before any buffer is allocated.
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self.tessellation {
            Tessellation::CubeSphere { resolution } => {
                if resolution < 2 {
                    return Err(GeometryError::ResolutionTooLow(resolution));
                }
                for direction in self.face_directions {
                    CubeFace::new(direction)?;
                }
            }
            // A subdivision level is unsigned; no depth check needed.
            Tessellation::Icosphere { .. } => {}
        }

        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(self.radius));
        }
        self.displacement.validate()
    }
}

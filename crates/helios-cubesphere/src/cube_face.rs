//! One face of the cubesphere and its in-plane basis vectors.

use glam::{DVec2, DVec3};
use helios_mesh::GeometryError;

const UNIT_LENGTH_TOLERANCE: f64 = 1e-9;
const BASIS_COLLAPSE_TOLERANCE: f64 = 1e-12;

/// A cube face identified by its outward "local up" direction.
///
/// The two in-plane axes are derived from the direction by a component
/// rotation and a cross product:
///
/// ```text
/// axis_a = (up.y, up.z, up.x)
/// axis_b = up × axis_a
/// ```
///
/// Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeFace {
    local_up: DVec3,
    axis_a: DVec3,
    axis_b: DVec3,
}

impl CubeFace {
    /// The six canonical face directions, in the fixed merge order
    /// up, down, left, right, forward, back.
    pub const CANONICAL_DIRECTIONS: [DVec3; 6] = [
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::NEG_X,
        DVec3::X,
        DVec3::Z,
        DVec3::NEG_Z,
    ];

    /// Construct a face from a unit local-up direction.
    ///
    /// Fails with [`GeometryError::DegenerateFaceBasis`] when the direction
    /// is not unit length or the derived axes collapse (any direction
    /// proportional to `(1, 1, 1)` is a fixed point of the component
    /// rotation, leaving a zero cross product).
    pub fn new(local_up: DVec3) -> Result<Self, GeometryError> {
        let reject = || GeometryError::DegenerateFaceBasis {
            x: local_up.x,
            y: local_up.y,
            z: local_up.z,
        };

        if !local_up.is_finite() || (local_up.length() - 1.0).abs() > UNIT_LENGTH_TOLERANCE {
            return Err(reject());
        }

        let face = Self::from_unit_up(local_up);
        if face.axis_b.length_squared() < BASIS_COLLAPSE_TOLERANCE {
            return Err(reject());
        }
        Ok(face)
    }

    /// The six canonical faces in merge order.
    #[must_use]
    pub fn canonical() -> [CubeFace; 6] {
        Self::CANONICAL_DIRECTIONS.map(Self::from_unit_up)
    }

    // Axis-aligned unit inputs always produce a valid basis.
    fn from_unit_up(local_up: DVec3) -> Self {
        let axis_a = DVec3::new(local_up.y, local_up.z, local_up.x);
        let axis_b = local_up.cross(axis_a);
        Self {
            local_up,
            axis_a,
            axis_b,
        }
    }

    /// Outward unit direction of this face.
    #[must_use]
    pub fn local_up(&self) -> DVec3 {
        self.local_up
    }

    /// In-plane axis for the grid `x` direction.
    #[must_use]
    pub fn axis_a(&self) -> DVec3 {
        self.axis_a
    }

    /// In-plane axis for the grid `y` direction.
    #[must_use]
    pub fn axis_b(&self) -> DVec3 {
        self.axis_b
    }

    /// Map a normalized grid percent in `[0, 1]²` to a point on the surface
    /// of the `[-1, 1]` cube. The face center `(0.5, 0.5)` maps to
    /// `local_up`.
    #[must_use]
    pub fn point_on_cube(&self, percent: DVec2) -> DVec3 {
        self.local_up + (percent.x - 0.5) * 2.0 * self.axis_a + (percent.y - 0.5) * 2.0 * self.axis_b
    }
}

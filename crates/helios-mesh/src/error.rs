//! Geometry error taxonomy shared by the mesh generation crates.

/// Errors produced while validating parameters or generating planet geometry.
///
/// Parameter variants are raised before any buffer is allocated. Geometry
/// variants fail the rebuild that encountered them; the caller's previous
/// mesh, if any, stays untouched. Out-of-range height-field sampling is
/// clamped by the sampler and never reaches this enum.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// Cube face grid resolution below the 2×2 minimum.
    #[error("cube face resolution must be at least 2, got {0}")]
    ResolutionTooLow(u32),

    /// Sphere radius that is zero, negative, or non-finite.
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// Height scale that is zero, negative, or non-finite.
    #[error("height scale must be positive and finite, got {0}")]
    InvalidHeightScale(f64),

    /// Displacement threshold outside `[0, 1]`.
    #[error("displacement threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    /// Negative or non-finite exaggeration factor.
    #[error("exaggeration factor must be non-negative and finite, got {0}")]
    InvalidExaggeration(f64),

    /// A face direction whose derived in-plane axes collapse to zero length,
    /// or that is not unit length to begin with.
    #[error("face direction ({x}, {y}, {z}) does not yield an orthogonal face basis")]
    DegenerateFaceBasis {
        /// X component of the rejected direction.
        x: f64,
        /// Y component of the rejected direction.
        y: f64,
        /// Z component of the rejected direction.
        z: f64,
    },

    /// A vertex at the origin has no radial direction to normalize or
    /// displace along.
    #[error("vertex {index} has zero length and no radial direction")]
    DegenerateVertex {
        /// Index of the offending vertex.
        index: usize,
    },

    /// A vertex referenced by no triangle; its smooth normal is undefined.
    #[error("vertex {index} is not referenced by any triangle")]
    UnreferencedVertex {
        /// Index of the offending vertex.
        index: usize,
    },

    /// A triangle index buffer whose length is not a multiple of three.
    #[error("triangle index count {index_count} is not a multiple of three")]
    IncompleteTriangle {
        /// Length of the flat index buffer.
        index_count: usize,
    },

    /// A triangle index pointing past the end of the position buffer.
    #[error("triangle index {index} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The out-of-bounds index value.
        index: u32,
        /// Number of vertices actually present.
        vertex_count: usize,
    },

    /// Parallel vertex attribute buffers with mismatched lengths.
    #[error("{attribute} count {actual} does not match vertex count {expected}")]
    AttributeLengthMismatch {
        /// Name of the mismatched attribute buffer.
        attribute: &'static str,
        /// Expected entry count (the vertex count).
        expected: usize,
        /// Actual entry count.
        actual: usize,
    },

    /// Displacement requested on a mesh without per-vertex UVs.
    #[error("mesh has no UVs to sample the height field with")]
    MissingUvs,
}

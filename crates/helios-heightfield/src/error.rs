//! Height-field construction errors.

/// Errors that can occur when constructing a height field.
///
/// Sampling itself never fails: out-of-range coordinates are clamped.
#[derive(Debug, thiserror::Error)]
pub enum HeightFieldError {
    /// A grid with a zero width or height has nothing to sample.
    #[error("height field must have at least one sample in each dimension")]
    EmptyField,

    /// The flat sample buffer does not match `width × height`.
    #[error("expected {expected} samples for the grid dimensions, got {actual}")]
    SampleCountMismatch {
        /// `width × height`.
        expected: usize,
        /// Length of the provided sample buffer.
        actual: usize,
    },
}

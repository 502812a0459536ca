//! Error types for the rotation core

/// Errors produced while building or acquiring a rotation.
///
/// Non-finite inputs are deliberately not an error: NaN and infinity
/// propagate through the arithmetic per IEEE semantics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RotationError {
    /// The axis has (numerically) zero length, so no rotation axis exists.
    #[error("degenerate axis: squared length is zero")]
    DegenerateAxis,
    /// A rotation job file did not match the expected format.
    #[error("failed to parse rotation job: {0}")]
    Parse(String),
}

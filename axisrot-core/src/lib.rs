//! AxisRot Core Library - Axis-angle rotation of 3D points
//!
//! This library provides the stateless core for rotating a point about an
//! arbitrary axis through the origin: the Rodrigues rotation matrix
//! construction, the homogeneous matrix-vector transform, and a parser for
//! rotation job files.

pub mod error;
pub mod geometry;
pub mod job;
pub mod rotation;
pub mod transform;

// Re-export commonly used types
pub use error::RotationError;
pub use geometry::{Angle, AxisVector};
pub use job::{parse_job, RotationJob};
pub use rotation::RotationMatrixBuilder;
pub use transform::{rotate_point, HomogeneousTransformer};

//! Homogeneous matrix-vector transform and the point rotation pipeline
use nalgebra::{Matrix4, Point3, Vector4};

use crate::error::RotationError;
use crate::geometry::{Angle, AxisVector};
use crate::rotation::RotationMatrixBuilder;

/// Applies 4x4 homogeneous matrices to 4x1 column vectors
pub struct HomogeneousTransformer;

impl HomogeneousTransformer {
    /// Multiply `matrix` by the homogeneous column vector `point`.
    ///
    /// When row 3 of the matrix is (0, 0, 0, 1) - true for every matrix from
    /// [`RotationMatrixBuilder`] - the w coordinate of the result equals the
    /// input's. Non-finite inputs propagate.
    pub fn apply(matrix: &Matrix4<f32>, point: &Vector4<f32>) -> Vector4<f32> {
        matrix * point
    }
}

/// Rotate `point` about `axis` through the origin by `angle`.
///
/// Builds the rotation matrix, applies it to the point in homogeneous form,
/// and strips the homogeneous coordinate (unchanged at 1.0) from the result.
pub fn rotate_point(
    point: &Point3<f32>,
    axis: &AxisVector,
    angle: Angle,
) -> Result<Point3<f32>, RotationError> {
    let matrix = RotationMatrixBuilder::build(angle, axis)?;
    let rotated = HomogeneousTransformer::apply(&matrix, &point.to_homogeneous());
    Ok(Point3::new(rotated.x, rotated.y, rotated.z))
}

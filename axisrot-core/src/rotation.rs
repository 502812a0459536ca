//! Rodrigues axis-angle rotation matrix construction
use nalgebra::Matrix4;

use crate::error::RotationError;
use crate::geometry::{Angle, AxisVector};

/// Smallest squared axis length accepted as a usable rotation axis.
const MIN_LENGTH_SQUARED: f32 = 1e-12;

/// Builder for 4x4 homogeneous rotation matrices
pub struct RotationMatrixBuilder;

impl RotationMatrixBuilder {
    /// Build the homogeneous rotation matrix for a right-handed rotation by
    /// `angle` about `axis` through the origin.
    ///
    /// The axis does not need to be normalized: the formula divides by the
    /// squared length L and by √L, so any non-zero axis works. A zero-length
    /// axis is rejected with [`RotationError::DegenerateAxis`] before any
    /// division takes place. Non-finite components are not trapped; they
    /// yield non-finite matrix entries.
    pub fn build(angle: Angle, axis: &AxisVector) -> Result<Matrix4<f32>, RotationError> {
        let l = axis.length_squared();
        if l <= MIN_LENGTH_SQUARED {
            return Err(RotationError::DegenerateAxis);
        }

        let (u, v, w) = (axis.u, axis.v, axis.w);
        let (u2, v2, w2) = (u * u, v * v, w * w);
        let (sin_a, cos_a) = angle.radians().sin_cos();
        let root_l = l.sqrt();

        // Row 3 and column 3 carry the homogeneous padding so the transform
        // leaves the w coordinate unchanged.
        Ok(Matrix4::new(
            (u2 + (v2 + w2) * cos_a) / l,
            (u * v * (1.0 - cos_a) - w * root_l * sin_a) / l,
            (u * w * (1.0 - cos_a) + v * root_l * sin_a) / l,
            0.0,
            (u * v * (1.0 - cos_a) + w * root_l * sin_a) / l,
            (v2 + (u2 + w2) * cos_a) / l,
            (v * w * (1.0 - cos_a) - u * root_l * sin_a) / l,
            0.0,
            (u * w * (1.0 - cos_a) - v * root_l * sin_a) / l,
            (v * w * (1.0 - cos_a) + u * root_l * sin_a) / l,
            (w2 + (u2 + v2) * cos_a) / l,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix3;

    fn rotation_block(matrix: &Matrix4<f32>) -> Matrix3<f32> {
        matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    #[test]
    fn test_identity_at_zero_angle() {
        for axis in [
            AxisVector::new(1.0, 0.0, 0.0),
            AxisVector::new(0.0, 3.0, 0.0),
            AxisVector::new(1.0, 1.0, 1.0),
            AxisVector::new(-2.5, 0.5, 4.0),
        ] {
            let matrix = RotationMatrixBuilder::build(Angle::from_degrees(0.0), &axis).unwrap();
            assert!((matrix - Matrix4::identity()).norm() < 1e-5);
        }
    }

    #[test]
    fn test_full_turn_matches_zero() {
        let axis = AxisVector::new(1.0, -2.0, 0.5);
        let zero = RotationMatrixBuilder::build(Angle::from_degrees(0.0), &axis).unwrap();
        let full = RotationMatrixBuilder::build(Angle::from_degrees(360.0), &axis).unwrap();
        assert!((full - zero).norm() < 1e-5);
    }

    #[test]
    fn test_rotation_block_is_orthonormal() {
        let cases = [
            (AxisVector::new(0.0, 0.0, 1.0), 90.0),
            (AxisVector::new(1.0, 1.0, 1.0), 120.0),
            (AxisVector::new(3.0, -4.0, 12.0), 37.5),
            (AxisVector::new(0.2, 0.0, -0.9), -200.0),
        ];
        for (axis, degrees) in cases {
            let matrix =
                RotationMatrixBuilder::build(Angle::from_degrees(degrees), &axis).unwrap();
            let r = rotation_block(&matrix);
            assert!((r.transpose() * r - Matrix3::identity()).norm() < 1e-5);
            assert!((r.determinant() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_right_handed_about_z() {
        let axis = AxisVector::new(0.0, 0.0, 1.0);
        let matrix = RotationMatrixBuilder::build(Angle::from_degrees(90.0), &axis).unwrap();
        // cos 90 = 0, sin 90 = 1: the xy block must be [[0, -1], [1, 0]].
        assert!(matrix[(0, 0)].abs() < 1e-6);
        assert!((matrix[(0, 1)] + 1.0).abs() < 1e-6);
        assert!((matrix[(1, 0)] - 1.0).abs() < 1e-6);
        assert!(matrix[(1, 1)].abs() < 1e-6);
        assert!((matrix[(2, 2)] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_homogeneous_padding() {
        let axis = AxisVector::new(2.0, 1.0, -1.0);
        let matrix = RotationMatrixBuilder::build(Angle::from_degrees(45.0), &axis).unwrap();
        for i in 0..3 {
            assert_eq!(matrix[(3, i)], 0.0);
            assert_eq!(matrix[(i, 3)], 0.0);
        }
        assert_eq!(matrix[(3, 3)], 1.0);
    }

    #[test]
    fn test_degenerate_axis_rejected() {
        let axis = AxisVector::new(0.0, 0.0, 0.0);
        for degrees in [0.0, 90.0, -45.0, 720.0] {
            let result = RotationMatrixBuilder::build(Angle::from_degrees(degrees), &axis);
            assert_eq!(result, Err(RotationError::DegenerateAxis));
        }
    }

    #[test]
    fn test_non_finite_axis_propagates() {
        let axis = AxisVector::new(f32::NAN, 0.0, 1.0);
        let matrix = RotationMatrixBuilder::build(Angle::from_degrees(30.0), &axis).unwrap();
        assert!(matrix[(0, 0)].is_nan());
    }
}

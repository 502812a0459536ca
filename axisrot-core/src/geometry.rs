//! Geometry primitives for axis-angle rotation
use nalgebra::Vector3;

/// A rotation axis through the origin.
///
/// Direction matters, but the components need not be normalized: the
/// Rodrigues construction divides by the squared length itself. A zero-length
/// axis is rejected by [`crate::RotationMatrixBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisVector {
    pub u: f32,
    pub v: f32,
    pub w: f32,
}

impl AxisVector {
    pub fn new(u: f32, v: f32, w: f32) -> Self {
        Self { u, v, w }
    }

    /// Squared length L = u² + v² + w², the divisor of the Rodrigues form.
    pub fn length_squared(&self) -> f32 {
        self.u * self.u + self.v * self.v + self.w * self.w
    }

    pub fn as_vector(&self) -> Vector3<f32> {
        Vector3::new(self.u, self.v, self.w)
    }
}

impl From<Vector3<f32>> for AxisVector {
    fn from(v: Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A rotation angle, taken in degrees at the interface boundary and
/// converted to radians before any trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    degrees: f32,
}

impl Angle {
    pub fn from_degrees(degrees: f32) -> Self {
        Self { degrees }
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    pub fn radians(&self) -> f32 {
        self.degrees * std::f32::consts::PI / 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_length_squared() {
        let axis = AxisVector::new(1.0, 2.0, 2.0);
        assert!((axis.length_squared() - 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_conversion() {
        let angle = Angle::from_degrees(180.0);
        assert!((angle.radians() - std::f32::consts::PI).abs() < 1e-6);
        assert!((angle.degrees() - 180.0).abs() < 1e-6);
    }
}

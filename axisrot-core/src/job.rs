//! Rotation job file parser
//!
//! A job file names one rotation to perform:
//!
//! ```text
//! point 1.0 0.0 0.0
//! axis  0.0 0.0 1.0
//! angle 90.0
//! ```
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, multispace1},
    number::complete::float,
    sequence::preceded,
    IResult,
};

use nalgebra::Point3;

use crate::error::RotationError;
use crate::geometry::{Angle, AxisVector};
use crate::transform::rotate_point;

/// A parsed rotation job: one point, one axis, one angle in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationJob {
    pub point: Point3<f32>,
    pub axis: AxisVector,
    pub angle: Angle,
}

impl RotationJob {
    pub fn new(point: Point3<f32>, axis: AxisVector, angle: Angle) -> Self {
        Self { point, axis, angle }
    }

    /// Run the rotation pipeline for this job.
    pub fn solve(&self) -> Result<Point3<f32>, RotationError> {
        rotate_point(&self.point, &self.axis, self.angle)
    }
}

/// Parse a rotation job from text
pub fn parse_job(input: &str) -> Result<RotationJob, RotationError> {
    match parse_job_impl(input) {
        Ok((_, job)) => Ok(job),
        Err(e) => Err(RotationError::Parse(format!("{:?}", e))),
    }
}

fn parse_job_impl(input: &str) -> IResult<&str, RotationJob> {
    let (input, _) = preceded(multispace0, tag("point"))(input)?;
    let (input, (x, y, z)) = parse_triple(input)?;
    let (input, _) = preceded(multispace0, tag("axis"))(input)?;
    let (input, (u, v, w)) = parse_triple(input)?;
    let (input, _) = preceded(multispace0, tag("angle"))(input)?;
    let (input, degrees) = preceded(multispace1, float)(input)?;

    Ok((
        input,
        RotationJob::new(
            Point3::new(x, y, z),
            AxisVector::new(u, v, w),
            Angle::from_degrees(degrees),
        ),
    ))
}

fn parse_triple(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = multispace1(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;
    Ok((input, (x, y, z)))
}

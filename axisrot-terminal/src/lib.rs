//! Terminal front end for axis-angle point rotation
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::fs;
use std::io::{self, stdout, BufRead, Write};

use axisrot_core::{parse_job, Angle, AxisVector, RotationJob};
use nalgebra::Point3;

/// Prompt for the point, axis and angle on stdin, then rotate and print.
///
/// Malformed lines are re-prompted; a degenerate axis aborts the run with
/// an error, since a zero axis has no corresponding rotation.
pub fn run_interactive() -> io::Result<()> {
    let [x, y, z] = prompt_values("Enter the point to transform (x y z)")?;
    let [u, v, w] = prompt_values("Enter the axis vector (u v w)")?;
    let [degrees] = prompt_values("Enter the rotation angle in degrees")?;

    let job = RotationJob::new(
        Point3::new(x, y, z),
        AxisVector::new(u, v, w),
        Angle::from_degrees(degrees),
    );
    solve_and_print(&job)
}

/// Read a rotation job file, echo its contents, then rotate and print.
pub fn run_file(path: &str) -> io::Result<()> {
    let text = fs::read_to_string(path)
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("Failed to read job file: {}", e)))?;

    for line in text.lines() {
        println!("{}", line);
    }

    let job = parse_job(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to parse job file: {}", e)))?;
    solve_and_print(&job)
}

fn solve_and_print(job: &RotationJob) -> io::Result<()> {
    match job.solve() {
        Ok(rotated) => {
            execute!(
                stdout(),
                SetForegroundColor(Color::Green),
                Print(format!("{}\n", format_point(&rotated))),
                ResetColor
            )
        }
        Err(e) => {
            execute!(
                stdout(),
                SetForegroundColor(Color::Red),
                Print(format!("{}\n", e)),
                ResetColor
            )?;
            Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
        }
    }
}

/// Prompt until a line with exactly N numeric values is read.
fn prompt_values<const N: usize>(prompt: &str) -> io::Result<[f32; N]> {
    let stdin = io::stdin();
    loop {
        print!("{}: ", prompt);
        stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        if let Some(values) = parse_values(&line) {
            return Ok(values);
        }
        eprintln!("Expected {} numeric value(s), try again.", N);
    }
}

fn parse_values<const N: usize>(line: &str) -> Option<[f32; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != N {
        return None;
    }
    let mut values = [0.0f32; N];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token.parse().ok()?;
    }
    Some(values)
}

fn format_point(point: &Point3<f32>) -> String {
    format!("({}, {}, {})", point.x, point.y, point.z)
}

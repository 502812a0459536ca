//! Example: Run a rotation job from a file
//!
//! Usage: cargo run --example rotate_file -- path/to/job.txt
//!
//! The job file format is three records, in order:
//!
//! ```text
//! point 1.0 0.0 0.0
//! axis  0.0 0.0 1.0
//! angle 90.0
//! ```

use std::env;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <job-file>", args[0]);
        eprintln!("\nNo job file provided, falling back to the interactive prompt...");
        return axisrot_terminal::run_interactive();
    }

    let job_path = &args[1];
    println!("Loading rotation job: {}", job_path);
    axisrot_terminal::run_file(job_path)
}

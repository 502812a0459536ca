//! AxisRot Terminal - rotate a point about an arbitrary axis
//!
//! Prompts for a point, an axis vector through the origin, and an angle in
//! degrees, then prints the rotated point. To run a prepared job file
//! instead, see `examples/rotate_file.rs`.

use std::io;

fn main() -> io::Result<()> {
    println!("AxisRot - axis-angle point rotation");
    axisrot_terminal::run_interactive()
}

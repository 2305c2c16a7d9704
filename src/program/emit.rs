//! Puzzle-input serialization.

use std::fmt::Write as _;
use std::io;

use super::{Instruction, WIDTH_TRAILER};

/// Serialize instructions, one per line, then a blank line and the width
/// trailer.
pub fn emit(instructions: &[Instruction], width: usize) -> String {
    let mut out = String::new();
    for instruction in instructions {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", instruction);
    }
    out.push('\n');
    let _ = writeln!(out, "{}{}", WIDTH_TRAILER, width);
    out
}

/// Stream the same text as [`emit`] to a writer.
pub fn write_puzzle<W: io::Write>(
    writer: &mut W,
    instructions: &[Instruction],
    width: usize,
) -> io::Result<()> {
    writer.write_all(emit(instructions, width).as_bytes())?;
    writer.flush()
}

//! # CRT Decoder
//!
//! Runs a [`Program`] the way the puzzle's CPU does and reports what the CRT
//! shows.
//!
//! - Register `X` starts at 1.
//! - `noop` takes one cycle, `addx V` takes two and adds `V` after the second.
//! - During cycle `c` (0-based) the pixel `c` is lit when the sprite, three
//!   pixels wide and centered on `X`, covers column `c mod width`.
//!
//! ```
//! use crtgen::crt;
//! use crtgen::program::Program;
//!
//! let program: Program = "addx 2\nnoop\n".parse().unwrap();
//! let screen = crt::run(&program, 4, 1);
//! assert_eq!(screen.rows(), vec!["###."]);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::program::Program;
use crate::raster::render_rows;

/// Cycles sampled for the signal strength sum.
pub const STANDARD_PROBES: [usize; 6] = [20, 60, 100, 140, 180, 220];

/// Register value at the start of a program.
pub const INITIAL_X: i64 = 1;

/// What the CRT drew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub width: usize,
    pub height: usize,
    /// Lit pixels as 0-based cycle indices below `width * height`.
    pub lit: BTreeSet<usize>,
    /// Cycles the program ran for, including any past the last row.
    pub cycles: usize,
}

impl Screen {
    pub fn is_lit(&self, cycle: usize) -> bool {
        self.lit.contains(&cycle)
    }

    /// Rows of `#` (lit) and `.` (dark).
    pub fn rows(&self) -> Vec<String> {
        render_rows(self.width, self.height, |c| self.is_lit(c))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Register value during each cycle, 0-based.
fn register_trace(program: &Program) -> impl Iterator<Item = i64> + '_ {
    program
        .iter()
        .scan(INITIAL_X, |x, instruction| {
            let during = *x;
            *x += instruction.delta();
            Some(std::iter::repeat_n(during, instruction.cycles()))
        })
        .flatten()
}

/// Run `program` on a `width x height` CRT.
pub fn run(program: &Program, width: usize, height: usize) -> Screen {
    let total = width * height;
    let mut lit = BTreeSet::new();
    let mut cycles = 0;

    for (cycle, x) in register_trace(program).enumerate() {
        cycles = cycle + 1;
        if cycle < total && ((cycle % width) as i64 - x).abs() <= 1 {
            lit.insert(cycle);
        }
    }

    Screen {
        width,
        height,
        lit,
        cycles,
    }
}

/// Sum of `cycle * X` at each 1-based probe cycle the program reaches.
pub fn signal_strength(program: &Program, probes: &[usize]) -> i64 {
    let trace: Vec<i64> = register_trace(program).collect();
    probes
        .iter()
        .filter_map(|&probe| {
            let x = trace.get(probe.checked_sub(1)?)?;
            Some(probe as i64 * x)
        })
        .sum()
}

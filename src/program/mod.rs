//! # CPU Programs
//!
//! The two-instruction program format the CRT puzzle runs:
//!
//! | Instruction | Cycles | Effect |
//! |-------------|--------|--------|
//! | `noop` | 1 | none |
//! | `addx V` | 2 | `X += V` after the second cycle |
//!
//! A puzzle input is a list of instructions, a blank line and a trailer of
//! the form `Config: width = N` naming the raster width.
//!
//! ## Example
//!
//! ```
//! use crtgen::program::{Instruction, Program};
//!
//! let program: Program = "noop\naddx -3\n\nConfig: width = 40\n".parse().unwrap();
//! assert_eq!(program.instructions, vec![Instruction::Noop, Instruction::Addx(-3)]);
//! assert_eq!(program.width, Some(40));
//! assert_eq!(program.cycles(), 3);
//! ```

mod emit;

pub use emit::{emit, write_puzzle};

use std::fmt;
use std::str::FromStr;

use crate::error::CrtgenError;

/// Prefix of the trailer line carrying the raster width.
pub const WIDTH_TRAILER: &str = "Config: width = ";

/// A single CPU instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Do nothing for one cycle.
    Noop,
    /// Add to the X register; takes two cycles.
    Addx(i64),
}

impl Instruction {
    /// Cycles consumed when executed.
    pub fn cycles(&self) -> usize {
        match self {
            Self::Noop => 1,
            Self::Addx(_) => 2,
        }
    }

    /// Register change applied once the instruction completes.
    pub fn delta(&self) -> i64 {
        match self {
            Self::Noop => 0,
            Self::Addx(v) => *v,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => write!(f, "noop"),
            Self::Addx(v) => write!(f, "addx {}", v),
        }
    }
}

impl FromStr for Instruction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let op = parts.next().ok_or_else(|| "empty instruction".to_string())?;
        let instruction = match op {
            "noop" => Self::Noop,
            "addx" => {
                let arg = parts
                    .next()
                    .ok_or_else(|| "addx needs an argument".to_string())?;
                let value = arg
                    .parse()
                    .map_err(|e| format!("bad addx argument '{}': {}", arg, e))?;
                Self::Addx(value)
            }
            other => return Err(format!("unknown instruction '{}'", other)),
        };

        if let Some(extra) = parts.next() {
            return Err(format!("unexpected operand '{}'", extra));
        }
        Ok(instruction)
    }
}

/// A parsed puzzle input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
    /// Raster width from the `Config:` trailer, if present.
    pub width: Option<usize>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            width: None,
        }
    }

    /// Total cycles needed to run every instruction.
    pub fn cycles(&self) -> usize {
        self.instructions.iter().map(Instruction::cycles).sum()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl FromStr for Program {
    type Err = CrtgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut program = Program::default();

        for (index, raw) in s.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let parse_error = |message: String| CrtgenError::Parse {
                line: index + 1,
                message,
            };

            if let Some(width) = line.strip_prefix(WIDTH_TRAILER) {
                let width = width
                    .trim()
                    .parse()
                    .map_err(|e| parse_error(format!("bad width '{}': {}", width, e)))?;
                program.width = Some(width);
                continue;
            }

            program
                .instructions
                .push(line.parse().map_err(parse_error)?);
        }

        Ok(program)
    }
}

//! # Instruction Stream Synthesis
//!
//! Works backwards from a target raster to a program whose beam draws it.
//!
//! ## Timing model
//!
//! The synthesizer walks the raster one decision at a time, tracking the
//! beam position and the cycle it is deciding for. A move emitted at cycle
//! `c` takes effect for cycles `c` and `c + 1`; the program's first two
//! cycles are never steered (see [`UNRELIABLE_CYCLES`]).
//!
//! Each row change folds a `-width` correction into the next move.
//!
//! ## Decisions
//!
//! Checked in order, first match wins:
//!
//! | Beam | Target | Action |
//! |------|--------|--------|
//! | lit | dark | step away: `+1` if the next cycle is a target, else `4..=13` |
//! | dark | lit | jump onto the current (or previous) column |
//! | dark, next dark | - | filler jump `8..=17` |
//! | row changed | - | bare `-width` correction, cycle does not advance |
//! | - | - | `noop` |
//!
//! ## Example
//!
//! ```
//! use crtgen::{generate, GeneratorConfig};
//! use crtgen::synth::FixedNoise;
//!
//! let config = GeneratorConfig::with_message("S");
//! let puzzle = generate(&config, &mut FixedNoise(0)).unwrap();
//! assert_eq!(puzzle.synthesis.width, 10);
//! assert!(puzzle.synthesis.end_cycle() >= 60);
//! ```

mod noise;

pub use noise::{FixedNoise, JITTER_SPAN, Noise, RandomNoise};

use std::collections::BTreeSet;

use crate::program::{self, Instruction, Program};
use crate::raster::{Raster, UNRELIABLE_CYCLES};

/// Beam position before the first instruction.
pub const START_POSITION: i64 = 1;

/// Smallest jump used to move a lit beam off a dark cycle.
const DARKEN_BASE: i64 = 4;

/// Smallest filler jump.
const FILLER_BASE: i64 = 8;

/// One emitted instruction and where it sits in the synthesizer's clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Cycle being decided when the instruction was emitted.
    pub cycle: usize,
    pub instruction: Instruction,
    /// Cycles the synthesizer advanced past this step (0 for row corrections).
    pub advance: usize,
}

impl Step {
    /// A bare row-wrap correction, which does not move the clock.
    pub fn is_correction(&self) -> bool {
        self.advance == 0
    }
}

/// Synthesizer state.
#[derive(Debug, Clone, Copy)]
struct Beam {
    position: i64,
    cycle: usize,
    last_row: usize,
}

impl Beam {
    fn new() -> Self {
        Self {
            position: START_POSITION,
            cycle: UNRELIABLE_CYCLES,
            last_row: 0,
        }
    }
}

/// Wraparound adjacency: column 0 and the last column touch.
fn wraps(position: i64, column: usize, width: usize) -> bool {
    (position == 0 && column == width - 1) || (position == width as i64 - 1 && column == 0)
}

/// Lit test used while deciding: compares the position with the raw cycle.
pub fn would_light(position: i64, cycle: usize, width: usize) -> bool {
    (position - cycle as i64).abs() <= 1 || wraps(position, cycle % width, width)
}

/// Lit test in the column frame, used when replaying steps.
pub fn column_lit(position: i64, cycle: usize, width: usize) -> bool {
    let column = cycle % width;
    (position - column as i64).abs() <= 1 || wraps(position, column, width)
}

/// Synthesize a program that draws `raster`.
pub fn synthesize(raster: &Raster, noise: &mut impl Noise) -> Synthesis {
    let width = raster.width as i64;
    let mut beam = Beam::new();
    let mut steps = Vec::new();

    while beam.cycle < raster.cycles() {
        let cycle = beam.cycle;
        let lit = would_light(beam.position, cycle, raster.width);
        let wanted = raster.is_target(cycle);
        let next_wanted = raster.is_target(cycle + 1);

        let row = raster.row(cycle);
        let wrap = if row != beam.last_row { -width } else { 0 };
        beam.last_row = row;

        let (instruction, advance) = if lit && !wanted {
            let away = if next_wanted {
                1
            } else {
                DARKEN_BASE + noise.jitter()
            };
            (Instruction::Addx(away + wrap), 2)
        } else if !lit && wanted {
            // Cover the next cycle too when it also needs light
            let target = if next_wanted { cycle } else { cycle - 1 };
            let moved = raster.column(target) as i64 - beam.position + wrap;
            (Instruction::Addx(moved), 2)
        } else if !wanted && !next_wanted {
            (Instruction::Addx(FILLER_BASE + noise.jitter() + wrap), 2)
        } else if wrap != 0 {
            (Instruction::Addx(wrap), 0)
        } else {
            (Instruction::Noop, 1)
        };

        beam.position += instruction.delta();
        beam.cycle += advance;
        steps.push(Step {
            cycle,
            instruction,
            advance,
        });
    }

    Synthesis {
        width: raster.width,
        height: raster.height,
        steps,
    }
}

/// Output of [`synthesize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub width: usize,
    pub height: usize,
    pub steps: Vec<Step>,
}

impl Synthesis {
    pub fn instructions(&self) -> Vec<Instruction> {
        self.steps.iter().map(|s| s.instruction).collect()
    }

    /// The instructions as a program carrying the raster width.
    pub fn program(&self) -> Program {
        Program {
            instructions: self.instructions(),
            width: Some(self.width),
        }
    }

    /// Puzzle-input text for this synthesis.
    pub fn to_puzzle(&self) -> String {
        program::emit(&self.instructions(), self.width)
    }

    /// Cycle the synthesizer stopped at.
    pub fn end_cycle(&self) -> usize {
        self.steps
            .last()
            .map_or(UNRELIABLE_CYCLES, |s| s.cycle + s.advance)
    }

    /// Number of bare row corrections emitted.
    pub fn corrections(&self) -> usize {
        self.steps.iter().filter(|s| s.is_correction()).count()
    }

    /// Replay the steps in the synthesizer's timing model and collect the
    /// cycles the beam lights.
    pub fn lit_cycles(&self) -> BTreeSet<usize> {
        let total = self.width * self.height;
        let mut position = START_POSITION;
        let mut lit = BTreeSet::new();

        for step in &self.steps {
            position += step.instruction.delta();
            lit.extend(
                (step.cycle..step.cycle + step.advance)
                    .filter(|&c| c < total && column_lit(position, c, self.width)),
            );
        }
        lit
    }
}

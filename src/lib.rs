//! # crtgen - CRT Puzzle Input Generator
//!
//! Generates programs for the two-instruction "CPU + CRT" puzzle whose
//! screen output spells a chosen message. It provides:
//!
//! - **Glyphs**: block letters scanned from ASCII art
//! - **Layout**: message to pixel coordinates
//! - **Raster**: pixel coordinates to the cycles that must be lit
//! - **Synthesis**: the `addx`/`noop` stream that lights exactly those cycles,
//!   padded with random filler
//! - **Decoding**: a CRT simulator to check what a program draws
//!
//! ## Quick Start
//!
//! ```
//! use crtgen::{generate, GeneratorConfig};
//! use crtgen::synth::RandomNoise;
//!
//! let config = GeneratorConfig::with_message("SEND NUDES");
//! let puzzle = generate(&config, &mut RandomNoise::seeded(1))?;
//!
//! let text = puzzle.to_text();
//! assert!(text.ends_with("Config: width = 50\n"));
//!
//! # Ok::<(), crtgen::CrtgenError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`glyph`] | Glyph table |
//! | [`layout`] | Text layout |
//! | [`raster`] | Raster sizing and target cycles |
//! | [`synth`] | Instruction stream synthesis |
//! | [`program`] | Instruction format, parsing and emitting |
//! | [`crt`] | CRT decoder |
//! | [`config`] | Generator configuration |
//! | [`error`] | Error types |

pub mod config;
pub mod crt;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod program;
pub mod raster;
pub mod synth;

pub use config::GeneratorConfig;
pub use error::CrtgenError;

use glyph::GlyphTable;
use raster::Raster;
use synth::{Noise, Synthesis};

/// Everything produced by one generation run.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub raster: Raster,
    pub synthesis: Synthesis,
}

impl Puzzle {
    /// The puzzle input text.
    pub fn to_text(&self) -> String {
        self.synthesis.to_puzzle()
    }

    /// Decode the generated program on a CRT of the raster's size.
    pub fn decode(&self) -> crt::Screen {
        crt::run(
            &self.synthesis.program(),
            self.raster.width,
            self.raster.height,
        )
    }

    /// True when the decoded screen matches the target from the first
    /// steerable cycle onward.
    pub fn decodes_cleanly(&self) -> bool {
        let from = raster::UNRELIABLE_CYCLES + 1;
        let screen = self.decode();
        screen.lit.range(from..).eq(self.raster.targets.range(from..))
    }
}

/// Run the whole pipeline: layout, raster, synthesis.
pub fn generate(config: &GeneratorConfig, noise: &mut impl Noise) -> Result<Puzzle, CrtgenError> {
    config.validate()?;

    let table = GlyphTable::standard();
    let layout = layout::layout(&table, &config.message, &config.raster)?;
    let raster = Raster::from_layout(&layout, &config.raster);
    let synthesis = synth::synthesize(&raster, noise);

    Ok(Puzzle { raster, synthesis })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{FixedNoise, RandomNoise};

    #[test]
    fn test_generate_default_message() {
        let puzzle = generate(&GeneratorConfig::default(), &mut RandomNoise::seeded(9)).unwrap();
        assert_eq!(puzzle.raster.width, 50);
        assert_eq!(puzzle.raster.height, 6);
        assert!(puzzle.decodes_cleanly());
    }

    #[test]
    fn test_generate_rejects_unsupported() {
        let err = generate(&GeneratorConfig::with_message("SEND HELP"), &mut FixedNoise(0))
            .unwrap_err();
        assert!(matches!(
            err,
            CrtgenError::UnsupportedCharacter { ch: 'H', index: 5 }
        ));
    }

    #[test]
    fn test_generate_rejects_bad_config() {
        let mut config = GeneratorConfig::with_message("S");
        config.raster.granularity = 0;
        assert!(matches!(
            generate(&config, &mut FixedNoise(0)),
            Err(CrtgenError::Config(_))
        ));
    }

    #[test]
    fn test_generate_empty_message() {
        let puzzle = generate(&GeneratorConfig::with_message(""), &mut FixedNoise(2)).unwrap();
        assert_eq!(puzzle.raster.width, 10);
        assert!(puzzle.raster.targets.is_empty());
        assert!(!puzzle.synthesis.steps.is_empty());
    }
}

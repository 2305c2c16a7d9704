//! # crtgen CLI
//!
//! Command-line interface for generating and checking CRT puzzle inputs.
//!
//! ## Usage
//!
//! ```bash
//! # Generate the stock puzzle input
//! crtgen generate
//!
//! # Spell something else, reproducibly, into a file
//! crtgen generate "DUNE" --seed 7 --output input.txt
//!
//! # Render what a puzzle input draws
//! crtgen decode input.txt
//!
//! # Show the supported characters
//! crtgen glyphs
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::PathBuf;

use crtgen::{
    CrtgenError, GeneratorConfig, crt, generate,
    glyph::GlyphTable,
    program::{Program, write_puzzle},
    synth::RandomNoise,
};

/// crtgen - CRT puzzle input generator
#[derive(Parser, Debug)]
#[command(name = "crtgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a puzzle input that spells a message
    Generate {
        /// Message to spell (defaults to the config file's, or "SEND NUDES")
        message: Option<String>,

        /// JSON config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Seed for the filler noise
        #[arg(long)]
        seed: Option<u64>,

        /// Round the raster width up to a multiple of this
        #[arg(long)]
        granularity: Option<usize>,

        /// Write the puzzle input here instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Run a puzzle input and print the CRT output
    Decode {
        /// Puzzle input file
        input: PathBuf,

        /// Screen width (defaults to the input's Config line, or 40)
        #[arg(long)]
        width: Option<usize>,

        /// Screen height in rows
        #[arg(long, default_value = "6")]
        height: usize,
    },

    /// List the supported characters
    Glyphs,
}

/// Width of the classic puzzle screen.
const CLASSIC_WIDTH: usize = 40;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CrtgenError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            message,
            config,
            seed,
            granularity,
            output,
        } => {
            let mut config = match config {
                Some(path) => GeneratorConfig::load(&path)?,
                None => GeneratorConfig::default(),
            };
            if let Some(message) = message {
                config.message = message;
            }
            if let Some(granularity) = granularity {
                config.raster.granularity = granularity;
            }
            if seed.is_some() {
                config.seed = seed;
            }

            let seed = config.seed.unwrap_or_else(rand::random);
            let puzzle = generate(&config, &mut RandomNoise::seeded(seed))?;

            eprintln!(
                "Generated {:?}: {}x{} raster, {} instructions (seed {})",
                config.message,
                puzzle.raster.width,
                puzzle.raster.height,
                puzzle.synthesis.steps.len(),
                seed
            );
            if !puzzle.decodes_cleanly() {
                eprintln!("Warning: decoded output differs from the message, try another seed");
            }

            match output {
                Some(path) => {
                    fs::write(&path, puzzle.to_text())?;
                    eprintln!("Saved to {}", path.display());
                }
                None => {
                    write_puzzle(
                        &mut io::stdout().lock(),
                        &puzzle.synthesis.instructions(),
                        puzzle.raster.width,
                    )?;
                }
            }
        }

        Commands::Decode {
            input,
            width,
            height,
        } => {
            let program: Program = fs::read_to_string(&input)?.parse()?;
            let width = width.or(program.width).unwrap_or(CLASSIC_WIDTH);
            if width == 0 {
                return Err(CrtgenError::Config("width must be positive".into()));
            }

            let screen = crt::run(&program, width, height);
            print!("{}", screen);
            println!();
            println!(
                "Signal strength: {}",
                crt::signal_strength(&program, &crt::STANDARD_PROBES)
            );
            println!("Cycles: {}", screen.cycles);
        }

        Commands::Glyphs => {
            let table = GlyphTable::standard();
            for glyph in table.iter() {
                println!("'{}' ({} pixels)", glyph.ch(), glyph.pixels().len());
                for line in glyph.art().lines().skip(1) {
                    println!("  {}", line);
                }
            }
        }
    }

    Ok(())
}

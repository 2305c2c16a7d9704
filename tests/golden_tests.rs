//! # Golden Tests
//!
//! These tests ensure that puzzle generation produces consistent output.
//!
//! ## Test Coverage
//!
//! - **Puzzle text** (`.txt`): fixed-noise generation compared byte for byte.
//! - **Decoding**: randomly seeded generations of the stock message are run
//!   through the CRT decoder and must spell the message.
//!
//! Random filler makes seeded output depend on the `rand` version, so only
//! fixed-noise output is stored as golden files.

use crtgen::crt;
use crtgen::program::Program;
use crtgen::synth::{FixedNoise, RandomNoise};
use crtgen::{GeneratorConfig, generate};
use pretty_assertions::assert_eq;
use std::fs;

/// Path to golden test directory
const GOLDEN_DIR: &str = "tests/golden";

fn golden(name: &str) -> String {
    let path = format!("{}/{}", GOLDEN_DIR, name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing golden file {}: {}", path, e))
}

#[test]
fn test_golden_single_glyph() {
    let puzzle = generate(&GeneratorConfig::with_message("S"), &mut FixedNoise(0)).unwrap();
    assert_eq!(puzzle.to_text(), golden("s_fixed_noise.txt"));
}

#[test]
fn test_golden_parses() {
    let program: Program = golden("s_fixed_noise.txt").parse().unwrap();
    assert_eq!(program.width, Some(10));
    assert_eq!(program.len(), 31);
    assert_eq!(program.cycles(), 60);
}

#[test]
fn test_stock_message_decodes() {
    let config = GeneratorConfig::default();
    for seed in [0, 1, 2, 42, 1234, u64::MAX] {
        let puzzle = generate(&config, &mut RandomNoise::seeded(seed)).unwrap();
        assert!(puzzle.decodes_cleanly(), "seed {} does not decode", seed);
    }
}

#[test]
fn test_stock_message_screen() {
    let puzzle = generate(&GeneratorConfig::default(), &mut FixedNoise(5)).unwrap();

    // Round trip through text like a puzzle solver would
    let program: Program = puzzle.to_text().parse().unwrap();
    let width = program.width.unwrap();
    let screen = crt::run(&program, width, 6);

    // Cycles 0..3 show the beam before the program can steer it
    let rows: Vec<String> = screen.rows().into_iter().map(|r| r[3..].to_string()).collect();
    assert_eq!(
        rows,
        vec![
            "###.####.#..#.##......#..#.#..#.##...####..###.",
            "....#....##.#.#.#.....##.#.#..#.#.#..#....#....",
            "##..###..##.#.#..#....##.#.#..#.#..#.###...##..",
            "..#.#....#.##.#..#....#.##.#..#.#..#.#.......#.",
            "..#.#....#.##.#.#.....#.##.#..#.#.#..#.......#.",
            "##..####.#..#.##......#..#..##..##...####.###..",
        ]
    );
}

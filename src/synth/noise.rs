//! Noise sources for the filler deltas.
//!
//! Noise only disguises the program. It never decides which cycles are lit,
//! so tests can swap in [`FixedNoise`] and still check the rendered pattern.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of [`Noise::jitter`].
pub const JITTER_SPAN: i64 = 10;

/// Source of filler randomness.
pub trait Noise {
    /// A value in `0..JITTER_SPAN`.
    fn jitter(&mut self) -> i64;
}

/// Noise drawn from a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomNoise<R> {
    rng: R,
}

impl<R: Rng> RandomNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNoise<StdRng> {
    /// Reproducible noise for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Noise for RandomNoise<R> {
    fn jitter(&mut self) -> i64 {
        self.rng.random_range(0..JITTER_SPAN)
    }
}

/// Always returns the same jitter, clamped into range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedNoise(pub i64);

impl Noise for FixedNoise {
    fn jitter(&mut self) -> i64 {
        self.0.clamp(0, JITTER_SPAN - 1)
    }
}

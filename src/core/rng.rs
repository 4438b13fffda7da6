//! Production random source.

use crate::domain::ports::RandomSource;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// [`RandomSource`] backed by a single [`StdRng`], seeded once at construction.
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Seeds from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible stream: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `seeded` when a seed is given, `from_entropy` otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}

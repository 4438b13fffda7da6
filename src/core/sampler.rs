//! Draw-without-replacement over `1..=pool_size`.
//!
//! Uses a partial Fisher–Yates shuffle, so a request for `count` numbers
//! always finishes after exactly `count` draws from the random source.

use crate::core::rng::StdRandomSource;
use crate::domain::model::NumberSet;
use crate::domain::ports::RandomSource;
use crate::utils::error::{LottoError, Result};
use std::collections::HashMap;

/// Pools up to this size are shuffled in a dense array; larger pools only
/// track the positions that have been swapped.
pub const DENSE_POOL_LIMIT: u32 = 1 << 16;

pub struct UniqueSampleGenerator<R: RandomSource> {
    rng: R,
}

impl UniqueSampleGenerator<StdRandomSource> {
    pub fn from_entropy() -> Self {
        Self::new(StdRandomSource::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRandomSource::seeded(seed))
    }
}

impl<R: RandomSource> UniqueSampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// `count` distinct numbers from `[1, pool_size]`, in draw order.
    pub fn generate(&mut self, pool_size: u32, count: u32) -> Result<NumberSet> {
        sample_unique(&mut self.rng, pool_size, count)
    }
}

/// Free-function form of [`UniqueSampleGenerator::generate`].
pub fn sample_unique<R: RandomSource + ?Sized>(
    rng: &mut R,
    pool_size: u32,
    count: u32,
) -> Result<NumberSet> {
    check_parameters(pool_size, count)?;

    let numbers = if pool_size <= DENSE_POOL_LIMIT {
        dense_partial_shuffle(rng, pool_size, count)
    } else {
        sparse_partial_shuffle(rng, pool_size, count)
    };

    Ok(NumberSet::from(numbers))
}

fn check_parameters(pool_size: u32, count: u32) -> Result<()> {
    if pool_size == 0 {
        return Err(LottoError::InvalidParameters {
            pool_size,
            count,
            reason: "pool size must be at least 1".to_string(),
        });
    }
    if count > pool_size {
        return Err(LottoError::InvalidParameters {
            pool_size,
            count,
            reason: "cannot draw more distinct numbers than the pool holds".to_string(),
        });
    }
    Ok(())
}

fn dense_partial_shuffle<R: RandomSource + ?Sized>(
    rng: &mut R,
    pool_size: u32,
    count: u32,
) -> Vec<u32> {
    let mut pool: Vec<u32> = (1..=pool_size).collect();
    for i in 0..count {
        let j = rng.next_u32_range(i, pool_size - 1);
        pool.swap(i as usize, j as usize);
    }
    pool.truncate(count as usize);
    pool
}

// Same swaps as the dense version; an unmapped position p still holds p + 1.
fn sparse_partial_shuffle<R: RandomSource + ?Sized>(
    rng: &mut R,
    pool_size: u32,
    count: u32,
) -> Vec<u32> {
    let mut displaced: HashMap<u32, u32> = HashMap::with_capacity(count as usize);
    let mut numbers = Vec::with_capacity(count as usize);

    for i in 0..count {
        let j = rng.next_u32_range(i, pool_size - 1);
        let at_i = displaced.get(&i).copied().unwrap_or(i + 1);
        let at_j = displaced.get(&j).copied().unwrap_or(j + 1);
        // position i is never read again
        displaced.insert(j, at_i);
        numbers.push(at_j);
    }

    numbers
}

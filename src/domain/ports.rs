use crate::domain::model::{GameRequest, NumberSet};
use crate::utils::error::Result;

/// Source of uniform random integers.
///
/// Production code wraps a real RNG seeded once per process; tests inject a
/// seeded or scripted implementation to get reproducible draws.
pub trait RandomSource {
    /// Uniform `u32` in `[min, max]`, both inclusive. Callers guarantee `min <= max`.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        (**self).next_u32_range(min, max)
    }
}

/// Where the three request values come from. `None` means "not supplied here".
pub trait ConfigProvider {
    fn games(&self) -> Option<u32>;
    fn pool_size(&self) -> Option<u32>;
    fn numbers_per_game(&self) -> Option<u32>;
    fn seed(&self) -> Option<u64>;
}

/// Consumer of generated games, called in generation order.
pub trait ResultSink {
    fn begin(&mut self, request: &GameRequest) -> Result<()>;
    fn game(&mut self, game_number: u32, numbers: &NumberSet) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

use crate::utils::error::{LottoError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRequest {
    pub games: u32,
    pub pool_size: u32,
    pub numbers_per_game: u32,
}

impl GameRequest {
    pub fn new(games: u32, pool_size: u32, numbers_per_game: u32) -> Self {
        Self {
            games,
            pool_size,
            numbers_per_game,
        }
    }
}

impl Validate for GameRequest {
    fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| LottoError::InvalidParameters {
            pool_size: self.pool_size,
            count: self.numbers_per_game,
            reason: reason.to_string(),
        };

        validate_positive_number("pool size", self.pool_size, 1)
            .map_err(|_| invalid("pool size must be at least 1"))?;
        validate_range("numbers per game", self.numbers_per_game, 0, self.pool_size)
            .map_err(|_| invalid("numbers per game exceeds pool size"))?;

        Ok(())
    }
}

/// The numbers drawn for one game, in the order they were accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberSet(Vec<u32>);

impl NumberSet {
    pub fn numbers(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending copy for display. The draw order itself is left untouched.
    pub fn sorted(&self) -> NumberSet {
        let mut numbers = self.0.clone();
        numbers.sort_unstable();
        NumberSet(numbers)
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl From<Vec<u32>> for NumberSet {
    fn from(numbers: Vec<u32>) -> Self {
        NumberSet(numbers)
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCollection {
    pub request: GameRequest,
    pub games: Vec<NumberSet>,
}

impl ResultCollection {
    pub fn new(request: GameRequest) -> Self {
        Self {
            request,
            games: Vec::with_capacity(request.games as usize),
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

pub mod prompt;
pub mod toml_config;

use crate::core::{ConfigProvider, GameRequest};
use crate::utils::error::Result;
use prompt::Prompter;
use std::io::{BufRead, Write};

#[cfg(feature = "cli")]
use crate::app::output::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const GAMES_FIELD: &str = "number of games";
pub const POOL_SIZE_FIELD: &str = "pool size";
pub const NUMBERS_PER_GAME_FIELD: &str = "numbers per game";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "lotto-gen")]
#[command(version)]
#[command(about = "Generate unique random numbers for Lotto, OzLotto and Powerball entries")]
pub struct CliConfig {
    /// How many games to generate (prompted when omitted)
    #[arg(short, long)]
    pub games: Option<u32>,

    /// Largest number that can be drawn, e.g. 45 for Lotto (prompted when omitted)
    #[arg(short, long)]
    pub pool_size: Option<u32>,

    /// Numbers drawn per game, e.g. 6 for Lotto (prompted when omitted)
    #[arg(short, long = "numbers")]
    pub numbers_per_game: Option<u32>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file supplying defaults for any of the above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print each game's numbers in ascending order
    #[arg(long)]
    pub sort: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn games(&self) -> Option<u32> {
        self.games
    }

    fn pool_size(&self) -> Option<u32> {
        self.pool_size
    }

    fn numbers_per_game(&self) -> Option<u32> {
        self.numbers_per_game
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            if path.trim().is_empty() {
                return Err(crate::utils::error::LottoError::ValidationError {
                    field: "config".to_string(),
                    value: path.clone(),
                    reason: "Path cannot be empty".to_string(),
                });
            }
        }
        // Partial requests are completed later; only check what is already known.
        if let (Some(pool_size), Some(numbers_per_game)) = (self.pool_size, self.numbers_per_game)
        {
            GameRequest::new(self.games.unwrap_or(0), pool_size, numbers_per_game).validate()?;
        }
        Ok(())
    }
}

/// Provider with nothing set, for callers that have no config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConfig;

impl ConfigProvider for NoConfig {
    fn games(&self) -> Option<u32> {
        None
    }

    fn pool_size(&self) -> Option<u32> {
        None
    }

    fn numbers_per_game(&self) -> Option<u32> {
        None
    }

    fn seed(&self) -> Option<u64> {
        None
    }
}

/// First seed found, primary provider first.
pub fn resolve_seed(primary: &dyn ConfigProvider, fallback: &dyn ConfigProvider) -> Option<u64> {
    primary.seed().or_else(|| fallback.seed())
}

/// Builds the request from `primary`, then `fallback`, prompting for whatever neither supplies.
///
/// Prompts are asked in the console order: games, pool size, numbers per game.
pub fn resolve_request<R: BufRead, W: Write>(
    primary: &dyn ConfigProvider,
    fallback: &dyn ConfigProvider,
    prompter: &mut Prompter<R, W>,
) -> Result<GameRequest> {
    let games = match primary.games().or_else(|| fallback.games()) {
        Some(games) => games,
        None => prompter.ask("How many games to play? ", GAMES_FIELD)?,
    };
    let pool_size = match primary.pool_size().or_else(|| fallback.pool_size()) {
        Some(pool_size) => pool_size,
        None => prompter.ask("Highest number in the pool (e.g. 45)? ", POOL_SIZE_FIELD)?,
    };
    let numbers_per_game = match primary
        .numbers_per_game()
        .or_else(|| fallback.numbers_per_game())
    {
        Some(numbers) => numbers,
        None => prompter.ask("Numbers per game entry row? ", NUMBERS_PER_GAME_FIELD)?,
    };

    let request = GameRequest::new(games, pool_size, numbers_per_game);
    tracing::debug!("Resolved request: {:?}", request);
    Ok(request)
}

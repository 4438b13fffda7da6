use crate::app::output::OutputFormat;
use crate::core::{ConfigProvider, GameRequest};
use crate::utils::error::{LottoError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File form of the run settings. Every section and key is optional so a
/// file can pin just the game shape and leave the rest to flags or prompts.
///
/// ```toml
/// [game]
/// games = 10
/// pool_size = 45
/// numbers_per_game = 6
///
/// [generator]
/// seed = 42
///
/// [output]
/// format = "text"
/// sort = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub game: GameSection,
    #[serde(default)]
    pub generator: GeneratorSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSection {
    pub games: Option<u32>,
    pub pool_size: Option<u32>,
    pub numbers_per_game: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub sort: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LottoError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LottoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value of the environment variable.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            LottoError::ConfigError {
                message: format!("bad substitution pattern: {}", e),
            }
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(LottoError::ConfigError {
                message: format!("environment variable(s) not set: {}", missing.join(", ")),
            });
        }

        Ok(result.into_owned())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.format
    }

    pub fn sort(&self) -> bool {
        self.output.sort.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn games(&self) -> Option<u32> {
        self.game.games
    }

    fn pool_size(&self) -> Option<u32> {
        self.game.pool_size
    }

    fn numbers_per_game(&self) -> Option<u32> {
        self.game.numbers_per_game
    }

    fn seed(&self) -> Option<u64> {
        self.generator.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(pool_size) = self.game.pool_size {
            validate_positive_number("game.pool_size", pool_size, 1)?;
        }
        if let (Some(pool_size), Some(numbers_per_game)) =
            (self.game.pool_size, self.game.numbers_per_game)
        {
            GameRequest::new(self.game.games.unwrap_or(0), pool_size, numbers_per_game)
                .validate()?;
        }
        Ok(())
    }
}

use std::io::Read;
use std::path::Path;

use crate::engine::Board;
use crate::error::{ConfigError, GameError};

/// Runner configuration, usually read from a TOML file.
///
/// ```toml
/// size = 4
/// seed = 42
/// games = 8
/// max_steps = 5000
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board side length (N in N×N).
    pub size: usize,
    /// Base seed; game `i` uses `seed + i`. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Number of games to play.
    pub games: usize,
    /// Stop a game after this many moves even if it is not over.
    pub max_steps: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { size: 4, seed: None, games: 1, max_steps: None }
    }
}

impl GameConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < Board::MIN_SIZE {
            return Err(GameError::InvalidSize(self.size).into());
        }
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        Ok(())
    }
}

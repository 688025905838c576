use std::io;

/// Errors raised at the boundary of the rules engine.
///
/// Routine gameplay outcomes (no legal move, nowhere to spawn) are never
/// errors; these variants only cover malformed input handed in by a caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid direction {0:?} (expected left, right, up or down)")]
    InvalidDirection(String),
    #[error("invalid direction code {0} (expected 0..=3)")]
    InvalidDirectionCode(u8),
    #[error("board size {0} is too small (minimum 2)")]
    InvalidSize(usize),
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("tile value {0} is neither empty nor a power of two >= 2")]
    InvalidTileValue(u64),
    #[error("tile values add up to more than {max}")]
    TotalValueTooLarge { max: u64 },
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Game(#[from] GameError),
    #[error("games must be at least 1")]
    NoGames,
}

//! merge2048: rules engine for the 2048 sliding-tile merge puzzle
//!
//! This crate provides:
//! - An N×N `Board` with ergonomic methods (`shift`, `with_spawned_tile`, `score`, ...)
//! - A persistent `GameState` that applies one move per call (`game` module)
//! - An injectable `TileSource` so every random draw can be seeded or scripted
//! - A TOML-backed `GameConfig` for the headless runner (`config` module)
//!
//! Quick start:
//! ```
//! use merge2048::engine::{Move, RandomSource};
//! use merge2048::game::GameState;
//!
//! // Deterministic game with a seeded source
//! let mut source = RandomSource::seeded(42);
//! let g0 = GameState::new_game(4, &mut source);
//! let g1 = g0.apply_move(Move::Left, &mut source);
//! assert!(g1.score() >= g0.score());
//! ```
//!
//! Full loop (simplest possible)
//! ```
//! use merge2048::engine::RandomSource;
//! use merge2048::game::GameState;
//!
//! let mut source = RandomSource::seeded(123);
//! let mut game = GameState::new_game(4, &mut source);
//! // always take the first legal direction
//! while let Some(&dir) = game.legal_moves().first() {
//!     game = game.apply_move(dir, &mut source);
//! }
//! assert!(game.is_game_over());
//! println!("{}", game.board());
//! ```
//!
pub mod config;
pub mod engine;
pub mod error;
pub mod game;

pub use error::{ConfigError, GameError};

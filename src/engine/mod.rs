//! Engine module: N×N board model, move resolution, spawning and
//! game-over detection. Public API stays small and ergonomic.
//!
//! - `Board` is the immutable grid with query helpers and `shift`.
//! - Free functions mirror the methods when convenient (e.g., `resolve`).
//! - Orientation transforms reduce all four directions to one leftward
//!   slide, so the resolver is written once.

pub mod orientation;
mod ops;
mod spawn;
pub mod state;
mod tile;

pub use state::{Board, Move, Position};
pub use tile::{merge_tiles, Tile, TileKey};

pub use ops::{can_move, is_game_over, resolve};
pub use spawn::{spawn, RandomSource, TileSource};

#[cfg(test)]
pub(crate) use spawn::tests::Scripted;

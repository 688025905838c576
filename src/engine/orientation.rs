//! Reduce every direction to a single leftward slide.
//!
//! Each direction gets an `(into, out_of)` pair of board transforms with
//! `out_of(into(b)) == b`. The resolver only ever slides towards index 0 of
//! each row, so `into` rotates the requested direction onto "left" and
//! `out_of` undoes it.

use super::state::{Board, Move};
use super::tile::Tile;

/// A board-to-board transform.
pub type Transform = fn(Board) -> Board;

/// The pair of transforms mapping `dir` onto the leftward orientation and back.
#[derive(Clone, Copy)]
pub struct Orientation {
    pub into: Transform,
    pub out_of: Transform,
}

impl Orientation {
    pub fn for_move(dir: Move) -> Self {
        match dir {
            Move::Left => Orientation { into: identity, out_of: identity },
            Move::Right => Orientation { into: reverse_rows, out_of: reverse_rows },
            Move::Up => Orientation { into: transpose, out_of: transpose },
            Move::Down => Orientation { into: transpose_then_reverse, out_of: reverse_then_transpose },
        }
    }
}

pub fn identity(board: Board) -> Board { board }

/// Mirror the board left-to-right.
pub fn reverse_rows(mut board: Board) -> Board {
    for row in board.rows_mut() {
        row.reverse();
    }
    board
}

/// Swap rows and columns.
pub fn transpose(board: Board) -> Board {
    let rows: Vec<&[Tile]> = board.rows().collect();
    board.map_tiles(|pos, _| rows[pos.x][pos.y])
}

fn transpose_then_reverse(board: Board) -> Board { reverse_rows(transpose(board)) }

fn reverse_then_transpose(board: Board) -> Board { transpose(reverse_rows(board)) }

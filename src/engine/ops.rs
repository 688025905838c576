use super::orientation::Orientation;
use super::state::{Board, Move};
use super::tile::{merge_tiles, Tile};

/// Slide/merge every tile in `direction`. No randomness, no spawn.
///
/// A tile produced by a merge cannot merge again within the same call, so
/// `[2, 2, 2, 2]` moving left becomes `[4, 4, 0, 0]`.
pub fn resolve(direction: Move, board: &Board) -> Board {
    let orientation = Orientation::for_move(direction);
    let oriented = (orientation.into)(board.clone());
    (orientation.out_of)(resolve_left(oriented))
}

/// The canonical resolver: slide every row towards index 0.
pub(crate) fn resolve_left(mut board: Board) -> Board {
    for row in board.rows_mut() {
        resolve_row(row);
    }
    board.map_tiles(|_, tile| tile.unlocked())
}

/// Run `len - 1` left-to-right sweeps over one row.
///
/// Each sweep moves a tile at most one cell, which is enough for the worst
/// case of a tile at the far end travelling to index 0.
fn resolve_row(row: &mut [Tile]) {
    let rounds = row.len().saturating_sub(1);
    for _ in 0..rounds {
        for i in 1..row.len() {
            let current = row[i];
            let left = row[i - 1];
            if !left.is_empty() && left.value() == current.value() && !left.locked && !current.locked {
                row[i - 1] = merge_tiles(current, left);
                row[i] = Tile::EMPTY;
            } else if !current.is_empty() && left.is_empty() {
                row[i - 1] = current;
                row[i] = Tile::EMPTY;
            }
        }
    }
}

/// True if resolving `direction` would change any tile value.
///
/// Scores and keys are ignored; only the value layout counts as movement.
pub fn can_move(direction: Move, board: &Board) -> bool {
    resolve(direction, board).flat_values() != board.flat_values()
}

/// True if no direction can move any tile.
///
/// ```
/// use merge2048::engine::{is_game_over, Board};
/// let stuck = Board::from_values(vec![vec![2, 4], vec![4, 2]]).unwrap();
/// assert!(is_game_over(&stuck));
/// ```
pub fn is_game_over(board: &Board) -> bool {
    !Move::ALL.iter().any(|&dir| can_move(dir, board))
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ops;
use super::spawn::{self, TileSource};
use super::tile::{Tile, TileKey};
use crate::error::GameError;

type Value = u64;
type Score = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions, in wire order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Wire code: `Up=0, Down=1, Left=2, Right=3`.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Move::Up => 0,
            Move::Down => 1,
            Move::Left => 2,
            Move::Right => 3,
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Move::Up),
            1 => Ok(Move::Down),
            2 => Ok(Move::Left),
            3 => Ok(Move::Right),
            other => Err(GameError::InvalidDirectionCode(other)),
        }
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Move::Up),
            "down" | "d" => Ok(Move::Down),
            "left" | "l" => Ok(Move::Left),
            "right" | "r" => Ok(Move::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

/// A cell address: `x` is the column (0 = leftmost), `y` the row (0 = top).
///
/// `Left`/`Right` move along `x`, `Up`/`Down` move along `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// An N×N grid of tiles stored row-major.
///
/// Every transform returns a new `Board`; nothing mutates a board that a
/// caller can still observe.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Smallest supported board side.
    pub const MIN_SIZE: usize = 2;

    /// Largest accepted sum of all tile values.
    ///
    /// Merges never change the sum, and a tile's cumulative score is at most
    /// `value * log2(value)`, so neither values nor scores can overflow `u64`.
    pub const MAX_TOTAL_VALUE: u64 = 1 << 57;

    /// An all-empty `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`.
    pub fn empty(size: usize) -> Self {
        assert!(size >= Self::MIN_SIZE, "board size must be at least {}, got {size}", Self::MIN_SIZE);
        Board { size, cells: vec![Tile::EMPTY; size * size] }
    }

    /// Build a board from a square matrix of tile values (`0` = empty).
    ///
    /// Tiles get score 0 and a key equal to their 1-based row-major cell number.
    ///
    /// ```
    /// use merge2048::engine::{Board, Move};
    /// let b = Board::from_values(vec![vec![2, 2], vec![0, 4]]).unwrap();
    /// assert_eq!(b.shift(Move::Left).values(), vec![vec![4, 0], vec![4, 0]]);
    /// ```
    pub fn from_values(rows: Vec<Vec<Value>>) -> Result<Self, GameError> {
        let size = rows.len();
        if size < Self::MIN_SIZE {
            return Err(GameError::InvalidSize(size));
        }
        let mut cells = Vec::with_capacity(size * size);
        let mut total: Value = 0;
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GameError::NotSquare { row: y, len: row.len(), size });
            }
            for value in row {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(GameError::InvalidTileValue(value));
                }
                total = total
                    .checked_add(value)
                    .filter(|&t| t <= Self::MAX_TOTAL_VALUE)
                    .ok_or(GameError::TotalValueTooLarge { max: Self::MAX_TOTAL_VALUE })?;
                let key = TileKey(cells.len() as u64 + 1);
                cells.push(Tile::new(value, key));
            }
        }
        Ok(Board { size, cells })
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize { self.size }

    /// Tile at `pos`, or `None` when `pos` lies outside the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        if pos.x < self.size && pos.y < self.size {
            self.cells.get(pos.y * self.size + pos.x)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, tile: Tile) {
        let idx = pos.y * self.size + pos.x;
        self.cells[idx] = tile;
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks(self.size)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Tile]> + '_ {
        self.cells.chunks_mut(self.size)
    }

    /// Every tile with its position, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, tile)| (Position { x: idx % size, y: idx / size }, tile))
    }

    /// A new board with `f` applied to every tile.
    pub(crate) fn map_tiles<F>(&self, mut f: F) -> Board
    where
        F: FnMut(Position, &Tile) -> Tile,
    {
        let cells = self.tiles().map(|(pos, tile)| f(pos, tile)).collect();
        Board { size: self.size, cells }
    }

    /// Positions of the empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.tiles().filter(|(_, t)| t.is_empty()).map(|(pos, _)| pos).collect()
    }

    #[inline]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|t| t.is_empty()).count()
    }

    /// Tile values as a matrix of rows.
    pub fn values(&self) -> Vec<Vec<Value>> {
        self.rows().map(|row| row.iter().map(Tile::value).collect()).collect()
    }

    /// Tile values flattened row-major.
    pub fn flat_values(&self) -> Vec<Value> {
        self.cells.iter().map(Tile::value).collect()
    }

    /// Sum of every tile's cumulative score.
    pub fn score(&self) -> Score {
        self.cells.iter().map(Tile::score).sum()
    }

    /// Highest tile value on the board (0 on an empty board).
    pub fn highest_tile(&self) -> Value {
        self.cells.iter().map(Tile::value).max().unwrap_or(0)
    }

    /// Return the board resulting from sliding/merging tiles in `dir` (no spawn).
    #[inline]
    pub fn shift(&self, dir: Move) -> Board { ops::resolve(dir, self) }

    /// Insert a 2 (90%) or 4 (10%) into a uniformly chosen empty cell.
    #[inline]
    pub fn with_spawned_tile<S: TileSource + ?Sized>(&self, source: &mut S) -> Board {
        spawn::spawn(self, source)
    }

    /// True if sliding in `dir` would change any tile value.
    #[inline]
    pub fn can_move(&self, dir: Move) -> bool { ops::can_move(dir, self) }

    /// True if no direction changes the board.
    #[inline]
    pub fn is_game_over(&self) -> bool { ops::is_game_over(self) }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{}, {:?})", self.size, self.size, self.values())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(self.size * 8);
        writeln!(f)?;
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f, "{separator}")?;
            }
            let cells: Vec<String> = row.iter().map(|t| format_val(t.value())).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

fn format_val(val: Value) -> String {
    match val {
        0 => " ".repeat(7),
        x => format!("{:^7}", x),
    }
}

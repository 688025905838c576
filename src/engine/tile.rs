use serde::{Deserialize, Serialize};

type Value = u64;
type Score = u64;

/// Opaque identity of a tile, stable while the tile slides across the board.
///
/// Renderers use it to animate a tile between two board snapshots; the rules
/// never look at it. Empty cells all share [`TileKey::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileKey(pub u64);

impl TileKey {
    /// Key carried by every empty cell.
    pub const NONE: TileKey = TileKey(0);
}

/// One cell of the board.
///
/// `value == 0` means empty. `score` is the cumulative score this tile has
/// produced through merges. The merge lock is only ever set while a move is
/// being resolved and is cleared before the board is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Tile {
    value: Value,
    score: Score,
    key: TileKey,
    #[serde(skip)]
    pub(crate) locked: bool,
}

impl Tile {
    /// The canonical empty cell.
    pub const EMPTY: Tile = Tile { value: 0, score: 0, key: TileKey::NONE, locked: false };

    /// A freshly spawned (or freshly placed) tile with no score history.
    #[inline]
    pub(crate) fn new(value: Value, key: TileKey) -> Self {
        debug_assert!(value == 0 || (value >= 2 && value.is_power_of_two()), "bad tile value {value}");
        if value == 0 {
            return Tile::EMPTY;
        }
        Tile { value, score: 0, key, locked: false }
    }

    #[inline]
    pub fn value(&self) -> Value { self.value }

    #[inline]
    pub fn score(&self) -> Score { self.score }

    #[inline]
    pub fn key(&self) -> TileKey { self.key }

    #[inline]
    pub fn is_empty(&self) -> bool { self.value == 0 }

    #[inline]
    pub(crate) fn unlocked(self) -> Self { Tile { locked: false, ..self } }
}

/// Merge `mover` into `target`, producing the locked result tile.
///
/// The result keeps the mover's key. Callers must ensure both tiles hold the
/// same non-zero value and that neither is locked.
///
/// ```
/// use merge2048::engine::{merge_tiles, Board, Position, TileKey};
/// let b = Board::from_values(vec![vec![2, 2], vec![0, 0]]).unwrap();
/// let (target, mover) = (b.get(Position { x: 0, y: 0 }).unwrap(), b.get(Position { x: 1, y: 0 }).unwrap());
/// let merged = merge_tiles(*mover, *target);
/// assert_eq!(merged.value(), 4);
/// assert_eq!(merged.score(), 4);
/// assert_eq!(merged.key(), TileKey(2));
/// ```
pub fn merge_tiles(mover: Tile, target: Tile) -> Tile {
    debug_assert_eq!(mover.value, target.value);
    debug_assert!(mover.value > 0);
    debug_assert!(!mover.locked && !target.locked);
    let value = mover.value + target.value;
    Tile {
        value,
        score: value + mover.score + target.score,
        key: mover.key,
        locked: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_builds_canonical_empty() {
        assert_eq!(Tile::new(0, TileKey(42)), Tile::EMPTY);
        assert!(Tile::EMPTY.is_empty());
        assert_eq!(Tile::EMPTY.key(), TileKey::NONE);
    }

    #[test]
    #[should_panic(expected = "bad tile value")]
    #[cfg(debug_assertions)]
    fn new_rejects_values_that_cannot_merge() {
        let _ = Tile::new(3, TileKey(1));
    }

    #[test]
    fn merge_carries_scores_forward() {
        let a = merge_tiles(Tile::new(2, TileKey(1)), Tile::new(2, TileKey(2))).unlocked();
        let b = merge_tiles(Tile::new(2, TileKey(3)), Tile::new(2, TileKey(4))).unlocked();
        let c = merge_tiles(a, b);
        assert_eq!(c.value(), 8);
        // 4 + 4 from the first merges, plus 8 from this one
        assert_eq!(c.score(), 16);
        assert_eq!(c.key(), TileKey(1));
        assert!(c.locked);
    }

    #[test]
    fn serialized_tile_hides_lock() {
        let merged = merge_tiles(Tile::new(4, TileKey(5)), Tile::new(4, TileKey(6)));
        let json = serde_json::to_value(merged).unwrap();
        assert!(json.get("locked").is_none());
        assert_eq!(json["value"], 8);
        assert_eq!(json["key"], 5);
    }
}

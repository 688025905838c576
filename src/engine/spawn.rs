use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::Board;
use super::tile::{Tile, TileKey};

/// Source of every random draw the rules make.
///
/// Spawning needs three things: which empty cell, which value, and a fresh
/// identity for the new tile. Tests swap in scripted sources to pin down
/// exact outcomes.
pub trait TileSource {
    /// Pick an index in `0..empty_cells`; `empty_cells` is never zero.
    fn choose_cell(&mut self, empty_cells: usize) -> usize;

    /// Value of the next spawned tile: 2 (90%) or 4 (10%).
    fn tile_value(&mut self) -> u64;

    /// A key not equal to [`TileKey::NONE`].
    fn next_key(&mut self) -> TileKey;
}

/// [`TileSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Deterministic source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self { Self { rng: StdRng::seed_from_u64(seed) } }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self { Self { rng: StdRng::from_entropy() } }
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self { Self { rng } }

    pub fn into_inner(self) -> R { self.rng }
}

impl<R: Rng> TileSource for RandomSource<R> {
    #[inline]
    fn choose_cell(&mut self, empty_cells: usize) -> usize { self.rng.gen_range(0..empty_cells) }

    #[inline]
    fn tile_value(&mut self) -> u64 { generate_random_tile(&mut self.rng) }

    #[inline]
    fn next_key(&mut self) -> TileKey { TileKey(self.rng.gen_range(1..=u64::MAX)) }
}

fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> u64 { if rng.gen_range(0..10) < 9 { 2 } else { 4 } }

/// Place one new tile into a uniformly chosen empty cell.
///
/// A full board comes back unchanged; that is a normal outcome, not an error.
///
/// ```
/// use merge2048::engine::{spawn, Board, RandomSource};
/// let mut source = RandomSource::seeded(123);
/// let b = spawn(&Board::empty(4), &mut source);
/// assert_eq!(b.count_empty(), 15);
/// ```
pub fn spawn<S: TileSource + ?Sized>(board: &Board, source: &mut S) -> Board {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return board.clone();
    }
    let pos = empty[source.choose_cell(empty.len())];
    let value = source.tile_value();
    let key = source.next_key();
    let mut next = board.clone();
    next.set(pos, Tile::new(value, key));
    log::trace!("spawned {} at ({}, {})", value, pos.x, pos.y);
    next
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::state::Position;
    use std::collections::VecDeque;

    /// Replays fixed draws; keys count up from 100.
    pub(crate) struct Scripted {
        cells: VecDeque<usize>,
        values: VecDeque<u64>,
        next_key: u64,
    }

    impl Scripted {
        pub(crate) fn new(cells: &[usize], values: &[u64]) -> Self {
            Scripted { cells: cells.iter().copied().collect(), values: values.iter().copied().collect(), next_key: 100 }
        }
    }

    impl TileSource for Scripted {
        fn choose_cell(&mut self, empty_cells: usize) -> usize {
            let idx = self.cells.pop_front().unwrap_or(0);
            assert!(idx < empty_cells, "scripted cell {idx} out of {empty_cells}");
            idx
        }

        fn tile_value(&mut self) -> u64 { self.values.pop_front().unwrap_or(2) }

        fn next_key(&mut self) -> TileKey {
            self.next_key += 1;
            TileKey(self.next_key)
        }
    }

    #[test]
    fn scripted_spawn_lands_exactly() {
        let b = Board::from_values(vec![vec![2, 0], vec![0, 4]]).unwrap();
        let mut source = Scripted::new(&[1], &[4]);
        let next = spawn(&b, &mut source);
        // empty cells row-major: (1,0), (0,1)
        assert_eq!(next.values(), vec![vec![2, 0], vec![4, 4]]);
        let spawned = next.get(Position { x: 0, y: 1 }).unwrap();
        assert_eq!(spawned.key(), TileKey(101));
        assert_eq!(spawned.score(), 0);
    }

    #[test]
    fn spawn_only_touches_one_empty_cell() {
        let mut source = RandomSource::seeded(5);
        let mut b = Board::empty(4);
        for _ in 0..16 {
            let next = spawn(&b, &mut source);
            let changed: Vec<_> = b
                .tiles()
                .zip(next.tiles())
                .filter(|((_, before), (_, after))| before != after)
                .collect();
            assert_eq!(changed.len(), 1);
            let ((_, before), (_, after)) = changed[0];
            assert!(before.is_empty());
            assert!(after.value() == 2 || after.value() == 4);
            assert_ne!(after.key(), TileKey::NONE);
            b = next;
        }
        assert_eq!(b.count_empty(), 0);
        assert_eq!(spawn(&b, &mut source), b);
    }

    #[test]
    fn spawn_values_are_mostly_twos() {
        let mut source = RandomSource::seeded(42);
        let draws = 10_000;
        let fours = (0..draws).filter(|_| source.tile_value() == 4).count();
        assert!((700..1300).contains(&fours), "{fours} fours in {draws}");
    }

    #[test]
    fn seeded_sources_repeat() {
        let a = spawn(&Board::empty(4), &mut RandomSource::seeded(9));
        let b = spawn(&Board::empty(4), &mut RandomSource::seeded(9));
        assert_eq!(a, b);
    }
}

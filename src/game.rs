//! Game state controller: one immutable snapshot per turn.
//!
//! `apply_move` never mutates the state it is called on. A shell keeps the
//! latest `GameState`, swaps in whatever `apply_move` returns, and can keep
//! older snapshots around for as long as it likes.

use serde::{Deserialize, Serialize};

use crate::engine::{Board, Move, TileKey, TileSource};

type Score = u64;

/// Two-state lifecycle: `Playing` until no direction can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Snapshot of a game after some number of moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    score: Score,
    score_earned: Score,
    moves: u64,
    game_over: bool,
}

impl GameState {
    /// Empty `size`×`size` board with two spawned tiles.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`.
    ///
    /// ```
    /// use merge2048::engine::RandomSource;
    /// use merge2048::game::GameState;
    /// let mut source = RandomSource::seeded(42);
    /// let game = GameState::new_game(4, &mut source);
    /// assert_eq!(game.board().count_empty(), 14);
    /// assert_eq!((game.score(), game.moves(), game.is_game_over()), (0, 0, false));
    /// ```
    pub fn new_game<S: TileSource + ?Sized>(size: usize, source: &mut S) -> Self {
        let board = Board::empty(size).with_spawned_tile(source).with_spawned_tile(source);
        Self::from_board(board)
    }

    /// Start from an arbitrary board, e.g. one built with [`Board::from_values`].
    pub fn from_board(board: Board) -> Self {
        let game_over = board.is_game_over();
        let score = board.score();
        GameState { board, score, score_earned: 0, moves: 0, game_over }
    }

    /// Slide in `direction`, spawn a tile and rescore.
    ///
    /// A move that changes nothing returns an identical copy of `self`
    /// (moves and score untouched, no spawn). Once the game is over every
    /// direction is such a no-op.
    ///
    /// ```
    /// use merge2048::engine::{Board, Move, RandomSource};
    /// use merge2048::game::GameState;
    /// let mut source = RandomSource::seeded(1);
    /// let game = GameState::from_board(Board::from_values(vec![vec![2, 2], vec![0, 0]]).unwrap());
    /// let next = game.apply_move(Move::Left, &mut source);
    /// assert_eq!(next.score(), 4);
    /// assert_eq!(next.moves(), 1);
    /// assert_eq!(game.moves(), 0);
    /// ```
    pub fn apply_move<S: TileSource + ?Sized>(&self, direction: Move, source: &mut S) -> Self {
        if !self.board.can_move(direction) {
            log::trace!("move {} is a no-op", direction);
            return self.clone();
        }
        let board = self.board.shift(direction).with_spawned_tile(source);
        let score = board.score();
        let score_earned = score - self.score;
        let moves = self.moves + 1;
        let game_over = board.is_game_over();
        log::debug!("move {}: +{} (score {}, moves {})", direction, score_earned, score, moves);
        if game_over {
            log::info!("game over after {} moves with score {} (highest tile {})", moves, score, board.highest_tile());
        }
        GameState { board, score, score_earned, moves, game_over }
    }

    #[inline]
    pub fn board(&self) -> &Board { &self.board }

    #[inline]
    pub fn score(&self) -> Score { self.score }

    /// Score gained by the last successful move.
    #[inline]
    pub fn score_earned(&self) -> Score { self.score_earned }

    #[inline]
    pub fn moves(&self) -> u64 { self.moves }

    #[inline]
    pub fn is_game_over(&self) -> bool { self.game_over }

    #[inline]
    pub fn status(&self) -> GameStatus {
        if self.game_over { GameStatus::GameOver } else { GameStatus::Playing }
    }

    /// Directions that would change the board, in [`Move::ALL`] order.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL.into_iter().filter(|&dir| self.board.can_move(dir)).collect()
    }

    #[inline]
    pub fn highest_tile(&self) -> u64 { self.board.highest_tile() }

    /// Read-only snapshot for renderers.
    pub fn view(&self) -> GameView {
        let rows = self
            .board
            .rows()
            .map(|row| row.iter().map(|t| CellView { value: t.value(), key: t.key() }).collect())
            .collect();
        GameView {
            rows,
            score: self.score,
            score_earned: self.score_earned,
            moves: self.moves,
            game_over: self.game_over,
        }
    }
}

/// What a renderer needs for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub value: u64,
    pub key: TileKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub rows: Vec<Vec<CellView>>,
    pub score: Score,
    pub score_earned: Score,
    pub moves: u64,
    pub game_over: bool,
}

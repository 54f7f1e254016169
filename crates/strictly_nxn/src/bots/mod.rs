//! Computer players.
//!
//! A [`BotStrategy`] turns a [`GameState`] into a target cell. The set of
//! strategies is closed, ordered by strength:
//!
//! | level | strategy                         |
//! |-------|----------------------------------|
//! | 0     | [`BotStrategy::Random`]          |
//! | 1     | [`BotStrategy::GreedyWin`]       |
//! | 2     | [`BotStrategy::GreedyWinOrBlock`]|
//! | 3     | [`BotStrategy::Minimax`]         |
//!
//! A [`Bot`] binds a strategy to a seat and a random source.

mod bot;
mod minimax;

pub use bot::Bot;
pub use minimax::{Choice, MinimaxSearch};

use crate::rules::check_for_winner;
use crate::{Board, Coordinates, GameState, MoveError, MoveRequest, PlayerMark};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{debug, instrument};

/// Highest supported bot level.
pub const MAX_BOT_LEVEL: u8 = 3;

/// Decision algorithm used by a computer player.
#[derive(Debug, Clone)]
pub enum BotStrategy {
    /// Any empty cell, uniformly at random.
    Random,
    /// Wins in one move when possible, otherwise random.
    GreedyWin,
    /// Wins in one move when possible, else blocks the next player's
    /// winning move, otherwise random.
    ///
    /// Only the next player in turn order is considered for blocking, which
    /// is exact for two players only.
    GreedyWinOrBlock,
    /// Exhaustive minimax search with a memo that persists between turns.
    Minimax(MinimaxSearch),
}

impl BotStrategy {
    /// Returns the strategy for a difficulty level.
    ///
    /// Unknown levels fall back to [`BotStrategy::Random`].
    #[instrument]
    pub fn at_level(level: u8) -> Self {
        match level {
            1 => BotStrategy::GreedyWin,
            2 => BotStrategy::GreedyWinOrBlock,
            3 => BotStrategy::Minimax(MinimaxSearch::new()),
            _ => BotStrategy::Random,
        }
    }

    /// Difficulty level of this strategy.
    pub fn level(&self) -> u8 {
        match self {
            BotStrategy::Random => 0,
            BotStrategy::GreedyWin => 1,
            BotStrategy::GreedyWinOrBlock => 2,
            BotStrategy::Minimax(_) => 3,
        }
    }

    /// Picks the cell `acting_mark` should claim next.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoAvailableMoves`] if the board is full. Greedy
    /// lookups that find nothing fall through to the next heuristic and never
    /// surface [`MoveError::NoWinningMove`].
    #[instrument(skip(self, state, rng), fields(level = self.level(), moves = state.board().move_count()))]
    pub fn coordinates<R: Rng + ?Sized>(
        &mut self,
        state: &GameState,
        acting_mark: PlayerMark,
        rng: &mut R,
    ) -> Result<Coordinates, MoveError> {
        let board = state.board();
        match self {
            BotStrategy::Random => random_coordinates(board, rng),
            BotStrategy::GreedyWin => winning_coordinates(board, acting_mark)
                .or_else(|_| random_coordinates(board, rng)),
            BotStrategy::GreedyWinOrBlock => winning_coordinates(board, acting_mark)
                .or_else(|_| blocking_coordinates(board, acting_mark.next()))
                .or_else(|_| random_coordinates(board, rng)),
            BotStrategy::Minimax(search) => {
                search.best_move(board, acting_mark, state.current_mark())
            }
        }
    }
}

/// Returns a uniformly random empty cell.
///
/// # Errors
///
/// Returns [`MoveError::NoAvailableMoves`] if the board is full.
pub fn random_coordinates<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Coordinates, MoveError> {
    board
        .remaining_coordinates()
        .choose(rng)
        .copied()
        .ok_or(MoveError::NoAvailableMoves)
}

/// Returns the first empty cell that wins the game for `mark`.
///
/// # Errors
///
/// Returns [`MoveError::NoWinningMove`] if no single move wins.
pub fn winning_coordinates(board: &Board, mark: PlayerMark) -> Result<Coordinates, MoveError> {
    let found = board.remaining_coordinates().into_iter().find(|&coordinates| {
        let next = board.make_move(MoveRequest::new(coordinates, mark));
        check_for_winner(&next) == mark
    });
    debug!(%mark, ?found, "Searched for winning move");
    found.ok_or(MoveError::NoWinningMove)
}

/// Returns the cell that denies `opponent` an immediate win.
///
/// # Errors
///
/// Returns [`MoveError::NoWinningMove`] if `opponent` has no winning move.
pub fn blocking_coordinates(
    board: &Board,
    opponent: PlayerMark,
) -> Result<Coordinates, MoveError> {
    winning_coordinates(board, opponent)
}

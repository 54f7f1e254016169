//! Game state and turn sequencing.

use crate::rules::check_for_winner;
use crate::{Action, Board, Coordinates, GameError, MoveError, MoveRequest, PlayerMark, UndoError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// A value type: [`GameState::apply`] returns the next state and leaves the
/// current one as it was. History is whatever the board's move list holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_mark: PlayerMark,
    winner: PlayerMark,
}

impl GameState {
    /// Creates a new game: empty board, player one to move, no winner.
    #[instrument]
    pub fn new(bounds: i32) -> Self {
        Self {
            board: Board::new(bounds),
            current_mark: PlayerMark::One,
            winner: PlayerMark::None,
        }
    }

    /// Builds a state around an existing board, recomputing the winner.
    pub fn from_board(board: Board, current_mark: PlayerMark) -> Self {
        let winner = check_for_winner(&board);
        Self {
            board,
            current_mark,
            winner,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_mark(&self) -> PlayerMark {
        self.current_mark
    }

    /// Returns the winner, or [`PlayerMark::None`] while undecided.
    pub fn winner(&self) -> PlayerMark {
        self.winner
    }

    /// Returns true when every cell has been played.
    pub fn is_tied(&self) -> bool {
        self.board.move_count() == self.board.total_cells()
    }

    /// Returns true once the game has a winner or no cells remain.
    ///
    /// Callers must stop submitting moves once this holds; the state itself
    /// does not refuse them.
    pub fn is_over(&self) -> bool {
        self.winner != PlayerMark::None || self.is_tied()
    }

    /// Applies an action, returning the next state.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] or [`UndoError`] that rejected the action.
    /// `self` is unchanged either way.
    #[instrument(skip(self), fields(current = %self.current_mark))]
    pub fn apply(&self, action: Action) -> Result<GameState, GameError> {
        match action {
            Action::Move { coordinates } => Ok(self.play(coordinates)?),
            Action::Undo { count } => Ok(self.undo(count)?),
        }
    }

    /// Places the current player's mark.
    ///
    /// # Errors
    ///
    /// See [`Board::validate`].
    pub fn play(&self, coordinates: Coordinates) -> Result<GameState, MoveError> {
        let request = self
            .board
            .validate(MoveRequest::new(coordinates, self.current_mark))?;
        let board = self.board.make_move(request);
        let winner = check_for_winner(&board);
        debug!(%request, %winner, "Move applied");
        if winner != PlayerMark::None {
            info!(%winner, moves = board.move_count(), "Game won");
        }

        Ok(Self {
            board,
            current_mark: self.current_mark.next(),
            winner,
        })
    }

    /// Takes back the last `count` moves and rewinds the turn order to match.
    ///
    /// # Errors
    ///
    /// See [`Board::undo_move`].
    pub fn undo(&self, count: usize) -> Result<GameState, UndoError> {
        let board = self.board.undo_move(count)?;
        let current_mark = self.current_mark.back_up(count);
        debug!(count, %current_mark, "Moves undone");

        Ok(Self {
            winner: check_for_winner(&board),
            board,
            current_mark,
        })
    }
}

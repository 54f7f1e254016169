//! Draw detection logic.

use super::win::check_for_winner;
use crate::{Board, PlayerMark};
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument(level = "trace", skip_all)]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is full with no winner.
#[instrument(level = "trace", skip_all)]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_for_winner(board) == PlayerMark::None
}

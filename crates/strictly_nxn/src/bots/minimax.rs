//! Exhaustive minimax search with transposition memo.

use crate::rules::check_for_winner;
use crate::{Board, Coordinates, MoveError, MoveRequest, PlayerMark};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// A scored candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice {
    /// Cell to claim.
    pub option: Coordinates,
    /// Utility for the searching player; positive is a forced win.
    pub value: i32,
    /// Ply count of the board the value was settled on.
    pub depth: usize,
}

/// Memo key: board contents, not move order, plus whose search and whose turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    cells: Vec<u8>,
    root: PlayerMark,
    to_move: PlayerMark,
}

/// Minimax searcher.
///
/// Terminal boards score `total_cells + 1 - depth` for a win by the
/// searching player, the negation for a win by anyone else and 0 for a draw,
/// so faster wins and slower losses are preferred. `depth` is the number of
/// moves on the board, which keeps memo entries valid as the real game
/// advances. Ties keep the first candidate in
/// [`Board::remaining_coordinates`] order.
///
/// The memo is never invalidated; one searcher serves a whole game (or many).
/// It is not synchronized and must not be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct MinimaxSearch {
    memo: HashMap<MemoKey, Choice>,
}

impl MinimaxSearch {
    /// Creates a searcher with an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized positions.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Returns the best cell for `root` when `to_move` is next to play.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoAvailableMoves`] if the board is full.
    #[instrument(skip(self, board), fields(moves = board.move_count(), memo = self.memo.len()))]
    pub fn best_move(
        &mut self,
        board: &Board,
        root: PlayerMark,
        to_move: PlayerMark,
    ) -> Result<Coordinates, MoveError> {
        self.best_choice(board, root, to_move)
            .map(|choice| choice.option)
    }

    /// Like [`MinimaxSearch::best_move`] but returns the scored choice.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoAvailableMoves`] if the board is full.
    pub fn best_choice(
        &mut self,
        board: &Board,
        root: PlayerMark,
        to_move: PlayerMark,
    ) -> Result<Choice, MoveError> {
        if board.remaining_coordinates().is_empty() {
            return Err(MoveError::NoAvailableMoves);
        }
        let choice = self.search(board, root, to_move);
        debug!(
            option = %choice.option,
            value = choice.value,
            depth = choice.depth,
            memo = self.memo.len(),
            "Minimax settled"
        );
        Ok(choice)
    }

    /// Scores a board with at least one empty cell.
    fn search(&mut self, board: &Board, root: PlayerMark, to_move: PlayerMark) -> Choice {
        let key = MemoKey {
            cells: board.encode(),
            root,
            to_move,
        };
        if let Some(choice) = self.memo.get(&key) {
            return *choice;
        }

        let maximizing = to_move == root;
        let mut best: Option<Choice> = None;

        for coordinates in board.remaining_coordinates() {
            let child = board.make_move(MoveRequest::new(coordinates, to_move));
            let scored = match terminal_value(&child, root) {
                Some(value) => Choice {
                    option: coordinates,
                    value,
                    depth: child.move_count(),
                },
                None => Choice {
                    option: coordinates,
                    ..self.search(&child, root, to_move.next())
                },
            };

            best = match best {
                Some(current)
                    if (maximizing && scored.value <= current.value)
                        || (!maximizing && scored.value >= current.value) =>
                {
                    Some(current)
                }
                _ => Some(scored),
            };
        }

        // Callers only search boards with empty cells.
        let choice = best.unwrap_or(Choice {
            option: Coordinates::new(0, 0),
            value: 0,
            depth: board.move_count(),
        });
        self.memo.insert(key, choice);
        choice
    }
}

/// Utility of a finished board, or `None` while play continues.
fn terminal_value(board: &Board, root: PlayerMark) -> Option<i32> {
    let magnitude = (board.total_cells() + 1 - board.move_count()) as i32;
    let winner = check_for_winner(board);

    if winner == root {
        Some(magnitude)
    } else if winner != PlayerMark::None {
        Some(-magnitude)
    } else if board.is_full() {
        Some(0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &[(i32, i32, PlayerMark)], bounds: i32) -> Board {
        Board::with_moves(
            cells
                .iter()
                .map(|&(x, y, mark)| MoveRequest::new(Coordinates::new(x, y), mark))
                .collect(),
            bounds,
        )
    }

    #[test]
    fn test_terminal_values() {
        use PlayerMark::{One, Two};
        let won = board_from(&[(0, 0, One), (1, 1, Two), (1, 0, One), (2, 2, Two), (2, 0, One)], 3);
        assert_eq!(terminal_value(&won, One), Some(5));
        assert_eq!(terminal_value(&won, Two), Some(-5));
        assert_eq!(terminal_value(&Board::new(3), One), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        use PlayerMark::{One, Two};
        let board = board_from(&[(0, 0, One), (2, 0, Two), (0, 1, One), (2, 1, Two)], 3);
        let mut search = MinimaxSearch::new();
        let choice = search.best_choice(&board, One, One).unwrap();
        assert_eq!(choice.option, Coordinates::new(0, 2));
        assert_eq!(choice.value, 5);
    }

    #[test]
    fn test_blocks_when_it_cannot_win() {
        use PlayerMark::{One, Two};
        let board = board_from(&[(0, 0, One), (2, 0, Two), (0, 1, One), (2, 1, Two)], 3);
        let mut search = MinimaxSearch::new();
        // Two to move would win at (2, 2) itself, so it takes that instead.
        assert_eq!(search.best_move(&board, Two, Two), Ok(Coordinates::new(2, 2)));

        let board = board_from(&[(0, 0, One), (2, 0, Two), (0, 1, One)], 3);
        let mut search = MinimaxSearch::new();
        assert_eq!(search.best_move(&board, Two, Two), Ok(Coordinates::new(0, 2)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from(&[(0, 0, PlayerMark::One)], 1);
        let mut search = MinimaxSearch::new();
        assert_eq!(
            search.best_move(&board, PlayerMark::Two, PlayerMark::Two),
            Err(MoveError::NoAvailableMoves)
        );
    }

    #[test]
    fn test_memo_is_reused_between_calls() {
        let mut search = MinimaxSearch::new();
        let board = Board::new(3);
        let first = search.best_choice(&board, PlayerMark::One, PlayerMark::One).unwrap();
        let size = search.memo_len();
        assert!(size > 0);

        let second = search.best_choice(&board, PlayerMark::One, PlayerMark::One).unwrap();
        assert_eq!(first, second);
        assert_eq!(search.memo_len(), size);
        // Perfect play from an empty board is a draw.
        assert_eq!(first.value, 0);
    }
}

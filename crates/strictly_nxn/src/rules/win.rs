//! Win detection logic.

use crate::{Board, Coordinates, PlayerMark};
use tracing::instrument;

/// Checks the board for a winning mark.
///
/// A mark wins once its cells cover a whole row, a whole column, the main
/// diagonal (`x == y`) or the anti-diagonal (`x + y == bounds - 1`). Marks
/// are tried in turn order and the first to qualify is returned, so a board
/// that could never arise from alternating play is not rejected.
///
/// Returns [`PlayerMark::None`] when nobody has won.
#[instrument(level = "trace", skip_all, fields(bounds = board.bounds()))]
pub fn check_for_winner(board: &Board) -> PlayerMark {
    let bounds = board.bounds();

    PlayerMark::placeable()
        .find(|&mark| {
            let owned: Vec<Coordinates> = board
                .moves()
                .iter()
                .filter(|request| request.mark == mark)
                .map(|request| request.coordinates)
                .collect();
            covers_line(&owned, bounds)
        })
        .unwrap_or(PlayerMark::None)
}

/// Counts owned cells per line; a line is covered when its count reaches
/// `bounds`. Relies on the board holding no duplicate or off-board cells.
fn covers_line(owned: &[Coordinates], bounds: i32) -> bool {
    let needed = bounds.max(0) as usize;
    if owned.is_empty() || owned.len() < needed {
        return false;
    }

    let row = (0..bounds).any(|y| count_on(owned, |c| c.y == y) == needed);
    let column = (0..bounds).any(|x| count_on(owned, |c| c.x == x) == needed);
    let diagonal = count_on(owned, |c| c.x == c.y) == needed;
    let anti_diagonal = count_on(owned, |c| c.x + c.y == bounds - 1) == needed;

    row || column || diagonal || anti_diagonal
}

fn count_on(owned: &[Coordinates], on_line: impl Fn(&Coordinates) -> bool) -> usize {
    owned.iter().filter(|coordinates| on_line(coordinates)).count()
}

//! Immutable N×N board.

use crate::{Coordinates, MoveError, MoveRequest, PlayerMark, UndoError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Snapshot of a game in progress.
///
/// Holds the moves played so far, in play order, and the side length of the
/// square grid. Every operation that changes the board returns a new value;
/// a `Board` a caller already holds never changes underneath it.
///
/// Invariants (upheld by [`Board::validate`] before [`Board::make_move`]):
/// - no two moves share the same coordinates
/// - every move lies within `[0, bounds)` on both axes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    moves: Vec<MoveRequest>,
    bounds: i32,
}

impl Board {
    /// Creates an empty board with the given side length.
    #[instrument]
    pub fn new(bounds: i32) -> Self {
        Self {
            moves: Vec::new(),
            bounds,
        }
    }

    /// Creates a board from an existing move list without checking it.
    ///
    /// Use [`Board::replay`] when the moves come from an untrusted source.
    pub fn with_moves(moves: Vec<MoveRequest>, bounds: i32) -> Self {
        Self { moves, bounds }
    }

    /// Rebuilds a board by validating and applying each move in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] raised by [`Board::validate`].
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[MoveRequest], bounds: i32) -> Result<Self, MoveError> {
        moves.iter().try_fold(Board::new(bounds), |board, request| {
            let request = board.validate(*request)?;
            Ok(board.make_move(request))
        })
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> &[MoveRequest] {
        &self.moves
    }

    /// Side length of the grid.
    pub fn bounds(&self) -> i32 {
        self.bounds
    }

    /// Number of moves played.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Number of cells on the grid.
    pub fn total_cells(&self) -> usize {
        let side = self.bounds.max(0) as usize;
        side * side
    }

    /// Returns true once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.move_count() >= self.total_cells()
    }

    /// Returns the mark at the given cell, or [`PlayerMark::None`] if empty.
    pub fn mark_at(&self, coordinates: Coordinates) -> PlayerMark {
        self.moves
            .iter()
            .find(|request| request.coordinates == coordinates)
            .map_or(PlayerMark::None, |request| request.mark)
    }

    /// All empty cells.
    ///
    /// Enumeration runs over x, then y: `(0, 0), (0, 1), … (1, 0), …`.
    /// Bots that take the first qualifying cell rely on this order.
    pub fn remaining_coordinates(&self) -> Vec<Coordinates> {
        let taken: HashSet<Coordinates> = self
            .moves
            .iter()
            .map(|request| request.coordinates)
            .collect();

        (0..self.bounds)
            .flat_map(|x| (0..self.bounds).map(move |y| Coordinates::new(x, y)))
            .filter(|coordinates| !taken.contains(coordinates))
            .collect()
    }

    /// Checks a move against this board.
    ///
    /// Bounds are checked before occupancy.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidCoordinates`] if either axis is off the board.
    /// - [`MoveError::CoordinateTaken`] if the cell already holds a mark.
    #[instrument(level = "debug", skip(self), fields(bounds = self.bounds))]
    pub fn validate(&self, request: MoveRequest) -> Result<MoveRequest, MoveError> {
        let coordinates = request.coordinates;
        if !self.in_bounds(coordinates.x) || !self.in_bounds(coordinates.y) {
            debug!(%coordinates, "Move rejected: off the board");
            return Err(MoveError::InvalidCoordinates { coordinates });
        }

        if self.mark_at(coordinates) != PlayerMark::None {
            debug!(%coordinates, "Move rejected: cell taken");
            return Err(MoveError::CoordinateTaken);
        }

        Ok(request)
    }

    /// Returns a new board with the move appended (unchecked).
    ///
    /// Callers validate first; search code skips validation for cells drawn
    /// from [`Board::remaining_coordinates`].
    pub fn make_move(&self, request: MoveRequest) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(request);
        Self {
            moves,
            bounds: self.bounds,
        }
    }

    /// Returns a new board with the last `times` moves removed.
    ///
    /// # Errors
    ///
    /// - [`UndoError::NoMovesToUndo`] if the board is empty.
    /// - [`UndoError::RequestTooLarge`] if fewer than `times` moves were played.
    #[instrument(level = "debug", skip(self), fields(played = self.moves.len()))]
    pub fn undo_move(&self, times: usize) -> Result<Self, UndoError> {
        if self.moves.is_empty() {
            return Err(UndoError::NoMovesToUndo);
        }
        if times > self.moves.len() {
            return Err(UndoError::RequestTooLarge {
                requested: times,
                available: self.moves.len(),
            });
        }

        Ok(Self {
            moves: self.moves[..self.moves.len() - times].to_vec(),
            bounds: self.bounds,
        })
    }

    /// Cell encoding indexed by `x * bounds + y`, one byte per cell (0 = empty).
    ///
    /// Two boards holding the same marks on the same cells encode identically
    /// regardless of the order the moves were played.
    pub(crate) fn encode(&self) -> Vec<u8> {
        let side = self.bounds.max(0) as usize;
        let mut cells = vec![0u8; side * side];
        for request in &self.moves {
            let index = request.coordinates.x as usize * side + request.coordinates.y as usize;
            if let Some(cell) = cells.get_mut(index) {
                *cell = request.mark.ordinal();
            }
        }
        cells
    }

    fn in_bounds(&self, axis: i32) -> bool {
        (0..self.bounds).contains(&axis)
    }
}

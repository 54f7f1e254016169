//! Core value types for N×N tic-tac-toe.

use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A pair of X, Y coordinates on the board.
///
/// Axes are signed so that off-board input can be represented and rejected
/// by [`Board::validate`](crate::Board::validate) instead of failing to parse.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
    new,
)]
#[display("({x}, {y})")]
pub struct Coordinates {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

/// Mark owned by a player.
///
/// `None` marks an empty cell and doubles as the "no winner" sentinel. It is
/// never placed on the board. Declaration order is turn order.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
    EnumIter,
)]
pub enum PlayerMark {
    /// Empty cell / no winner.
    #[default]
    #[display("nobody")]
    None,
    /// First player (moves first).
    #[display("player one")]
    One,
    /// Second player.
    #[display("player two")]
    Two,
}

impl PlayerMark {
    /// Marks that can be placed on the board, in turn order.
    pub fn placeable() -> impl Iterator<Item = PlayerMark> {
        Self::iter().filter(|mark| *mark != PlayerMark::None)
    }

    /// Number of players taking turns.
    pub fn player_count() -> usize {
        Self::placeable().count()
    }

    /// Returns the player whose turn follows this one.
    ///
    /// `None` is treated as sitting just before the first player.
    pub fn next(self) -> Self {
        let marks: Vec<PlayerMark> = Self::placeable().collect();
        match marks.iter().position(|mark| *mark == self) {
            Some(index) => marks[(index + 1) % marks.len()],
            None => PlayerMark::One,
        }
    }

    /// Returns the player whose turn preceded this one.
    pub fn previous(self) -> Self {
        let marks: Vec<PlayerMark> = Self::placeable().collect();
        let count = marks.len();
        match marks.iter().position(|mark| *mark == self) {
            Some(index) => marks[(index + count - 1) % count],
            None => marks[count - 1],
        }
    }

    /// Steps backwards through turn order `times` times.
    pub fn back_up(self, times: usize) -> Self {
        (0..times % Self::player_count()).fold(self, |mark, _| mark.previous())
    }

    /// Symbol drawn for this mark on a grid.
    pub fn symbol(self) -> char {
        match self {
            PlayerMark::None => ' ',
            PlayerMark::One => 'X',
            PlayerMark::Two => 'O',
        }
    }

    /// Compact cell encoding (0 = empty).
    pub(crate) fn ordinal(self) -> u8 {
        self as u8
    }
}

/// A player's claim on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("{mark} -> {coordinates}")]
pub struct MoveRequest {
    /// Cell being claimed.
    pub coordinates: Coordinates,
    /// Player claiming it.
    pub mark: PlayerMark,
}

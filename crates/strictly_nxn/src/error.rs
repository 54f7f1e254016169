//! Error types for the game engine.
//!
//! Every expected failure is a value. Board and bot operations return the
//! narrow error for their domain; the turn controller widens them into
//! [`GameError`] so a display layer can render any of them.

use crate::Coordinates;
use derive_more::{Display, Error, From};

/// Error that can occur when validating a move or asking a bot for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum MoveError {
    /// An axis lies outside `[0, bounds)`.
    #[display("Coordinates {coordinates} are off the board")]
    InvalidCoordinates {
        /// The rejected coordinates.
        coordinates: Coordinates,
    },

    /// The cell already holds a mark.
    #[display("Those coordinates are already taken")]
    CoordinateTaken,

    /// The board is full.
    #[display("No moves are available")]
    NoAvailableMoves,

    /// No single move wins for the requested mark.
    #[display("No winning move exists")]
    NoWinningMove,
}

/// Error that can occur when undoing moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum UndoError {
    /// The board is empty.
    #[display("There are no moves to undo")]
    NoMovesToUndo,

    /// More moves were requested than have been played.
    #[display("Cannot undo {requested} moves, only {available} played")]
    RequestTooLarge {
        /// Number of moves the caller asked to undo.
        requested: usize,
        /// Number of moves on the board.
        available: usize,
    },
}

/// Error produced while parsing raw player input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error)]
pub enum InputError {
    /// Nothing was entered.
    #[display("No input given")]
    MissingInput,

    /// The input does not name a known action.
    #[display("Unknown action: {input:?}")]
    InvalidAction {
        /// The raw input.
        input: String,
    },

    /// The coordinates could not be read.
    #[display("Could not read coordinates from {input:?}")]
    InvalidCoordinates {
        /// The raw input.
        input: String,
    },
}

/// A single option value together with whether it passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckedOption<T> {
    /// The value supplied.
    pub value: T,
    /// Whether the value is acceptable.
    pub valid: bool,
}

impl<T> CheckedOption<T> {
    pub(crate) fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }
}

/// Game options that cannot produce a playable game.
///
/// Each field is reported with its own validity flag so that a front end
/// can point at every offending option at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub struct OptionsError {
    /// Side length of the board.
    pub board_size: CheckedOption<i32>,
    /// Number of human players.
    pub number_of_humans: CheckedOption<u8>,
    /// Seat taken by a lone human.
    pub human_position: CheckedOption<u8>,
    /// Bot difficulty.
    pub bot_level: CheckedOption<u8>,
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut problems = Vec::new();
        if !self.board_size.valid {
            problems.push(format!("board size {} must be positive", self.board_size.value));
        }
        if !self.number_of_humans.valid {
            problems.push(format!(
                "{} humans requested, at most 2 may play",
                self.number_of_humans.value
            ));
        }
        if !self.human_position.valid {
            problems.push(format!(
                "human position {} does not fit {} human(s)",
                self.human_position.value, self.number_of_humans.value
            ));
        }
        if !self.bot_level.valid {
            problems.push(format!("bot level {} must be 0-3", self.bot_level.value));
        }
        write!(f, "Invalid game options: {}", problems.join("; "))
    }
}

/// Any error the game can surface to a display layer.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// A move was rejected.
    #[display("{_0}")]
    Move(MoveError),
    /// An undo was rejected.
    #[display("{_0}")]
    Undo(UndoError),
    /// Raw input could not be parsed.
    #[display("{_0}")]
    Input(InputError),
    /// Game options were invalid.
    #[display("{_0}")]
    Options(OptionsError),
}

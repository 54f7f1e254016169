//! First-class action types.
//!
//! Actions are the structured input to the turn controller. Parsing from the
//! line protocol lives here so any front end can share it:
//!
//! - `m <x> <y>` places the current player's mark
//! - `u [n]` undoes `n` moves (one when `n` is missing or unreadable)

use crate::{Coordinates, InputError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A request to change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Claim a cell for the player whose turn it is.
    Move {
        /// Cell to claim.
        coordinates: Coordinates,
    },
    /// Take back the most recent moves.
    Undo {
        /// Number of moves to take back.
        count: usize,
    },
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { coordinates } => write!(f, "move {}", coordinates),
            Action::Undo { count } => write!(f, "undo {}", count),
        }
    }
}

impl FromStr for Coordinates {
    type Err = InputError;

    /// Reads two whitespace separated integers, `x` then `y`.
    #[instrument(level = "debug")]
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidCoordinates {
            input: input.to_string(),
        };

        let parts: Vec<&str> = input.split_whitespace().collect();
        let [x, y] = parts.as_slice() else {
            return Err(invalid());
        };

        let x = x.parse::<i32>().map_err(|_| invalid())?;
        let y = y.parse::<i32>().map_err(|_| invalid())?;
        Ok(Coordinates::new(x, y))
    }
}

impl FromStr for Action {
    type Err = InputError;

    #[instrument(level = "debug")]
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut chars = input.chars();
        let Some(command) = chars.next() else {
            return Err(InputError::MissingInput);
        };
        let rest = chars.as_str().trim();

        match command.to_ascii_lowercase() {
            'm' => rest
                .parse::<Coordinates>()
                .map(|coordinates| Action::Move { coordinates }),
            'u' => Ok(Action::Undo {
                count: rest.parse().unwrap_or(1),
            }),
            _ => Err(InputError::InvalidAction {
                input: input.to_string(),
            }),
        }
    }
}

//! Strictly NxN - generalized tic-tac-toe engine
//!
//! Pure game logic for tic-tac-toe on any N×N board, with computer players
//! ranging from random to exhaustive minimax.
//!
//! # Architecture
//!
//! - **Board**: immutable snapshot of moves; validation, undo, empty cells
//! - **Rules**: win and draw detection as pure functions
//! - **Bots**: closed set of strategies that pick a cell for a mark
//! - **GameState**: applies [`Action`]s and sequences turns
//! - **Session**: seats, intents and the application state machine
//!
//! # Example
//!
//! ```
//! use strictly_nxn::{Action, Coordinates, GameState, PlayerMark};
//!
//! let state = GameState::new(3);
//! let state = state
//!     .apply(Action::Move { coordinates: Coordinates::new(1, 1) })
//!     .unwrap();
//! assert_eq!(state.current_mark(), PlayerMark::Two);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod bots;
mod error;
mod options;
pub mod rules;
mod session;
mod state;
mod types;

pub use action::Action;
pub use board::Board;
pub use bots::{Bot, BotStrategy, Choice, MinimaxSearch};
pub use error::{CheckedOption, GameError, InputError, MoveError, OptionsError, UndoError};
pub use options::{ConfigError, GameOptions};
pub use rules::check_for_winner;
pub use session::{AppState, Seat, Session, UserIntent};
pub use state::GameState;
pub use types::{Coordinates, MoveRequest, PlayerMark};

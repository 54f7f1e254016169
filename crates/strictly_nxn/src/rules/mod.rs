//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules carry no notion of
//! whose turn it is; sequencing lives in [`GameState`](crate::GameState).

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_for_winner;

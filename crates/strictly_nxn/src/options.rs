//! Game configuration.

use crate::bots::MAX_BOT_LEVEL;
use crate::error::{CheckedOption, OptionsError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Options chosen at game creation.
///
/// Seats: with two humans both marks are human; with one human,
/// `human_position` (1 or 2) picks their seat and a bot takes the other;
/// with none, bots take both seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(default)]
pub struct GameOptions {
    /// Side length of the board.
    board_size: i32,
    /// Number of human players (0-2).
    number_of_humans: u8,
    /// Seat of a lone human (1 or 2); 0 otherwise.
    human_position: u8,
    /// Bot difficulty (0-3).
    bot_level: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            board_size: 3,
            number_of_humans: 2,
            human_position: 0,
            bot_level: 0,
        }
    }
}

impl GameOptions {
    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionsError`] flagging every invalid field.
    #[instrument]
    pub fn validate(self) -> Result<Self, OptionsError> {
        let board_size = CheckedOption::new(self.board_size, self.board_size >= 1);
        let number_of_humans = CheckedOption::new(self.number_of_humans, self.number_of_humans <= 2);
        let position_fits = match self.number_of_humans {
            1 => (1..=2).contains(&self.human_position),
            _ => self.human_position == 0,
        };
        let human_position = CheckedOption::new(self.human_position, position_fits);
        let bot_level = CheckedOption::new(self.bot_level, self.bot_level <= MAX_BOT_LEVEL);

        if board_size.valid && number_of_humans.valid && human_position.valid && bot_level.valid {
            debug!("Game options valid");
            Ok(self)
        } else {
            Err(OptionsError {
                board_size,
                number_of_humans,
                human_position,
                bot_level,
            })
        }
    }

    /// Loads options from a TOML file. Missing keys take their defaults.
    ///
    /// The result is not validated; call [`GameOptions::validate`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading options from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read options file: {}", e)))?;

        let options: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse options: {}", e)))?;

        info!(board_size = options.board_size, "Options loaded");
        Ok(options)
    }
}

/// Failure to read an options file.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

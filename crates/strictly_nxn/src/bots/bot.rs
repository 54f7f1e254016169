//! Computer-controlled seat.

use super::BotStrategy;
use crate::{Action, Coordinates, GameState, MoveError, PlayerMark, UserIntent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument, warn};

/// A player driven by a [`BotStrategy`].
///
/// Owns its strategy (and with it any search memo) plus its own random
/// source, so independent games never share mutable state.
#[derive(Debug, Clone)]
pub struct Bot {
    mark: PlayerMark,
    strategy: BotStrategy,
    rng: StdRng,
}

impl Bot {
    /// Creates a bot seeded from the thread-local generator.
    #[instrument(skip(strategy), fields(level = strategy.level()))]
    pub fn new(mark: PlayerMark, strategy: BotStrategy) -> Self {
        Self {
            mark,
            strategy,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a bot with a fixed seed, for reproducible games.
    #[instrument(skip(strategy), fields(level = strategy.level()))]
    pub fn seeded(mark: PlayerMark, strategy: BotStrategy, seed: u64) -> Self {
        Self {
            mark,
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Mark this bot plays.
    pub fn mark(&self) -> PlayerMark {
        self.mark
    }

    /// Strategy this bot plays with.
    pub fn strategy(&self) -> &BotStrategy {
        &self.strategy
    }

    /// Picks the next cell to claim.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoAvailableMoves`] if the board is full.
    pub fn coordinates(&mut self, state: &GameState) -> Result<Coordinates, MoveError> {
        self.strategy.coordinates(state, self.mark, &mut self.rng)
    }

    /// Turns the bot's decision into an intent for the session.
    #[instrument(skip(self, state), fields(mark = %self.mark))]
    pub fn intent(&mut self, state: &GameState) -> UserIntent {
        match self.coordinates(state) {
            Ok(coordinates) => {
                debug!(%coordinates, "Bot chose move");
                UserIntent::Act(Action::Move { coordinates })
            }
            Err(error) => {
                warn!(%error, "Bot could not choose a move");
                UserIntent::Error(error.into())
            }
        }
    }
}

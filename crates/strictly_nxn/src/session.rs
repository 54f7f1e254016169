//! Seats, intents and the application-level state machine.
//!
//! This is the layer a front end drives: it turns [`UserIntent`]s (from a
//! keyboard or from a [`Bot`]) into new [`AppState`]s and keeps the last
//! error around for display.

use crate::bots::{Bot, BotStrategy};
use crate::{Action, GameError, GameOptions, GameState, OptionsError, PlayerMark};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Something a player wants to happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Apply an action to the game.
    Act(Action),
    /// Surface an error without changing the game.
    Error(GameError),
    /// Leave the application.
    Quit,
}

impl FromStr for UserIntent {
    type Err = std::convert::Infallible;

    /// Reads one line of input. `q` quits; anything unparsable becomes
    /// [`UserIntent::Error`].
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().eq_ignore_ascii_case("q") {
            return Ok(UserIntent::Quit);
        }
        Ok(match input.parse::<Action>() {
            Ok(action) => UserIntent::Act(action),
            Err(error) => UserIntent::Error(error.into()),
        })
    }
}

/// Who plays a mark.
#[derive(Debug, Clone)]
pub enum Seat {
    /// Moves arrive from outside.
    Human,
    /// Moves come from a bot.
    Bot(Bot),
}

/// A game in progress together with its seats and last error.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    seats: BTreeMap<PlayerMark, Seat>,
    error: Option<GameError>,
}

impl Session {
    /// Creates a session from validated options.
    #[instrument]
    pub fn new(options: GameOptions) -> Self {
        let level = *options.bot_level();
        let bot = |mark| Seat::Bot(Bot::new(mark, BotStrategy::at_level(level)));

        let seats: BTreeMap<PlayerMark, Seat> = match *options.number_of_humans() {
            2 => PlayerMark::placeable().map(|mark| (mark, Seat::Human)).collect(),
            1 => {
                let human = if *options.human_position() == 1 {
                    PlayerMark::One
                } else {
                    PlayerMark::Two
                };
                PlayerMark::placeable()
                    .map(|mark| if mark == human { (mark, Seat::Human) } else { (mark, bot(mark)) })
                    .collect()
            }
            _ => PlayerMark::placeable().map(|mark| (mark, bot(mark))).collect(),
        };

        Self::with_seats(GameState::new(*options.board_size()), seats)
    }

    /// Creates a session from an explicit state and seating.
    pub fn with_seats(state: GameState, seats: BTreeMap<PlayerMark, Seat>) -> Self {
        Self {
            state,
            seats,
            error: None,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the error raised by the last intent, if any.
    pub fn error(&self) -> Option<&GameError> {
        self.error.as_ref()
    }

    /// Returns the seat playing `mark`.
    pub fn seat(&self, mark: PlayerMark) -> Option<&Seat> {
        self.seats.get(&mark)
    }

    /// Consumes the session, handing back its seats for another game.
    pub fn into_seats(self) -> BTreeMap<PlayerMark, Seat> {
        self.seats
    }

    /// Returns true if a bot plays the current mark.
    pub fn is_bot_turn(&self) -> bool {
        matches!(self.seat(self.state.current_mark()), Some(Seat::Bot(_)))
    }

    /// Asks the bot seated at the current mark for its intent.
    ///
    /// Returns `None` when a human is to move or the game is over.
    #[instrument(skip(self), fields(current = %self.state.current_mark()))]
    pub fn next_bot_intent(&mut self) -> Option<UserIntent> {
        if self.state.is_over() {
            return None;
        }
        match self.seats.get_mut(&self.state.current_mark()) {
            Some(Seat::Bot(bot)) => Some(bot.intent(&self.state)),
            _ => None,
        }
    }

    /// Applies an intent, producing the next application state.
    ///
    /// Rejected actions keep the game as it was and record the error.
    #[instrument(skip(self))]
    pub fn handle_intent(mut self, intent: UserIntent) -> AppState {
        match intent {
            UserIntent::Act(action) => match self.state.apply(action) {
                Ok(state) => {
                    self.state = state;
                    self.error = None;
                }
                Err(error) => {
                    warn!(%error, "Action rejected");
                    self.error = Some(error);
                }
            },
            UserIntent::Error(error) => {
                debug!(%error, "Error intent");
                self.error = Some(error);
            }
            UserIntent::Quit => {
                info!("Quit requested");
                return AppState::Exit;
            }
        }
        AppState::Game(self)
    }
}

/// Top-level application state.
#[derive(Debug, Clone)]
pub enum AppState {
    /// A game is running.
    Game(Session),
    /// The game could not be created; nothing can recover.
    FatalError(OptionsError),
    /// The application is done.
    Exit,
}

impl AppState {
    /// Validates options and starts a game, or halts on invalid options.
    #[instrument]
    pub fn start(options: GameOptions) -> Self {
        match options.validate() {
            Ok(options) => {
                info!(board_size = *options.board_size(), "Starting game");
                AppState::Game(Session::new(options))
            }
            Err(error) => {
                warn!(%error, "Cannot start game");
                AppState::FatalError(error)
            }
        }
    }

    /// Routes an intent to the running game. Terminal states ignore intents.
    pub fn handle_intent(self, intent: UserIntent) -> Self {
        match self {
            AppState::Game(session) => session.handle_intent(intent),
            other => other,
        }
    }

    /// Returns the running session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            AppState::Game(session) => Some(session),
            _ => None,
        }
    }

    /// Returns the running session mutably, if any.
    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            AppState::Game(session) => Some(session),
            _ => None,
        }
    }
}

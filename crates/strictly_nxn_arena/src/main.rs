//! Strictly NxN Arena
//!
//! Plays bot-vs-bot games headlessly and logs the results.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::Cli;
use std::collections::BTreeMap;
use strictly_nxn::{
    AppState, Bot, BotStrategy, GameOptions, GameState, PlayerMark, Seat, Session,
};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let options = resolve_options(&cli)?;

    let first_level = cli.first_level.unwrap_or(*options.bot_level());
    let second_level = cli.second_level.unwrap_or(first_level);
    let base_seed = cli.seed.unwrap_or_else(rand::random);
    if *options.board_size() > 3 && first_level.max(second_level) == 3 {
        warn!("Exhaustive minimax beyond 3x3 can take a very long time");
    }

    info!(
        board_size = *options.board_size(),
        first_level,
        second_level,
        games = cli.games,
        base_seed,
        "Starting arena"
    );

    // Bots keep their strategy (and minimax memo) across games.
    let mut seats = BTreeMap::new();
    seats.insert(
        PlayerMark::One,
        Seat::Bot(Bot::seeded(PlayerMark::One, BotStrategy::at_level(first_level), base_seed)),
    );
    seats.insert(
        PlayerMark::Two,
        Seat::Bot(Bot::seeded(
            PlayerMark::Two,
            BotStrategy::at_level(second_level),
            base_seed.wrapping_add(1),
        )),
    );

    let mut tally: BTreeMap<PlayerMark, u32> = BTreeMap::new();
    for game in 1..=cli.games {
        let (winner, returned) = play_game(*options.board_size(), seats)?;
        seats = returned;
        *tally.entry(winner).or_default() += 1;
        info!(game, %winner, "Game finished");
    }

    info!(
        first_wins = tally.get(&PlayerMark::One).copied().unwrap_or(0),
        second_wins = tally.get(&PlayerMark::Two).copied().unwrap_or(0),
        draws = tally.get(&PlayerMark::None).copied().unwrap_or(0),
        "Arena complete"
    );
    Ok(())
}

/// Merges the config file with command-line overrides and validates.
#[instrument(skip(cli))]
fn resolve_options(cli: &Cli) -> Result<GameOptions> {
    let base = match &cli.config {
        Some(path) => GameOptions::from_file(path)?,
        None => GameOptions::default(),
    };

    let options = GameOptions::new(
        cli.board_size.unwrap_or(*base.board_size()),
        0,
        0,
        cli.first_level.unwrap_or(*base.bot_level()),
    );
    if let Some(level) = cli.second_level {
        // Only the first level travels through GameOptions; check the second here.
        GameOptions::new(*options.board_size(), 0, 0, level).validate()?;
    }

    Ok(options.validate()?)
}

/// Plays one game to the end, returning the winner and the seats for reuse.
#[instrument(skip(seats))]
fn play_game(
    board_size: i32,
    seats: BTreeMap<PlayerMark, Seat>,
) -> Result<(PlayerMark, BTreeMap<PlayerMark, Seat>)> {
    let mut app = AppState::Game(Session::with_seats(GameState::new(board_size), seats));

    loop {
        let Some(session) = app.session_mut() else {
            bail!("Arena session ended unexpectedly");
        };
        let Some(intent) = session.next_bot_intent() else {
            break;
        };
        debug!(?intent, "Bot intent");
        app = app.handle_intent(intent);

        if let Some(error) = app.session().and_then(Session::error) {
            warn!(%error, "Bot produced an invalid intent");
            bail!("Bot failed: {error}");
        }
    }

    match app {
        AppState::Game(session) => {
            let winner = session.state().winner();
            Ok((winner, session.into_seats()))
        }
        _ => bail!("Arena session ended unexpectedly"),
    }
}

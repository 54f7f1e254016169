//! Command-line interface for the arena.

use clap::Parser;

/// Strictly NxN Arena - pit tic-tac-toe bots against each other
#[derive(Parser, Debug)]
#[command(name = "strictly_nxn_arena")]
#[command(about = "Headless bot-vs-bot tic-tac-toe matches", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with game options (board_size, bot_level)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Side length of the board (overrides the config file)
    #[arg(short, long)]
    pub board_size: Option<i32>,

    /// Level of the bot playing first: 0 random, 1 win, 2 win-or-block, 3 minimax
    #[arg(long)]
    pub first_level: Option<u8>,

    /// Level of the bot playing second (defaults to the first bot's level)
    #[arg(long)]
    pub second_level: Option<u8>,

    /// Number of games to play
    #[arg(short, long, default_value = "10")]
    pub games: u32,

    /// Base seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

//! Command-line interface for gridmark.

use clap::{Parser, Subcommand};

/// Gridmark - two-player tic-tac-toe with persisted game history
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Two-player N-by-N tic-tac-toe with persisted game history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database file (defaults to DATABASE_URL, then "gridmark.db")
    #[arg(long)]
    pub db_path: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a local two-player game in the terminal
    Play {
        /// Board side length (3-6)
        #[arg(short, long, default_value = "3")]
        size: usize,
    },

    /// Print the results of the last ten finished games
    Scoreboard,

    /// Print recent finished games with their final boards
    Recent,
}

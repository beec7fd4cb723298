//! Gridmark - unified CLI
//!
//! Two-player N-by-N tic-tac-toe played in the terminal, with every
//! move persisted and a scoreboard of recent results.

use std::io::{BufRead, Write as _};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridmark::{BoardSize, GameApp, GameRepository, GameStatus};

mod cli;

use cli::{Cli, Command};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let db_path = cli
        .db_path
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "gridmark.db".to_string());

    apply_migrations(&db_path)?;
    let repository = GameRepository::new(db_path)?;

    match cli.command {
        Command::Play { size } => run_play(repository, size),
        Command::Scoreboard => run_scoreboard(repository),
        Command::Recent => run_recent(repository),
    }
}

/// Brings the database schema up to date before any repository use.
fn apply_migrations(db_path: &str) -> Result<()> {
    let mut conn = SqliteConnection::establish(db_path)
        .with_context(|| format!("failed to open database at '{db_path}'"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("migrations failed: {e}"))?;
    info!(path = %db_path, "Database ready");
    Ok(())
}

/// Interactive two-player loop: both players share the terminal.
fn run_play(repository: GameRepository, size: usize) -> Result<()> {
    let size = BoardSize::from_dimension(size)
        .ok_or_else(|| anyhow!("board size must be one of 3, 4, 5, 6"))?;
    let mut app = GameApp::new(size, repository);

    println!("Gridmark - cell indices are row-major, 0 to n*n-1.");
    println!("Commands: <index> move, u undo, r reset, s <n> board size, b scoreboard, v recent games, q quit.");

    let stdin = std::io::stdin();
    loop {
        print_session(&app);
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "q" | "quit" => break,
            "u" => app.undo(),
            "r" => app.reset(),
            "b" => print_scoreboard(&app),
            "v" => {
                app.refresh_recent();
                print_recent(&app);
            }
            _ => {
                if let Some(rest) = input.strip_prefix("s ") {
                    match rest.trim().parse::<usize>().ok().and_then(BoardSize::from_dimension) {
                        Some(new_size) => app.set_board_size(new_size),
                        None => println!("Board size must be one of 3, 4, 5, 6."),
                    }
                } else if let Ok(index) = input.parse::<usize>() {
                    app.play(index);
                } else {
                    println!("Unrecognized input '{input}'.");
                }
            }
        }
    }

    Ok(())
}

/// Prints the last ten finished game results.
fn run_scoreboard(repository: GameRepository) -> Result<()> {
    let entries = repository.scoreboard()?;
    if entries.is_empty() {
        println!("No finished games yet.");
        return Ok(());
    }
    println!("Last {} results:", entries.len());
    for entry in &entries {
        println!("  #{:<6} {}", entry.id(), entry.status());
    }
    Ok(())
}

/// Prints recent finished games with their final boards.
fn run_recent(repository: GameRepository) -> Result<()> {
    let records = repository.recent_completed(gridmark::SCOREBOARD_LIMIT)?;
    if records.is_empty() {
        println!("No finished games yet.");
        return Ok(());
    }
    for record in &records {
        println!("Game #{} - {} ({})", record.id(), record.status(), record.created_at());
        match record.decode_board() {
            Ok(board) => println!("{}\n", board.display()),
            Err(e) => println!("  (board unreadable: {e})\n"),
        }
    }
    Ok(())
}

fn print_session(app: &GameApp) {
    let session = app.session();
    println!("\n{}", session.board().display());
    match session.status() {
        GameStatus::NotStarted => println!("Click to start - {} to move.", session.current_player()),
        GameStatus::InProgress => println!("In progress - {} to move.", session.current_player()),
        status @ (GameStatus::Won(_) | GameStatus::Draw) => {
            println!("Game ended: {status}.");
            print_scoreboard(app);
        }
    }
}

fn print_scoreboard(app: &GameApp) {
    if app.scoreboard().is_empty() {
        println!("No finished games yet.");
        return;
    }
    println!("Last {} results:", app.scoreboard().len());
    for entry in app.scoreboard() {
        println!("  #{:<6} {}", entry.id(), entry.status());
    }
}

fn print_recent(app: &GameApp) {
    if app.recent_games().is_empty() {
        println!("No finished games yet.");
        return;
    }
    for record in app.recent_games() {
        println!("Game #{} - {}", record.id(), record.status());
        match record.decode_board() {
            Ok(board) => println!("{}\n", board.display()),
            Err(e) => println!("  (board unreadable: {e})\n"),
        }
    }
}

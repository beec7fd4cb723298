//! Gridmark library - two-player N-by-N tic-tac-toe with persisted
//! game history and a live scoreboard.
//!
//! # Architecture
//!
//! - **Game**: pure engine - line generation, win/draw detection, and
//!   the session state machine with snapshot-based undo
//! - **Db**: SQLite record store - one row per accepted move, plus the
//!   scoreboard and recent-game queries
//! - **App**: glue layer - applies moves, fires the persistence write,
//!   and keeps the cached read lists fresh
//!
//! # Example
//!
//! ```
//! use gridmark::{BoardSize, GameSession, GameStatus};
//!
//! let mut session = GameSession::new(BoardSize::Three);
//! session.play(0);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod db;
mod game;

// Crate-level exports - App layer
pub use app::GameApp;

// Crate-level exports - Persistence
pub use db::{
    DbError, GameRecord, GameRepository, NewGameRecord, SCOREBOARD_LIMIT, ScoreEntry,
    decode_board, encode_board,
};

// Crate-level exports - Game engine
pub use game::{
    Board, BoardSize, Cell, GameSession, GameStatus, History, HistoryEntry, Line, LineSet, Mark,
    MoveRecord, Outcome, detect, is_full, line_set, scan_lines,
};

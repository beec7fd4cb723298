//! Database persistence layer for game records and the scoreboard.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use models::{GameRecord, NewGameRecord, ScoreEntry, decode_board, encode_board};
pub use repository::{GameRepository, SCOREBOARD_LIMIT};

//! Database models for persisted game records.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::{DbError, schema};
use crate::game::{Board, Cell, GameStatus, Mark, MoveRecord};

/// One persisted game record: a board snapshot written after a move.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::games)]
pub struct GameRecord {
    id: i32,
    board: String,
    current_player: String,
    status: String,
    created_at: NaiveDateTime,
}

impl GameRecord {
    /// Decodes the stored board JSON back into cells.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the JSON is malformed or its length is
    /// not a supported square.
    pub fn decode_board(&self) -> Result<Board, DbError> {
        decode_board(&self.board)
    }

    /// Parses the stored status string.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the string is not one of the five values
    /// the engine writes.
    pub fn parse_status(&self) -> Result<GameStatus, DbError> {
        GameStatus::from_db_str(&self.status)
            .ok_or_else(|| DbError::new(format!("Invalid status: '{}'", self.status)))
    }

    /// Parses the stored mover letter.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the letter is neither "X" nor "O".
    pub fn parse_player(&self) -> Result<Mark, DbError> {
        match self.current_player.as_str() {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            other => Err(DbError::new(format!("Invalid player: '{}'", other))),
        }
    }
}

/// Insertable game record, one row per accepted move.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::games)]
pub struct NewGameRecord {
    board: String,
    current_player: String,
    status: String,
}

impl TryFrom<&MoveRecord> for NewGameRecord {
    type Error = DbError;

    fn try_from(record: &MoveRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(
            encode_board(record.board())?,
            record.current_player().as_str().to_string(),
            record.status().as_db_str().to_string(),
        ))
    }
}

/// Scoreboard row: id and result string of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, new, Getters)]
pub struct ScoreEntry {
    id: i32,
    status: String,
}

/// Encodes a board as the stored wire shape: a row-major JSON array of
/// `"X"`, `"O"`, or `null`.
///
/// # Errors
///
/// Returns [`DbError`] if serialization fails.
pub fn encode_board(board: &Board) -> Result<String, DbError> {
    let cells: Vec<Option<Mark>> = board
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Occupied(mark) => Some(*mark),
            Cell::Empty => None,
        })
        .collect();
    Ok(serde_json::to_string(&cells)?)
}

/// Decodes the stored wire shape back into a board.
///
/// # Errors
///
/// Returns [`DbError`] if the JSON is malformed or the cell count is
/// not a square of a side length of at least 2.
pub fn decode_board(json: &str) -> Result<Board, DbError> {
    let cells: Vec<Option<Mark>> = serde_json::from_str(json)?;
    let count = cells.len();
    let cells: Vec<Cell> = cells
        .into_iter()
        .map(|slot| match slot {
            Some(mark) => Cell::Occupied(mark),
            None => Cell::Empty,
        })
        .collect();
    Board::from_cells(cells)
        .ok_or_else(|| DbError::new(format!("Board length {} is not a square", count)))
}

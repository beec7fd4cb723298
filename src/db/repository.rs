//! SQLite repository for persisted game records.

use diesel::prelude::*;
use tracing::{debug, info, instrument};

use crate::db::{DbError, GameRecord, NewGameRecord, ScoreEntry, schema};

/// Status strings of finished games, the only rows the read queries
/// return.
const COMPLETED_STATUSES: [&str; 3] = ["draw", "Player X won", "Player O won"];

/// How many finished games the scoreboard lists.
pub const SCOREBOARD_LIMIT: i64 = 10;

/// Record store for game snapshots.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a new repository connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating GameRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Inserts one game record, as emitted after an accepted move.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, record), fields(status = %record.status(), player = %record.current_player()))]
    pub fn record_move(&self, record: NewGameRecord) -> Result<GameRecord, DbError> {
        debug!("Recording move");
        let mut conn = self.connection()?;

        let saved = diesel::insert_into(schema::games::table)
            .values(&record)
            .returning(GameRecord::as_returning())
            .get_result(&mut conn)?;

        info!(id = saved.id(), status = %saved.status(), "Move recorded");
        Ok(saved)
    }

    /// Loads the most recent finished games, newest first.
    ///
    /// Rows still in "start" or "in_progress" never appear here; this
    /// backs the previous-game replay view.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn recent_completed(&self, limit: i64) -> Result<Vec<GameRecord>, DbError> {
        debug!(limit, "Loading recent completed games");
        let mut conn = self.connection()?;

        let records = schema::games::table
            .filter(schema::games::status.eq_any(COMPLETED_STATUSES))
            .order((schema::games::created_at.desc(), schema::games::id.desc()))
            .limit(limit)
            .load::<GameRecord>(&mut conn)?;

        info!(count = records.len(), "Recent games loaded");
        Ok(records)
    }

    /// Loads the scoreboard: id and result of the last ten finished
    /// games, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn scoreboard(&self) -> Result<Vec<ScoreEntry>, DbError> {
        debug!("Loading scoreboard");
        let mut conn = self.connection()?;

        let rows = schema::games::table
            .filter(schema::games::status.eq_any(COMPLETED_STATUSES))
            .order((schema::games::created_at.desc(), schema::games::id.desc()))
            .limit(SCOREBOARD_LIMIT)
            .select((schema::games::id, schema::games::status))
            .load::<(i32, String)>(&mut conn)?;

        let entries = rows
            .into_iter()
            .map(|(id, status)| ScoreEntry::new(id, status))
            .collect::<Vec<_>>();

        info!(count = entries.len(), "Scoreboard loaded");
        Ok(entries)
    }
}

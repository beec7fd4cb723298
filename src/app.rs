//! App layer wiring the game session to the record store.
//!
//! Gameplay state is applied synchronously and unconditionally; the
//! persistence write that follows is fire-and-forget. Store failures
//! are logged and never roll back or block a move, and the cached read
//! lists degrade to their previous value when a query fails.

use tracing::{debug, instrument, warn};

use crate::db::{GameRecord, GameRepository, NewGameRecord, SCOREBOARD_LIMIT, ScoreEntry};
use crate::game::{BoardSize, GameSession, MoveRecord};

/// Coordinates one live session with the record store and the cached
/// scoreboard and replay lists.
#[derive(Debug)]
pub struct GameApp {
    session: GameSession,
    repository: GameRepository,
    scoreboard: Vec<ScoreEntry>,
    recent: Vec<GameRecord>,
    refresh_count: u64,
}

impl GameApp {
    /// Creates the app with a fresh session and an initial scoreboard
    /// read.
    #[instrument(skip(repository))]
    pub fn new(size: BoardSize, repository: GameRepository) -> Self {
        let mut app = Self {
            session: GameSession::new(size),
            repository,
            scoreboard: Vec::new(),
            recent: Vec::new(),
            refresh_count: 0,
        };
        app.refresh_scoreboard();
        app
    }

    /// The live game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The cached scoreboard rows, newest first.
    pub fn scoreboard(&self) -> &[ScoreEntry] {
        &self.scoreboard
    }

    /// The cached recent finished games backing the replay view.
    pub fn recent_games(&self) -> &[GameRecord] {
        &self.recent
    }

    /// How many scoreboard refreshes have been signalled.
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Applies a move, persists the emitted record, and refreshes the
    /// scoreboard.
    ///
    /// An illegal move is ignored by the session and triggers neither a
    /// write nor a refresh. The refresh signal fires even when the
    /// write failed, so the scoreboard read may see a store missing the
    /// failed row; that inconsistency is accepted.
    pub fn play(&mut self, index: usize) {
        let Some(record) = self.session.play(index) else {
            return;
        };
        self.persist(&record);
        self.refresh_count += 1;
        self.refresh_scoreboard();
    }

    /// Reverts the most recent move. Nothing is written to the store.
    pub fn undo(&mut self) {
        self.session.undo();
    }

    /// Starts a fresh game at the current board size.
    pub fn reset(&mut self) {
        self.session.reset(None);
    }

    /// Switches the board dimension, discarding any game in play.
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, size: BoardSize) {
        self.session.reset(Some(size));
    }

    /// Re-reads the recent finished games list.
    ///
    /// On failure the previous (possibly empty) list is kept.
    #[instrument(skip(self))]
    pub fn refresh_recent(&mut self) {
        match self.repository.recent_completed(SCOREBOARD_LIMIT) {
            Ok(records) => {
                debug!(count = records.len(), "Recent games refreshed");
                self.recent = records;
            }
            Err(e) => warn!(error = %e, "Recent games query failed, keeping previous list"),
        }
    }

    fn persist(&self, record: &MoveRecord) {
        let result = NewGameRecord::try_from(record)
            .and_then(|row| self.repository.record_move(row));
        match result {
            Ok(saved) => debug!(id = saved.id(), "Move persisted"),
            Err(e) => warn!(error = %e, "Failed to persist move, gameplay unaffected"),
        }
    }

    fn refresh_scoreboard(&mut self) {
        match self.repository.scoreboard() {
            Ok(rows) => {
                debug!(count = rows.len(), "Scoreboard refreshed");
                self.scoreboard = rows;
            }
            Err(e) => warn!(error = %e, "Scoreboard query failed, keeping previous list"),
        }
    }
}

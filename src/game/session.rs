//! Game session state machine.
//!
//! A session owns the live aggregate of one game: board, current
//! player, status, winning line, the cached line set, and the snapshot
//! history. Only the operations here mutate it, and each one runs to
//! completion before the next user event is processed.

use tracing::{debug, info, instrument};

use super::history::{History, HistoryEntry};
use super::lines::{Line, LineSet, line_set};
use super::rules::{Outcome, detect};
use super::types::{Board, BoardSize, GameStatus, Mark};

/// Record emitted after each accepted move, for the persistence store.
///
/// `current_player` carries the player value from *before* the turn
/// toggle, matching what the store has always received per move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    board: Board,
    current_player: Mark,
    status: GameStatus,
}

impl MoveRecord {
    /// The board after the move was applied.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who held the turn when the move was accepted.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// The status the move transitioned the session into.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

/// Live aggregate of one game in progress.
///
/// Recreated wholesale when the dimension changes; nothing carries over
/// across a resize.
#[derive(Debug, Clone)]
pub struct GameSession {
    size: BoardSize,
    board: Board,
    current_player: Mark,
    status: GameStatus,
    winning_line: Line,
    lines: LineSet,
    history: History,
}

impl GameSession {
    /// Creates a fresh session at the given board size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        info!(size = %size, "Creating game session");
        let board = Board::new(size);
        let history = History::new(HistoryEntry::new(
            board.clone(),
            Mark::X,
            GameStatus::NotStarted,
            Vec::new(),
        ));
        Self {
            size,
            board,
            current_player: Mark::X,
            status: GameStatus::NotStarted,
            winning_line: Vec::new(),
            lines: line_set(size.dimension()),
            history,
        }
    }

    /// The active board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player holding the turn.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// The session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winning line, empty unless the game is won.
    pub fn winning_line(&self) -> &[usize] {
        &self.winning_line
    }

    /// The snapshot history, initial state included.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Applies the current player's marker at `index`.
    ///
    /// Returns the record to persist, or `None` when the request was
    /// illegal (index out of range, occupied cell, or finished game).
    /// Illegal requests change nothing and are deliberately not logged.
    pub fn play(&mut self, index: usize) -> Option<MoveRecord> {
        if !self.status.accepts_moves()
            || index >= self.board.cell_count()
            || !self.board.is_empty_cell(index)
        {
            return None;
        }

        let mover = self.current_player;
        let board = self.board.with_mark(index, mover);
        let outcome = detect(&board, &self.lines);

        let status = if self.status == GameStatus::NotStarted {
            // A single marker can never hold a full line for n >= 2.
            debug_assert!(outcome.is_none(), "first move produced a terminal outcome");
            GameStatus::InProgress
        } else {
            match &outcome {
                Some(Outcome::Win { mark, .. }) => GameStatus::Won(*mark),
                Some(Outcome::Draw) => GameStatus::Draw,
                None => GameStatus::InProgress,
            }
        };
        let winning_line = match outcome {
            Some(Outcome::Win { line, .. }) => line,
            _ => Vec::new(),
        };

        self.board = board;
        self.status = status;
        self.winning_line = winning_line;
        // The toggle is unconditional on every accepted move, even one
        // that ends the game.
        self.current_player = mover.opponent();
        self.history.push(HistoryEntry::new(
            self.board.clone(),
            self.current_player,
            self.status,
            self.winning_line.clone(),
        ));

        info!(
            index,
            player = %mover,
            status = %self.status,
            "Move applied"
        );

        Some(MoveRecord {
            board: self.board.clone(),
            current_player: mover,
            status: self.status,
        })
    }

    /// Reverts the most recent move.
    ///
    /// Restores board, turn, status, and winning line from the previous
    /// snapshot. A session with nothing beyond the initial snapshot is
    /// left untouched. Emits no persistence record.
    #[instrument(skip(self))]
    pub fn undo(&mut self) {
        if !self.history.truncate_last() {
            debug!("Undo ignored, no move to revert");
            return;
        }
        let entry = self.history.last();
        self.board = entry.board().clone();
        self.current_player = entry.to_move();
        self.status = entry.status();
        self.winning_line = entry.winning_line().to_vec();
        debug!(depth = self.history.depth(), status = %self.status, "Undo applied");
    }

    /// Starts a fresh game, optionally at a new board size.
    ///
    /// The line set is regenerated only when the dimension changes.
    #[instrument(skip(self))]
    pub fn reset(&mut self, size: Option<BoardSize>) {
        let size = size.unwrap_or(self.size);
        if size != self.size {
            self.lines = line_set(size.dimension());
            self.size = size;
        }
        self.board = Board::new(size);
        self.current_player = Mark::X;
        self.status = GameStatus::NotStarted;
        self.winning_line = Vec::new();
        self.history = History::new(HistoryEntry::new(
            self.board.clone(),
            Mark::X,
            GameStatus::NotStarted,
            Vec::new(),
        ));
        info!(size = %size, "Session reset");
    }
}

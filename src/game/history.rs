//! Move-history snapshots driving undo.

use super::lines::Line;
use super::types::{Board, GameStatus, Mark};

/// Immutable snapshot of session state, taken once at game start and
/// again after every applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    winning_line: Line,
}

impl HistoryEntry {
    /// Creates a snapshot of the given state.
    pub fn new(board: Board, to_move: Mark, status: GameStatus, winning_line: Line) -> Self {
        Self {
            board,
            to_move,
            status,
            winning_line,
        }
    }

    /// The board as of this snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move comes next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The session status as of this snapshot.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winning line, empty unless the snapshot is of a won game.
    pub fn winning_line(&self) -> &[usize] {
        &self.winning_line
    }
}

/// Arena of snapshots indexed by position.
///
/// The initial snapshot is fixed at position zero, so the arena always
/// holds at least one entry. Play appends; undo truncates exactly the
/// newest appended entry and never touches earlier ones.
#[derive(Debug, Clone)]
pub struct History {
    initial: HistoryEntry,
    moves: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the initial snapshot.
    pub fn new(initial: HistoryEntry) -> Self {
        Self {
            initial,
            moves: Vec::new(),
        }
    }

    /// Appends a post-move snapshot.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.moves.push(entry);
    }

    /// Number of snapshots, counting the initial one.
    pub fn depth(&self) -> usize {
        1 + self.moves.len()
    }

    /// The snapshot at the given position, zero being the initial state.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        if index == 0 {
            Some(&self.initial)
        } else {
            self.moves.get(index - 1)
        }
    }

    /// The most recent snapshot.
    pub fn last(&self) -> &HistoryEntry {
        self.moves.last().unwrap_or(&self.initial)
    }

    /// Drops the most recent post-move snapshot.
    ///
    /// Returns `false` when only the initial snapshot remains, in which
    /// case nothing changes.
    pub fn truncate_last(&mut self) -> bool {
        self.moves.pop().is_some()
    }
}

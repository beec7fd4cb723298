//! Core domain types for the game board.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Marker placed by one of the two local players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Mark {
    /// Returns the other player's marker.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the single-letter form stored in game records.
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's marker.
    Occupied(Mark),
}

/// Supported board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum BoardSize {
    /// 3x3 board.
    Three,
    /// 4x4 board.
    Four,
    /// 5x5 board.
    Five,
    /// 6x6 board.
    Six,
}

impl BoardSize {
    /// Returns the side length of the board.
    pub fn dimension(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
            BoardSize::Six => 6,
        }
    }

    /// Creates a board size from a side length, if supported.
    pub fn from_dimension(n: usize) -> Option<Self> {
        match n {
            3 => Some(BoardSize::Three),
            4 => Some(BoardSize::Four),
            5 => Some(BoardSize::Five),
            6 => Some(BoardSize::Six),
            _ => None,
        }
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.dimension();
        write!(f, "{n}x{n}")
    }
}

/// N-by-N game board, cells stored in row-major order (index = row * N + col).
///
/// The length of the cell vector is always the square of the side length.
/// Engine code never mutates a board in place across history entries;
/// [`Board::with_mark`] produces a fresh value instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        let n = size.dimension();
        Self {
            size: n,
            cells: vec![Cell::Empty; n * n],
        }
    }

    /// Rebuilds a board from a flat row-major cell vector.
    ///
    /// Returns `None` unless the length is a perfect square of a side
    /// length of at least 2.
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        let n = (cells.len() as f64).sqrt() as usize;
        if n < 2 || n * n != cells.len() {
            return None;
        }
        Some(Self { size: n, cells })
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at the given index is empty.
    pub fn is_empty_cell(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns a new board with the given marker written at `index`.
    ///
    /// The receiver is left untouched, so earlier snapshots keep their
    /// own cell storage. Out-of-range indices return an unchanged copy.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells.clone();
        if let Some(cell) = cells.get_mut(index) {
            *cell = Cell::Occupied(mark);
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Cell::Empty => ".",
                    Cell::Occupied(mark) => mark.as_str(),
                };
                result.push_str(symbol);
                if col < self.size - 1 {
                    result.push('|');
                }
            }
            if row < self.size - 1 {
                result.push('\n');
                result.push_str(&"-".repeat(self.size * 2 - 1));
                result.push('\n');
            }
        }
        result
    }
}

/// Lifecycle status of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Session created, no move applied yet.
    NotStarted,
    /// At least one move applied, no terminal result.
    InProgress,
    /// Game ended with a winner.
    Won(Mark),
    /// Game ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Whether the session accepts further moves in this status.
    pub fn accepts_moves(self) -> bool {
        matches!(self, GameStatus::NotStarted | GameStatus::InProgress)
    }

    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        !self.accepts_moves()
    }

    /// Converts the status to the string stored in the database.
    ///
    /// These strings are a persistence contract; no other values are
    /// ever written.
    pub fn as_db_str(self) -> &'static str {
        match self {
            GameStatus::NotStarted => "start",
            GameStatus::InProgress => "in_progress",
            GameStatus::Draw => "draw",
            GameStatus::Won(Mark::X) => "Player X won",
            GameStatus::Won(Mark::O) => "Player O won",
        }
    }

    /// Parses a status from the string stored in the database.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(GameStatus::NotStarted),
            "in_progress" => Some(GameStatus::InProgress),
            "draw" => Some(GameStatus::Draw),
            "Player X won" => Some(GameStatus::Won(Mark::X)),
            "Player O won" => Some(GameStatus::Won(Mark::O)),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

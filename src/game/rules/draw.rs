//! Draw detection.

use super::super::types::{Board, Cell};

/// Checks whether every cell on the board is occupied.
///
/// A full board with no completed line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

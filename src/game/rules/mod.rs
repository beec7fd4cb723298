//! Game rules: pure functions evaluating a board against the line set.
//!
//! Rules are separated from board storage and from the session state
//! machine so they can be exercised in isolation after every move.

mod draw;
mod win;

pub use draw::is_full;
pub use win::scan_lines;

use super::lines::{Line, LineSet};
use super::types::{Board, Mark};

/// Result reported by the detector after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One marker holds a complete line.
    Win {
        /// The winning marker.
        mark: Mark,
        /// The completed line, in generation order.
        line: Line,
    },
    /// Every cell is occupied and no line is complete.
    Draw,
}

/// Evaluates the board against the precomputed lines.
///
/// Returns `None` while the game can continue: no complete line and at
/// least one empty cell. Never mutates the board, and repeated calls on
/// the same inputs yield the same answer.
pub fn detect(board: &Board, lines: &LineSet) -> Option<Outcome> {
    if let Some((mark, line)) = scan_lines(board, lines) {
        return Some(Outcome::Win {
            mark,
            line: line.to_vec(),
        });
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::lines::line_set;
    use super::super::types::BoardSize;
    use super::*;

    /// Builds a 3x3 board from a compact row-major layout string.
    fn board3(layout: &str) -> Board {
        let mut board = Board::new(BoardSize::Three);
        for (i, c) in layout.chars().enumerate() {
            board = match c {
                'X' => board.with_mark(i, Mark::X),
                'O' => board.with_mark(i, Mark::O),
                _ => board,
            };
        }
        board
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board3("XOXOXOOXO");
        let lines = line_set(3);
        assert_eq!(detect(&board, &lines), Some(Outcome::Draw));
    }

    #[test]
    fn test_open_board_is_none() {
        let board = board3("XOX......");
        let lines = line_set(3);
        assert_eq!(detect(&board, &lines), None);
    }

    #[test]
    fn test_completed_row_mid_game() {
        let board = board3("XXXOO....");
        let lines = line_set(3);
        assert_eq!(
            detect(&board, &lines),
            Some(Outcome::Win {
                mark: Mark::X,
                line: vec![0, 1, 2],
            })
        );
    }

    #[test]
    fn test_detect_is_idempotent() {
        let board = board3("XXXOO....");
        let lines = line_set(3);
        let first = detect(&board, &lines);
        let second = detect(&board, &lines);
        assert_eq!(first, second);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // Bottom row belongs to O on an otherwise full board.
        let board = board3("XOXXXOOOO");
        let lines = line_set(3);
        match detect(&board, &lines) {
            Some(Outcome::Win { mark, line }) => {
                assert_eq!(mark, Mark::O);
                assert_eq!(line, vec![6, 7, 8]);
            }
            other => panic!("expected a win, got {other:?}"),
        }
    }
}

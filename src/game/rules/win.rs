//! Win detection over a precomputed line set.

use super::super::lines::LineSet;
use super::super::types::{Board, Cell, Mark};

/// Scans the lines in generation order and returns the first line held
/// entirely by one marker, together with that marker.
///
/// When one move completes several lines at once (possible from 4x4 up),
/// the line appearing earliest in generation order is the one reported.
/// Pure read of the board; safe to call repeatedly.
pub fn scan_lines<'a>(board: &Board, lines: &'a LineSet) -> Option<(Mark, &'a [usize])> {
    for line in lines.lines() {
        let Some(Cell::Occupied(mark)) = line.first().and_then(|&i| board.get(i)) else {
            continue;
        };
        if line
            .iter()
            .all(|&i| board.get(i) == Some(Cell::Occupied(mark)))
        {
            return Some((mark, line.as_slice()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::super::lines::line_set;
    use super::super::super::types::BoardSize;
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(BoardSize::Three);
        let lines = line_set(3);
        assert_eq!(scan_lines(&board, &lines), None);
    }

    #[test]
    fn test_winner_top_row_mid_game() {
        // X X X / O O . / . . .
        let board = Board::new(BoardSize::Three)
            .with_mark(0, Mark::X)
            .with_mark(1, Mark::X)
            .with_mark(2, Mark::X)
            .with_mark(3, Mark::O)
            .with_mark(4, Mark::O);
        let lines = line_set(3);
        let (mark, line) = scan_lines(&board, &lines).expect("row should win");
        assert_eq!(mark, Mark::X);
        assert_eq!(line, &[0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new(BoardSize::Three)
            .with_mark(2, Mark::O)
            .with_mark(4, Mark::O)
            .with_mark(6, Mark::O);
        let lines = line_set(3);
        let (mark, line) = scan_lines(&board, &lines).expect("anti-diagonal should win");
        assert_eq!(mark, Mark::O);
        assert_eq!(line, &[2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = Board::new(BoardSize::Three)
            .with_mark(0, Mark::X)
            .with_mark(1, Mark::X);
        let lines = line_set(3);
        assert_eq!(scan_lines(&board, &lines), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::new(BoardSize::Three)
            .with_mark(0, Mark::X)
            .with_mark(1, Mark::O)
            .with_mark(2, Mark::X);
        let lines = line_set(3);
        assert_eq!(scan_lines(&board, &lines), None);
    }

    #[test]
    fn test_simultaneous_completion_reports_first_in_order() {
        // On 4x4, fill row 1 and column 2 for X except their crossing
        // point at index 6, then mark it. Both lines complete in the
        // same "move"; the row comes first in generation order.
        let mut board = Board::new(BoardSize::Four);
        for i in [4, 5, 7] {
            board = board.with_mark(i, Mark::X);
        }
        for i in [2, 10, 14] {
            board = board.with_mark(i, Mark::X);
        }
        board = board.with_mark(6, Mark::X);

        let lines = line_set(4);
        let (mark, line) = scan_lines(&board, &lines).expect("two lines complete");
        assert_eq!(mark, Mark::X);
        assert_eq!(line, &[4, 5, 6, 7], "row 1 precedes column 2");
    }
}

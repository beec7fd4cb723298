//! Winning-line generation for N-by-N boards.

/// One candidate winning set: N distinct board indices covering a row,
/// a column, or a diagonal.
pub type Line = Vec<usize>;

/// The complete set of winning lines for one board dimension.
///
/// Order is part of the contract: rows first, then columns, then the
/// main diagonal, then the anti-diagonal. The detector reports the
/// first fully-occupied line in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    n: usize,
    lines: Vec<Line>,
}

impl LineSet {
    /// Returns the board dimension these lines were generated for.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Returns the lines in generation order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the number of lines (always `2n + 2`).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the set holds no lines. Never true for a generated set.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Generates all winning lines for an `n`-by-`n` board.
///
/// Pure function of `n`; callers cache the result per dimension. For an
/// `n`-by-`n` board there are exactly `2n + 2` lines: `n` rows, `n`
/// columns, and the two diagonals.
pub fn line_set(n: usize) -> LineSet {
    debug_assert!(n >= 2, "boards smaller than 2x2 have no lines worth generating");

    let mut lines: Vec<Line> = Vec::with_capacity(2 * n + 2);
    for row in 0..n {
        lines.push((0..n).map(|col| row * n + col).collect());
    }
    for col in 0..n {
        lines.push((0..n).map(|row| col + row * n).collect());
    }
    lines.push((0..n).map(|i| i * (n + 1)).collect());
    // Anti-diagonal: i * (n - 1) for i in 1..=n, which starts at the
    // top-right corner (n - 1) and steps down-left.
    lines.push((1..=n).map(|i| i * (n - 1)).collect());

    LineSet { n, lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_line_count_and_index_bounds() {
        for n in 3..=6 {
            let set = line_set(n);
            assert_eq!(set.len(), 2 * n + 2, "2n+2 lines for n={n}");
            for line in set.lines() {
                assert_eq!(line.len(), n);
                let unique: HashSet<_> = line.iter().collect();
                assert_eq!(unique.len(), n, "indices within a line are distinct");
                assert!(line.iter().all(|&i| i < n * n));
            }
        }
    }

    #[test]
    fn test_no_duplicate_lines() {
        for n in 3..=6 {
            let set = line_set(n);
            let unique: HashSet<_> = set.lines().iter().collect();
            assert_eq!(unique.len(), set.len());
        }
    }

    #[test]
    fn test_three_by_three_lines() {
        let set = line_set(3);
        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1, 2],
            vec![3, 4, 5],
            vec![6, 7, 8],
            vec![0, 3, 6],
            vec![1, 4, 7],
            vec![2, 5, 8],
            vec![0, 4, 8],
            vec![2, 4, 6],
        ];
        assert_eq!(set.lines(), expected.as_slice());
    }

    #[test]
    fn test_anti_diagonal_larger_boards() {
        assert_eq!(line_set(4).lines()[9], vec![3, 6, 9, 12]);
        assert_eq!(line_set(5).lines()[11], vec![4, 8, 12, 16, 20]);
        assert_eq!(line_set(6).lines()[13], vec![5, 10, 15, 20, 25, 30]);
    }

    #[test]
    fn test_main_diagonal_larger_boards() {
        assert_eq!(line_set(4).lines()[8], vec![0, 5, 10, 15]);
        assert_eq!(line_set(6).lines()[12], vec![0, 7, 14, 21, 28, 35]);
    }
}

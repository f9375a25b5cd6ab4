//! `grid`: the immutable letter grid being searched.
//!
//! A grid is built once from a flat string, filled row-major: the first
//! `cols` characters form row 0, the next `cols` form row 1, and so on.
//! "Characters" are Unicode scalar values, so `"çà"` is two cells.
//!
//! ```text
//! "abcdefghijkl", 3 x 4   ->   +-------+
//!                              |a|b|c|d|
//!                              +-------+
//!                              |e|f|g|h|
//!                              +-------+
//!                              |i|j|k|l|
//!                              +-------+
//! ```

use std::fmt;

use crate::errors::GridError;

/// A `(row, col)` coordinate inside a grid.
pub type Cell = (usize, usize);

/// Rectangular array of single letters, dimensions fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major letters; `letters.len() == rows * cols`.
    letters: Vec<char>,
}

impl Grid {
    /// Build a `rows x cols` grid from exactly `rows * cols` characters.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyDimensions`] if either dimension is zero.
    /// - [`GridError::TooLarge`] if `rows * cols` overflows `usize`.
    /// - [`GridError::SizeMismatch`] if `input` has the wrong number of characters.
    pub fn new(input: &str, rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }

        let expected = rows.checked_mul(cols).ok_or(GridError::TooLarge { rows, cols })?;
        let letters: Vec<char> = input.chars().collect();
        if letters.len() != expected {
            return Err(GridError::SizeMismatch {
                rows,
                cols,
                expected,
                actual: letters.len(),
            });
        }

        Ok(Self { rows, cols, letters })
    }

    /// Build an `n x n` grid, inferring `n` from the number of characters.
    ///
    /// # Errors
    ///
    /// [`GridError::NotSquare`] unless the character count is a non-zero perfect square.
    pub fn square(input: &str) -> Result<Self, GridError> {
        let len = input.chars().count();
        let side = (1..=len).take_while(|n| n * n <= len).last().unwrap_or(0);
        if side == 0 || side * side != len {
            return Err(GridError::NotSquare { len });
        }
        Self::new(input, side, side)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows * cols`); also the longest possible path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a grid has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn contains(&self, (row, col): Cell) -> bool {
        row < self.rows && col < self.cols
    }

    /// The letter at `cell`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.contains(cell).then(|| self.letters[cell.0 * self.cols + cell.1])
    }

    /// The letter at `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is outside the grid. The search only ever asks for cells
    /// handed out by the adjacency enumerator, which are always in bounds.
    #[must_use]
    pub(crate) fn letter(&self, cell: Cell) -> char {
        debug_assert!(self.contains(cell), "cell {cell:?} outside {}x{} grid", self.rows, self.cols);
        self.letters[cell.0 * self.cols + cell.1]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
    }

    /// One row of letters as a `String`.
    #[must_use]
    pub fn row_string(&self, row: usize) -> String {
        self.letters[row * self.cols..(row + 1) * self.cols].iter().collect()
    }
}

impl fmt::Display for Grid {
    /// Boxed layout, one grid row per text row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = format!("+{}+", "-".repeat(self.cols * 2 - 1));
        writeln!(f, "{rule}")?;
        for row in 0..self.rows {
            let cells: Vec<String> = self.row_string(row).chars().map(String::from).collect();
            writeln!(f, "|{}|", cells.join("|"))?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_row_major() {
        let grid = Grid::new("abcdefghijkl", 3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.get((0, 0)), Some('a'));
        assert_eq!(grid.get((0, 3)), Some('d'));
        assert_eq!(grid.get((1, 0)), Some('e'));
        assert_eq!(grid.get((2, 3)), Some('l'));
        assert_eq!(grid.row_string(1), "efgh");
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new("abcd", 2, 2).unwrap();
        assert_eq!(grid.get((2, 0)), None);
        assert_eq!(grid.get((0, 2)), None);
        assert!(!grid.contains((5, 5)));
    }

    #[test]
    fn test_size_mismatch_too_short_and_too_long() {
        assert_eq!(
            Grid::new("abc", 2, 2),
            Err(GridError::SizeMismatch { rows: 2, cols: 2, expected: 4, actual: 3 })
        );
        assert_eq!(
            Grid::new("abcde", 2, 2),
            Err(GridError::SizeMismatch { rows: 2, cols: 2, expected: 4, actual: 5 })
        );
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(Grid::new("", 0, 3), Err(GridError::EmptyDimensions { rows: 0, cols: 3 }));
        assert_eq!(Grid::new("", 2, 0), Err(GridError::EmptyDimensions { rows: 2, cols: 0 }));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let grid = Grid::new("çàéü", 2, 2).unwrap();
        assert_eq!(grid.get((1, 1)), Some('ü'));
    }

    #[test]
    fn test_overflowing_dimensions_are_rejected() {
        assert_eq!(
            Grid::new("ab", usize::MAX, 2),
            Err(GridError::TooLarge { rows: usize::MAX, cols: 2 })
        );
        let err = Grid::new("", 2, usize::MAX / 2 + 1).unwrap_err();
        assert_eq!(err.code(), "G004");
    }

    #[test]
    fn test_square_infers_side() {
        let grid = Grid::square("abcdefghi").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(Grid::square("a").unwrap().len(), 1);
        assert_eq!(Grid::square("abcde"), Err(GridError::NotSquare { len: 5 }));
        assert_eq!(Grid::square(""), Err(GridError::NotSquare { len: 0 }));
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new("abcdef", 2, 3).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_display_boxed() {
        let grid = Grid::new("abcd", 2, 2).unwrap();
        assert_eq!(grid.to_string(), "+---+\n|a|b|\n+---+\n|c|d|\n+---+\n");
    }
}

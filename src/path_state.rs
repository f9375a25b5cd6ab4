//! Per-branch record of which grid cells the current path has consumed.
//!
//! A `PathState` is a value, not a shared buffer: extending a path produces a
//! new state via [`PathState::with_used`] and leaves the original untouched.
//! Sibling branches therefore never observe each other's cells, and there is
//! no unmark step when a branch returns.
//!
//! ```text
//! path "aband" on            used cells (x = used, - = unused)
//! +-------+                  +-------+
//! |a|b|a|n|                  |x|x|x|x|
//! +-------+                  +-------+
//! |s|d|f|d|                  |-|-|-|x|
//! +-------+                  +-------+
//! |g|h|j|o|                  |-|-|-|-|
//! +-------+                  +-------+
//! ```

use crate::grid::{Cell, Grid};

/// Boolean matrix with the grid's dimensions; `true` marks a consumed cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    rows: usize,
    cols: usize,
    used: Vec<bool>,
}

impl PathState {
    /// A state with no cell used.
    #[must_use]
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            used: vec![false; rows * cols],
        }
    }

    /// The state of a length-1 path starting at `start` on `grid`.
    #[must_use]
    pub fn seeded(grid: &Grid, start: Cell) -> Self {
        let mut state = Self::empty(grid.rows(), grid.cols());
        state.mark(start);
        state
    }

    /// Copy of this state with `cell` additionally marked as used.
    #[must_use]
    pub fn with_used(&self, cell: Cell) -> Self {
        let mut next = self.clone();
        next.mark(cell);
        next
    }

    fn mark(&mut self, cell: Cell) {
        let idx = self.index(cell);
        debug_assert!(!self.used[idx], "cell {cell:?} is already on the path");
        self.used[idx] = true;
    }

    fn index(&self, (row, col): Cell) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} path state",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Whether `cell` is already on the path. Cells outside the grid are never used.
    #[must_use]
    pub fn is_used(&self, (row, col): Cell) -> bool {
        row < self.rows && col < self.cols && self.used[row * self.cols + col]
    }

    /// Number of cells on the path (equals the candidate word's length).
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|&&u| u).count()
    }

    /// Used cells in row-major order.
    pub fn used_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        self.used
            .iter()
            .enumerate()
            .filter(|(_, &u)| u)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_marks_only_start() {
        let grid = Grid::new("abcdefghi", 3, 3).unwrap();
        let state = PathState::seeded(&grid, (1, 2));
        assert_eq!(state.used_count(), 1);
        assert!(state.is_used((1, 2)));
        assert_eq!(state.used_cells().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_with_used_leaves_original_untouched() {
        let grid = Grid::new("abcd", 2, 2).unwrap();
        let parent = PathState::seeded(&grid, (0, 0));
        let before = parent.clone();

        let child = parent.with_used((1, 1));
        let sibling = parent.with_used((0, 1));

        assert_eq!(parent, before);
        assert_eq!(child.used_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
        assert_eq!(sibling.used_cells().collect::<Vec<_>>(), vec![(0, 0), (0, 1)]);
        assert!(!sibling.is_used((1, 1)));
    }

    #[test]
    fn test_out_of_bounds_is_never_used() {
        let state = PathState::empty(2, 2);
        assert!(!state.is_used((2, 0)));
        assert!(!state.is_used((0, 9)));
        assert_eq!(state.used_count(), 0);
    }
}

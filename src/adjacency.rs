//! Adjacency enumeration in a fixed clockwise order.
//!
//! Neighbors of an anchor cell `X` are visited in this order:
//!
//! ```text
//!   -------------
//!   | 8 | 1 | 2 |        1 = N    5 = S
//!   -------------        2 = NE   6 = SW
//!   | 7 | X | 3 |        3 = E    7 = W
//!   -------------        4 = SE   8 = NW
//!   | 6 | 5 | 4 |
//!   -------------
//! ```
//!
//! [`Neighbors`] keeps its cursor between calls, so pulling the next neighbor
//! resumes the rotation where the previous one stopped. Across a whole search
//! node that is at most eight slot checks in total.

use std::iter::FusedIterator;

use crate::grid::Cell;
use crate::path_state::PathState;

/// One of the eight rotational slots around an anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All slots, in enumeration order.
    pub const CLOCKWISE: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// `(d_row, d_col)` relative to the anchor; rows grow southwards.
    #[must_use]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }

    /// The slot after this one, or `None` after `NW`.
    #[must_use]
    pub fn next(self) -> Option<Direction> {
        match self {
            Direction::N => Some(Direction::NE),
            Direction::NE => Some(Direction::E),
            Direction::E => Some(Direction::SE),
            Direction::SE => Some(Direction::S),
            Direction::S => Some(Direction::SW),
            Direction::SW => Some(Direction::W),
            Direction::W => Some(Direction::NW),
            Direction::NW => None,
        }
    }

    /// The cell this slot names around `anchor`, if it lies inside a `rows x cols` grid.
    #[must_use]
    pub fn step(self, (row, col): Cell, rows: usize, cols: usize) -> Option<Cell> {
        let (d_row, d_col) = self.offset();
        let row = row.checked_add_signed(d_row).filter(|&r| r < rows)?;
        let col = col.checked_add_signed(d_col).filter(|&c| c < cols)?;
        Some((row, col))
    }
}

/// Resumable enumerator of the in-bounds, unused neighbors of an anchor cell.
///
/// The cursor starts on the anchor itself; each call to [`Iterator::next`]
/// advances it slot by slot until a usable neighbor turns up, and returns
/// `None` once the rotation has gone past `NW`.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    anchor: Cell,
    /// `None` while the cursor still sits on the anchor.
    cursor: Option<Direction>,
    exhausted: bool,
    path: &'a PathState,
}

impl<'a> Neighbors<'a> {
    #[must_use]
    pub fn new(anchor: Cell, path: &'a PathState) -> Self {
        Self {
            anchor,
            cursor: None,
            exhausted: false,
            path,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    /// The last slot examined, or `None` if enumeration has not started.
    #[must_use]
    pub fn cursor(&self) -> Option<Direction> {
        self.cursor
    }
}

impl Iterator for Neighbors<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.exhausted {
            return None;
        }

        loop {
            let slot = match self.cursor {
                None => Direction::N,
                Some(dir) => match dir.next() {
                    Some(next) => next,
                    None => {
                        self.exhausted = true;
                        return None;
                    }
                },
            };
            self.cursor = Some(slot);

            if let Some(cell) = slot.step(self.anchor, self.path.rows(), self.path.cols()) {
                if !self.path.is_used(cell) {
                    return Some(cell);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match (self.exhausted, self.cursor) {
            (true, _) => 0,
            (false, None) => 8,
            (false, Some(dir)) => Direction::CLOCKWISE.len() - 1 - dir as usize,
        };
        (0, Some(remaining))
    }
}

impl FusedIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn neighbors_of(path: &PathState, anchor: Cell) -> Vec<Cell> {
        Neighbors::new(anchor, path).collect()
    }

    #[test]
    fn test_center_yields_clockwise_from_north() {
        let grid = Grid::new("abcdefghi", 3, 3).unwrap();
        let path = PathState::seeded(&grid, (1, 1));
        assert_eq!(
            neighbors_of(&path, (1, 1)),
            vec![(0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (0, 0)]
        );
    }

    #[test]
    fn test_order_matches_direction_offsets() {
        let grid = Grid::new("abcdefghi", 3, 3).unwrap();
        let path = PathState::seeded(&grid, (1, 1));
        let expected: Vec<Cell> = Direction::CLOCKWISE
            .iter()
            .map(|d| d.step((1, 1), 3, 3).unwrap())
            .collect();
        assert_eq!(neighbors_of(&path, (1, 1)), expected);
    }

    #[test]
    fn test_corners_skip_out_of_bounds() {
        let grid = Grid::new("abcdefghi", 3, 3).unwrap();

        let top_left = PathState::seeded(&grid, (0, 0));
        assert_eq!(neighbors_of(&top_left, (0, 0)), vec![(0, 1), (1, 1), (1, 0)]);

        let bottom_right = PathState::seeded(&grid, (2, 2));
        assert_eq!(neighbors_of(&bottom_right, (2, 2)), vec![(1, 2), (2, 1), (1, 1)]);

        let top_right = PathState::seeded(&grid, (0, 2));
        assert_eq!(neighbors_of(&top_right, (0, 2)), vec![(1, 2), (1, 1), (0, 1)]);
    }

    #[test]
    fn test_edge_of_rectangular_grid() {
        let grid = Grid::new("abcdefgh", 2, 4).unwrap();
        let path = PathState::seeded(&grid, (1, 3));
        assert_eq!(neighbors_of(&path, (1, 3)), vec![(0, 3), (1, 2), (0, 2)]);
    }

    #[test]
    fn test_used_cells_are_skipped() {
        let grid = Grid::new("abcdefghi", 3, 3).unwrap();
        let path = PathState::seeded(&grid, (1, 1))
            .with_used((0, 1))
            .with_used((2, 2))
            .with_used((0, 0));
        assert_eq!(
            neighbors_of(&path, (1, 1)),
            vec![(0, 2), (1, 2), (2, 1), (2, 0), (1, 0)]
        );
    }

    #[test]
    fn test_single_cell_grid_is_immediately_exhausted() {
        let grid = Grid::new("a", 1, 1).unwrap();
        let path = PathState::seeded(&grid, (0, 0));
        let mut it = Neighbors::new((0, 0), &path);
        assert_eq!(it.next(), None);
        assert_eq!(it.cursor(), Some(Direction::NW));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_cursor_resumes_between_calls() {
        let grid = Grid::new("abcdefghi", 3, 3).unwrap();
        let path = PathState::seeded(&grid, (1, 1)).with_used((0, 2));
        let mut it = Neighbors::new((1, 1), &path);

        assert_eq!(it.cursor(), None);
        assert_eq!(it.next(), Some((0, 1)));
        assert_eq!(it.cursor(), Some(Direction::N));
        // NE is used, so the scan moves on to E
        assert_eq!(it.next(), Some((1, 2)));
        assert_eq!(it.cursor(), Some(Direction::E));
        assert_eq!(it.by_ref().count(), 5);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_last_slot_nw_is_still_returned() {
        let grid = Grid::new("abcd", 2, 2).unwrap();
        // Anchor bottom-right: only N, W and NW are in bounds.
        let path = PathState::seeded(&grid, (1, 1)).with_used((0, 1)).with_used((1, 0));
        let mut it = Neighbors::new((1, 1), &path);
        assert_eq!(it.next(), Some((0, 0)));
        assert_eq!(it.cursor(), Some(Direction::NW));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_all_used_yields_nothing() {
        let grid = Grid::new("abcd", 2, 2).unwrap();
        let path = PathState::seeded(&grid, (0, 0))
            .with_used((0, 1))
            .with_used((1, 0))
            .with_used((1, 1));
        assert!(neighbors_of(&path, (0, 0)).is_empty());
    }

    #[test]
    fn test_step_never_wraps() {
        assert_eq!(Direction::N.step((0, 0), 3, 3), None);
        assert_eq!(Direction::W.step((2, 0), 3, 3), None);
        assert_eq!(Direction::E.step((0, 2), 3, 3), None);
        assert_eq!(Direction::S.step((2, 1), 3, 3), None);
        assert_eq!(Direction::SE.step((1, 1), 3, 3), Some((2, 2)));
    }
}

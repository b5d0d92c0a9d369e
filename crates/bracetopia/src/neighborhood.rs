//! Relative-offset view of the cells around one grid position.

use crate::cell::Cell;
use crate::Grid;

/// Offsets of the 8-connected neighborhood, row-major.
pub const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reads relative to `(row, col)`. Positions outside the grid are absent;
/// the neighborhood is clipped, never wrapped.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<'a> {
    pub grid: &'a Grid,
    pub row: usize,
    pub col: usize,
}

impl<'a> Neighborhood<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid, row: usize, col: usize) -> Self {
        Self { grid, row, col }
    }

    #[must_use]
    pub fn get(&self, dr: isize, dc: isize) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        self.grid.get(row, col)
    }

    /// The in-bounds neighbors, excluding the center cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + 'a {
        let here = *self;
        OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| here.get(dr, dc))
    }
}

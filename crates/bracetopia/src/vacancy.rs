//! Relocation target search.
//!
//! Only original vacancies are eligible. The scan cursor belongs to a single
//! cycle: it starts at the top-left and follows each placement forward, so
//! successive movers in one pass fill vacancies in row-major order instead of
//! all competing for the first one.

use crate::Grid;

/// Row-major scan position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Scan from `cursor` (inclusive) with wraparound for the next original
/// vacancy. On success the cursor moves onto the hit. Returns `None`, leaving
/// the cursor untouched, after one full lap without a hit.
pub fn find_next_vacant(grid: &Grid, cursor: &mut Cursor) -> Option<(usize, usize)> {
    let n = grid.dimension();
    let total = n * n;
    if total == 0 {
        return None;
    }
    let start = (cursor.row * n + cursor.col) % total;
    let cells = grid.cells();

    let idx = (0..total)
        .map(|step| (start + step) % total)
        .find(|&i| !cells[i].is_occupied() && cells[i].originally_vacant)?;

    *cursor = Cursor::new(idx / n, idx % n);
    Some((cursor.row, cursor.col))
}

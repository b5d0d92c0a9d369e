//! Per-agent happiness: the share of occupied neighbors with the same
//! preference, and whether that share clears the satisfaction threshold.

use crate::neighborhood::Neighborhood;
use crate::Grid;

/// Neighbor counts for one cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Tally {
    pub occupied: u32,
    pub same: u32,
}

impl Tally {
    /// Isolated agents count as fully happy.
    #[must_use]
    pub fn happiness(self) -> f32 {
        if self.occupied == 0 {
            100.0
        } else {
            100.0 * self.same as f32 / self.occupied as f32
        }
    }
}

/// Count occupied and like-minded neighbors of `(row, col)`.
#[must_use]
pub fn tally(grid: &Grid, row: usize, col: usize) -> Tally {
    let Some(center) = grid.get(row, col) else {
        return Tally::default();
    };
    Neighborhood::new(grid, row, col)
        .cells()
        .filter(|c| c.is_occupied())
        .fold(Tally::default(), |mut t, c| {
            t.occupied += 1;
            if c.preference == center.preference {
                t.same += 1;
            }
            t
        })
}

#[must_use]
pub fn is_satisfied(happiness: f32, threshold: u32) -> bool {
    happiness >= threshold as f32
}

/// Recompute `happiness` and `satisfied` for the cell at `(row, col)` and
/// return them. Only that cell is written.
pub fn evaluate(grid: &mut Grid, row: usize, col: usize, threshold: u32) -> (f32, bool) {
    let happiness = tally(grid, row, col).happiness();
    let satisfied = is_satisfied(happiness, threshold);
    if let Some(cell) = grid.get_mut(row, col) {
        cell.happiness = happiness;
        cell.satisfied = satisfied;
    }
    (happiness, satisfied)
}

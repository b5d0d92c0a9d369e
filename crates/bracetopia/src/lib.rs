//! Brace-style segregation simulation engine.
//!
//! Agents preferring endline (`e`) or newline (`n`) brace placement live on a
//! square grid. Each cycle every agent checks what share of its occupied
//! neighbors shares its preference; agents below the threshold move into the
//! next vacancy found by a row-major scan.

pub mod cell;
pub mod config;
pub mod error;
pub mod happiness;
pub mod neighborhood;
pub mod report;
pub mod setup;
pub mod universe;
pub mod vacancy;


use std::fmt;
use std::str::FromStr;

use cell::{Cell, Preference};
use error::{Result, SimError};
use vacancy::Cursor;

/// Square grid of cells stored row-major. Out-of-bounds reads return `None`,
/// writes are no-ops.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-vacant grid. Every cell starts out as an original vacancy.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Cell::vacant(); dimension * dimension],
        }
    }

    /// Wrap an already populated row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CellCount`] if `cells` does not hold exactly
    /// `dimension * dimension` entries.
    pub fn from_cells(dimension: usize, cells: Vec<Cell>) -> Result<Self> {
        let expected = dimension * dimension;
        if cells.len() != expected {
            return Err(SimError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { dimension, cells })
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dimension.max(1))
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.dimension && col < self.dimension
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col)
            .then(|| self.cells[row * self.dimension + col])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.in_bounds(row, col) {
            Some(&mut self.cells[row * self.dimension + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.get_mut(row, col) {
            *slot = cell;
        }
    }

    /// Exchange two complete cell records. No-op if either coordinate is
    /// out of bounds.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        if self.in_bounds(a.0, a.1) && self.in_bounds(b.0, b.1) {
            self.cells
                .swap(a.0 * self.dimension + a.1, b.0 * self.dimension + b.1);
        }
    }

    #[must_use]
    pub fn vacant_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_occupied()).count()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.vacant_count()
    }

    /// Advance the simulation by one cycle and return how many agents moved.
    ///
    /// Scans row-major with a fresh cursor. Each cell is updated against the
    /// current grid, so agents relocated earlier in the pass are already
    /// visible to later ones.
    pub fn run_cycle(&mut self, threshold: u32) -> usize {
        let mut cursor = Cursor::default();
        let mut moves = 0;
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                if self.update_cell(row, col, threshold, &mut cursor) {
                    moves += 1;
                }
            }
        }
        tracing::debug!(moves, dimension = self.dimension, "cycle complete");
        moves
    }

    /// One step of a cycle. Vacancies get zero happiness. An occupied cell
    /// is evaluated and, if dissatisfied, swapped with the next original
    /// vacancy at or after `cursor`. Returns whether the agent moved; with
    /// no eligible vacancy it stays where it is.
    pub fn update_cell(
        &mut self,
        row: usize,
        col: usize,
        threshold: u32,
        cursor: &mut Cursor,
    ) -> bool {
        let Some(cell) = self.get_mut(row, col) else {
            return false;
        };
        if !cell.is_occupied() {
            cell.happiness = 0.0;
            return false;
        }
        cell.originally_vacant = false;

        let (_, satisfied) = happiness::evaluate(self, row, col, threshold);
        if satisfied {
            return false;
        }
        let Some(dest) = vacancy::find_next_vacant(self, cursor) else {
            tracing::debug!(row, col, "no vacancy available, agent stays");
            return false;
        };
        self.swap((row, col), dest);
        if let Some(moved) = self.get_mut(dest.0, dest.1) {
            moved.originally_vacant = false;
        }
        tracing::trace!(from = ?(row, col), to = ?dest, "agent relocated");
        true
    }

    /// Re-evaluate every occupied cell in place without relocating anyone.
    pub fn refresh(&mut self, threshold: u32) {
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                let idx = row * self.dimension + col;
                if self.cells[idx].is_occupied() {
                    happiness::evaluate(self, row, col, threshold);
                } else {
                    self.cells[idx].happiness = 0.0;
                }
            }
        }
    }

    /// Mean happiness over `occupied_count` agents; 0.0 when there are none.
    #[must_use]
    pub fn average_happiness(&self, occupied_count: usize) -> f32 {
        if occupied_count == 0 {
            return 0.0;
        }
        let total: f32 = self.cells.iter().map(|c| c.happiness).sum();
        total / occupied_count as f32
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) form: one line per row, one symbol
/// per cell separated by whitespace. Vacancies parse as original vacancies.
impl FromStr for Grid {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<&str>> = s
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        let dimension = rows.len();

        let mut cells = Vec::with_capacity(dimension * dimension);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(SimError::NotSquare {
                    row: r,
                    expected: dimension,
                    found: row.len(),
                });
            }
            for token in row {
                let mut chars = token.chars();
                let preference = match (chars.next(), chars.next()) {
                    (Some(c), None) => Preference::from_symbol(c),
                    _ => None,
                }
                .ok_or_else(|| SimError::UnknownSymbol((*token).to_string()))?;
                cells.push(match preference {
                    Preference::Vacant => Cell::vacant(),
                    occupied => Cell::new(occupied),
                });
            }
        }
        Self::from_cells(dimension, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_preference() -> impl Strategy<Value = Preference> {
        prop_oneof![
            Just(Preference::Vacant),
            Just(Preference::Endline),
            Just(Preference::Newline),
        ]
    }

    /// Grid of the given size with random preferences; vacancies are original.
    fn arb_grid(dimension: usize) -> impl Strategy<Value = Grid> {
        proptest::collection::vec(arb_preference(), dimension * dimension).prop_map(
            move |prefs| {
                let cells = prefs
                    .into_iter()
                    .map(|p| match p {
                        Preference::Vacant => Cell::vacant(),
                        occupied => Cell::new(occupied),
                    })
                    .collect();
                Grid::from_cells(dimension, cells).unwrap()
            },
        )
    }

    fn preferences(grid: &Grid) -> Vec<Preference> {
        grid.cells().iter().map(|c| c.preference).collect()
    }

    #[test]
    fn grid_new_initializes_all_vacant() {
        let grid = Grid::new(15);
        assert_eq!(grid.dimension(), 15);
        assert_eq!(grid.cells().len(), 225);
        assert_eq!(grid.vacant_count(), 225);
        assert!(grid.cells().iter().all(|c| c.originally_vacant));
    }

    #[test]
    fn grid_get_set_in_bounds() {
        let mut grid = Grid::new(5);
        let e = Cell::new(Preference::Endline);
        grid.set(2, 3, e);
        assert_eq!(grid.get(2, 3), Some(e));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn grid_out_of_bounds_is_absent_and_set_is_noop() {
        let mut grid = Grid::new(5);
        let before = grid.clone();
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 5), None);
        grid.set(5, 0, Cell::new(Preference::Newline));
        grid.set(0, 7, Cell::new(Preference::Newline));
        grid.swap((0, 0), (9, 9));
        assert_eq!(grid, before);
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        let err = Grid::from_cells(3, vec![Cell::vacant(); 8]).unwrap_err();
        assert_eq!(err, SimError::CellCount { expected: 9, found: 8 });
    }

    #[test]
    fn swap_moves_whole_record() {
        let mut grid: Grid = "e .\n. n".parse().unwrap();
        grid.get_mut(0, 0).unwrap().happiness = 42.0;
        grid.swap((0, 0), (1, 0));
        let moved = grid.get(1, 0).unwrap();
        assert_eq!(moved.preference, Preference::Endline);
        assert_eq!(moved.happiness, 42.0);
        assert!(!moved.originally_vacant);
        let left = grid.get(0, 0).unwrap();
        assert_eq!(left.preference, Preference::Vacant);
        assert!(left.originally_vacant);
    }

    #[test]
    fn parse_and_display_agree() {
        let text = "e n .\n. e n\nn . e\n";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.dimension(), 3);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = "e n\ne".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            SimError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        let err = "e x\nn .".parse::<Grid>().unwrap_err();
        assert_eq!(err, SimError::UnknownSymbol("x".into()));
    }

    #[test]
    fn vacant_cells_report_zero_happiness_after_cycle() {
        let mut grid: Grid = "e e\n. .".parse().unwrap();
        grid.get_mut(1, 0).unwrap().happiness = 77.0;
        assert_eq!(grid.run_cycle(50), 0);
        assert_eq!(grid.get(1, 0).unwrap().happiness, 0.0);
    }

    #[test]
    fn run_cycle_clears_flag_on_occupied_cells() {
        let mut grid = Grid::new(3);
        let mut e = Cell::new(Preference::Endline);
        e.originally_vacant = true;
        grid.set(1, 1, e);
        grid.run_cycle(50);
        assert!(!grid.get(1, 1).unwrap().originally_vacant);
    }

    #[test]
    fn no_vacancy_means_no_moves() {
        let mut grid: Grid = "e n\nn e".parse().unwrap();
        let before = preferences(&grid);
        assert_eq!(grid.run_cycle(99), 0);
        assert_eq!(preferences(&grid), before);
        assert!(grid.cells().iter().all(|c| !c.satisfied));
    }

    #[test]
    fn relocated_agent_is_reevaluated_later_in_same_pass() {
        // The `n` is unhappy everywhere in the top row, so it is met again at
        // each cell it moves into and finally wraps back to (0,0).
        let mut grid: Grid = "n . .\ne e e\ne e e".parse().unwrap();
        assert_eq!(grid.run_cycle(51), 3);
        assert_eq!(grid.get(0, 0).unwrap().preference, Preference::Newline);
        assert_eq!(grid.vacant_count(), 2);
    }

    #[test]
    fn average_happiness_divides_by_occupied() {
        let mut grid: Grid = "e e\n. .".parse().unwrap();
        grid.run_cycle(50);
        assert_eq!(grid.average_happiness(2), 100.0);
        assert_eq!(grid.average_happiness(4), 50.0);
    }

    #[test]
    fn average_happiness_with_no_agents_is_zero() {
        let grid = Grid::new(5);
        assert_eq!(grid.average_happiness(0), 0.0);
    }

    #[test]
    fn refresh_evaluates_without_moving() {
        let mut grid: Grid = "e n .\nn n .\n. . .".parse().unwrap();
        let before = preferences(&grid);
        grid.refresh(99);
        assert_eq!(preferences(&grid), before);
        assert!(!grid.get(0, 0).unwrap().satisfied);
        assert_eq!(grid.get(0, 0).unwrap().happiness, 0.0);
        let n = grid.get(1, 1).unwrap();
        assert!((n.happiness - 200.0 / 3.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_vacant_count_is_conserved(
            grid in arb_grid(8),
            threshold in 1u32..100,
            cycles in 1usize..6,
        ) {
            let mut grid = grid;
            let vacant = grid.vacant_count();
            for _ in 0..cycles {
                grid.run_cycle(threshold);
                prop_assert_eq!(grid.vacant_count(), vacant);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_run_cycle_is_deterministic(grid in arb_grid(7), threshold in 1u32..100) {
            let mut a = grid.clone();
            let mut b = grid;
            let moves_a = a.run_cycle(threshold);
            let moves_b = b.run_cycle(threshold);
            prop_assert_eq!(moves_a, moves_b);
            prop_assert_eq!(a, b);
        }
    }

    proptest! {
        #[test]
        fn prop_zero_moves_is_a_fixed_point(grid in arb_grid(6), threshold in 1u32..100) {
            let mut grid = grid;
            for _ in 0..50 {
                if grid.run_cycle(threshold) == 0 {
                    let before = grid.clone();
                    prop_assert_eq!(grid.run_cycle(threshold), 0);
                    prop_assert_eq!(grid, before);
                    break;
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_happiness_stays_in_range(grid in arb_grid(8), threshold in 1u32..100) {
            let mut grid = grid;
            grid.run_cycle(threshold);
            for cell in grid.cells() {
                prop_assert!((0.0..=100.0).contains(&cell.happiness));
                if !cell.is_occupied() {
                    prop_assert_eq!(cell.happiness, 0.0);
                }
            }
            let avg = grid.average_happiness(grid.occupied_count());
            prop_assert!((0.0..=100.0 + 1e-3).contains(&avg));
        }
    }
}

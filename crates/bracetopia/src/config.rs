//! Simulation parameters and the population sizes they imply.

use crate::error::{Result, SimError};

pub const DIMENSION_RANGE: std::ops::RangeInclusive<usize> = 5..=39;
pub const PERCENT_RANGE: std::ops::RangeInclusive<u32> = 1..=99;

/// Parameters for one run. Build with struct update syntax over
/// [`Config::default`] and call [`Config::validate`] before populating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Width and height of the square grid.
    pub dimension: usize,
    /// Percent happiness an agent needs to stay put.
    pub threshold: u32,
    /// Percent of all cells left vacant.
    pub vacancy_rate: u32,
    /// Percent of agents preferring endline braces.
    pub endline_percent: u32,
    /// Seed for the initial shuffle.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimension: 15,
            threshold: 50,
            vacancy_rate: 20,
            endline_percent: 60,
            seed: 41,
        }
    }
}

/// Cell counts by kind. Always sums to `dimension * dimension`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Population {
    pub vacant: usize,
    pub endline: usize,
    pub newline: usize,
}

impl Population {
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.endline + self.newline
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.vacant + self.occupied()
    }
}

fn percent_of(percent: u32, total: usize) -> usize {
    percent as usize * total / 100
}

impl Config {
    /// # Errors
    ///
    /// Returns the first out-of-range parameter, checked in field order.
    pub fn validate(&self) -> Result<()> {
        if !DIMENSION_RANGE.contains(&self.dimension) {
            return Err(SimError::Dimension(self.dimension));
        }
        if !PERCENT_RANGE.contains(&self.threshold) {
            return Err(SimError::Threshold(self.threshold));
        }
        if !PERCENT_RANGE.contains(&self.vacancy_rate) {
            return Err(SimError::VacancyRate(self.vacancy_rate));
        }
        if !PERCENT_RANGE.contains(&self.endline_percent) {
            return Err(SimError::EndlinePercent(self.endline_percent));
        }
        Ok(())
    }

    /// Integer split of the grid: vacancies first, then endline agents as a
    /// share of what is left, newline agents take the remainder.
    #[must_use]
    pub fn population(&self) -> Population {
        let total = self.dimension * self.dimension;
        let vacant = percent_of(self.vacancy_rate, total);
        let occupied = total - vacant;
        let endline = percent_of(self.endline_percent, occupied);
        Population {
            vacant,
            endline,
            newline: occupied - endline,
        }
    }
}

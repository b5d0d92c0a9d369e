//! Per-cycle status block printed under the grid.

use std::fmt;

use crate::config::Config;

#[derive(Debug, Clone, PartialEq)]
pub struct Report<'a> {
    pub config: &'a Config,
    pub cycle: u64,
    pub moves: usize,
    pub happiness: f32,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cycle: {}", self.cycle)?;
        writeln!(f, "Moves this cycle: {}", self.moves)?;
        writeln!(f, "Overall \"happiness\": {:.2}", self.happiness)?;
        writeln!(
            f,
            "Size: {}, Threshold: {}%, Vacancy rate: {}%, Endline percent: {}%",
            self.config.dimension,
            self.config.threshold,
            self.config.vacancy_rate,
            self.config.endline_percent
        )
    }
}

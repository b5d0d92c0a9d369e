//! Error type shared by configuration, setup and grid construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("dimension (N) must be a value in [5..39], got {0}")]
    Dimension(usize),

    #[error("preference strength (N) must be a value in [1..99], got {0}")]
    Threshold(u32),

    #[error("vacancy rate (N) must be a value in [1..99], got {0}")]
    VacancyRate(u32),

    #[error("endline proportion (N) must be a value in [1..99], got {0}")]
    EndlinePercent(u32),

    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol {0:?}")]
    UnknownSymbol(String),
}

pub type Result<T> = std::result::Result<T, SimError>;

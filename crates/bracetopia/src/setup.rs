//! Initial population: lay out vacancies and agents, then shuffle.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cell::{Cell, Preference};
use crate::config::Config;
use crate::error::Result;
use crate::Grid;

/// Build a shuffled grid for `config` using `rng`.
///
/// Vacancies are flagged as original vacancies and report zero happiness;
/// agents start unevaluated.
///
/// # Errors
///
/// Returns the validation error if `config` is out of range.
pub fn populate<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Grid> {
    config.validate()?;
    let pop = config.population();

    let mut cells = Vec::with_capacity(pop.total());
    cells.extend(std::iter::repeat(Cell::vacant()).take(pop.vacant));
    cells.extend(std::iter::repeat(Cell::new(Preference::Endline)).take(pop.endline));
    cells.extend(std::iter::repeat(Cell::new(Preference::Newline)).take(pop.newline));
    cells.shuffle(rng);

    tracing::info!(
        dimension = config.dimension,
        vacant = pop.vacant,
        endline = pop.endline,
        newline = pop.newline,
        "grid populated"
    );
    Grid::from_cells(config.dimension, cells)
}

/// [`populate`] with a `ChaCha8Rng` seeded from `config.seed`, so the same
/// config always produces the same grid.
///
/// # Errors
///
/// Returns the validation error if `config` is out of range.
pub fn populate_seeded(config: &Config) -> Result<Grid> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    populate(config, &mut rng)
}

//! WASM entry point: owns a grid and exposes one byte per cell to the
//! browser renderer.

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::setup;
use crate::Grid;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    threshold: u32,
    occupied: usize,
    cycle: u32,
    happiness: f32,
    /// `Preference` discriminants, row-major, resynced after every tick.
    preferences: Vec<u8>,
}

impl Universe {
    /// Populate and evaluate a grid for `config` without moving anyone.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is out of range.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut grid = setup::populate_seeded(config)?;
        grid.refresh(config.threshold);
        let occupied = grid.occupied_count();
        let mut universe = Self {
            grid,
            threshold: config.threshold,
            occupied,
            cycle: 0,
            happiness: 0.0,
            preferences: Vec::new(),
        };
        universe.sync();
        Ok(universe)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn sync(&mut self) {
        self.preferences.clear();
        self.preferences
            .extend(self.grid.cells().iter().map(|c| c.preference as u8));
        self.happiness = self.grid.average_happiness(self.occupied);
    }
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    ///
    /// Throws if any parameter is out of range.
    #[wasm_bindgen(constructor)]
    pub fn new(
        dimension: u32,
        threshold: u32,
        vacancy_rate: u32,
        endline_percent: u32,
        seed: u64,
    ) -> std::result::Result<Universe, JsError> {
        let config = Config {
            dimension: dimension as usize,
            threshold,
            vacancy_rate,
            endline_percent,
            seed,
        };
        Ok(Self::from_config(&config)?)
    }

    /// Run one cycle and return the number of moves.
    pub fn tick(&mut self) -> u32 {
        let moves = self.grid.run_cycle(self.threshold);
        self.cycle += 1;
        self.sync();
        moves as u32
    }

    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.grid.dimension() as u32
    }

    #[must_use]
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    #[must_use]
    pub fn happiness(&self) -> f32 {
        self.happiness
    }

    /// Pointer into linear memory for zero-copy reads from JS.
    #[must_use]
    pub fn preferences_ptr(&self) -> *const u8 {
        self.preferences.as_ptr()
    }

    #[must_use]
    pub fn preferences(&self) -> Vec<u8> {
        self.preferences.clone()
    }
}

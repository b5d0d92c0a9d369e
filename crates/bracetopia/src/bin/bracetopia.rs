//! Terminal front end: populate a grid, then print one frame per cycle.

use std::thread;
use std::time::Duration;

use bracetopia::config::Config;
use bracetopia::error::Result;
use bracetopia::report::Report;
use bracetopia::{setup, Grid};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_DELAY_MICROS: u64 = 900_000;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Simulate endline (`e`) and newline (`n`) brace fans moving until they are
/// happy with their neighbors.
#[derive(Parser, Debug)]
#[command(name = "bracetopia", version, about)]
struct Args {
    /// Delay between cycles, in microseconds (values below 1 use the default)
    #[arg(short = 't', long = "delay", default_value_t = DEFAULT_DELAY_MICROS)]
    delay: u64,

    /// Print this many cycles after the initial grid and exit; omit to run forever
    #[arg(short = 'c', long = "cycles")]
    cycles: Option<u64>,

    /// Width and height of the grid [5..39]
    #[arg(short = 'd', long = "dimension", default_value_t = 15)]
    dimension: usize,

    /// Strength of preference: percent of like neighbors needed [1..99]
    #[arg(short = 's', long = "strength", default_value_t = 50)]
    strength: u32,

    /// Percent of cells left vacant [1..99]
    #[arg(short = 'v', long = "vacancy", default_value_t = 20)]
    vacancy: u32,

    /// Percent of agents preferring endline braces [1..99]
    #[arg(short = 'e', long = "endline", default_value_t = 60)]
    endline: u32,

    /// Seed for the initial shuffle
    #[arg(long, default_value_t = 41)]
    seed: u64,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            dimension: self.dimension,
            threshold: self.strength,
            vacancy_rate: self.vacancy,
            endline_percent: self.endline,
            seed: self.seed,
        }
    }

    fn delay(&self) -> Duration {
        if self.delay < 1 {
            Duration::from_micros(DEFAULT_DELAY_MICROS)
        } else {
            Duration::from_micros(self.delay)
        }
    }
}

fn print_frame(grid: &Grid, report: &Report<'_>, clear: bool) {
    if clear {
        print!("{CLEAR_SCREEN}");
    }
    print!("{grid}{report}");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bracetopia=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();
    let delay = args.delay();

    let mut grid = setup::populate_seeded(&config)?;
    let occupied = grid.occupied_count();
    grid.refresh(config.threshold);

    let bounded = args.cycles.is_some();
    let mut cycle = 0;
    let mut moves = 0;
    loop {
        let report = Report {
            config: &config,
            cycle,
            moves,
            happiness: grid.average_happiness(occupied),
        };
        print_frame(&grid, &report, !bounded);

        if args.cycles.is_some_and(|limit| cycle >= limit) {
            break;
        }
        if !bounded {
            thread::sleep(delay);
        }
        moves = grid.run_cycle(config.threshold);
        cycle += 1;
    }

    tracing::info!(cycles = cycle, "simulation finished");
    Ok(())
}

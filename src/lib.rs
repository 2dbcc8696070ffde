//! Conway's Game of Life rendered as an RGBA raster
//!
//! The engine ([`game_of_life`]) advances a bounded board with the B3/S23
//! rule, [`render`] paints boards into pixel buffers and hands them to a
//! display sink, and [`driver`] paces both against a frame clock.

pub mod config;
pub mod driver;
pub mod game_of_life;
pub mod render;
pub mod utils;

pub use config::Settings;
pub use driver::{Driver, RunSummary};
pub use game_of_life::{Board, BoardError, Cell, Simulator};
pub use render::Renderer;

use anyhow::{Context, Result};
use config::BoardConfig;
use driver::SleepClock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::AnySink;

/// Build the initial board described by `config`
pub fn initial_board(config: &BoardConfig) -> Result<Board, BoardError> {
    match (config.seed_random, config.seed) {
        (true, Some(seed)) => {
            Board::random_with(config.width, config.height, &mut StdRng::seed_from_u64(seed))
        }
        (seed_random, _) => Board::create(config.width, config.height, seed_random),
    }
}

/// Main entry point: run a simulation in real time with the configured sink
pub fn run_simulation(settings: &Settings) -> Result<RunSummary> {
    settings.validate()?;

    let board = initial_board(&settings.board).context("Failed to create initial board")?;
    let sink = AnySink::new(settings.output.sink, &settings.output.output_directory)?;
    let clock = SleepClock::new(settings.timing.frame_interval());

    let mut driver = Driver::new(board, settings.timing.tick_interval(), clock, sink);
    driver.run(&settings.run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_seeded() {
        let config = BoardConfig {
            width: 12,
            height: 8,
            seed_random: true,
            seed: Some(99),
        };
        assert_eq!(initial_board(&config).unwrap(), initial_board(&config).unwrap());
    }

    #[test]
    fn test_initial_board_empty_ignores_seed() {
        let config = BoardConfig {
            width: 5,
            height: 5,
            seed_random: false,
            seed: Some(99),
        };
        assert!(initial_board(&config).unwrap().is_empty());
    }

    #[test]
    fn test_initial_board_invalid() {
        let config = BoardConfig {
            width: 0,
            height: 5,
            seed_random: true,
            seed: None,
        };
        assert!(matches!(
            initial_board(&config),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }
}

//! Statistics collected over a simulation run

use serde::{Deserialize, Serialize};

/// Outcome of a driver run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    /// Frames painted and presented
    pub frames: u64,
    /// Generations advanced past the initial board
    pub generations: u64,
    /// Timestamp of the last frame
    pub elapsed_ms: u64,
    pub initial_population: usize,
    pub final_population: usize,
    /// Largest population seen in any generation
    pub peak_population: usize,
    /// Living cells for the most recent generations, oldest first
    pub population_history: Vec<usize>,
}

impl RunSummary {
    /// Share of the board alive at the end of the run, 0.0 to 1.0
    pub fn final_density(&self) -> f64 {
        self.final_population as f64 / (self.width * self.height) as f64
    }
}

//! Real-time driver: frame pacing and the simulation loop

pub mod clock;
pub mod runner;
pub mod summary;

pub use clock::{FrameClock, ScriptedClock, SleepClock};
pub use runner::Driver;
pub use summary::RunSummary;

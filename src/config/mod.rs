//! Configuration management for the simulation

pub mod settings;

pub use settings::{
    BoardConfig, CliOverrides, OutputConfig, RunConfig, Settings, SinkKind, SummaryFormat,
    TimingConfig,
};

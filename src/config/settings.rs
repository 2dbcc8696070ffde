//! Configuration settings for the simulation

use crate::game_of_life::Board;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_WIDTH: usize = 800;
pub const DEFAULT_HEIGHT: usize = 600;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub timing: TimingConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    /// Seed the initial board randomly; otherwise it starts all dead
    pub seed_random: bool,
    /// Fixed rng seed for reproducible boards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub tick_interval_ms: u64,
    pub frame_interval_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub max_frames: Option<u64>,
    #[serde(default)]
    pub max_generations: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub sink: SinkKind,
    pub output_directory: PathBuf,
    pub summary_format: SummaryFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    Headless,
    Terminal,
    Ppm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
                seed_random: true,
                seed: None,
            },
            timing: TimingConfig {
                tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
                frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            },
            run: RunConfig::default(),
            output: OutputConfig {
                sink: SinkKind::Terminal,
                output_directory: PathBuf::from("output/frames"),
                summary_format: SummaryFormat::Text,
            },
        }
    }
}

impl TimingConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        Board::check_dimensions(self.board.width, self.board.height)
            .context("Invalid board configuration")?;

        if self.timing.tick_interval_ms == 0 {
            anyhow::bail!("Tick interval must be positive");
        }

        if self.timing.frame_interval_ms == 0 {
            anyhow::bail!("Frame interval must be positive");
        }

        // only the terminal is watched live; other sinks need an end
        if self.output.sink != SinkKind::Terminal
            && self.run.max_frames.is_none()
            && self.run.max_generations.is_none()
        {
            anyhow::bail!(
                "Sink {:?} requires a run limit (max_frames or max_generations)",
                self.output.sink
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.board.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.board.height = height;
        }
        if cli_overrides.empty {
            self.board.seed_random = false;
        }
        if let Some(seed) = cli_overrides.seed {
            self.board.seed = Some(seed);
        }
        if let Some(tick_ms) = cli_overrides.tick_ms {
            self.timing.tick_interval_ms = tick_ms;
        }
        if let Some(frame_ms) = cli_overrides.frame_ms {
            self.timing.frame_interval_ms = frame_ms;
        }
        if let Some(frames) = cli_overrides.frames {
            self.run.max_frames = Some(frames);
        }
        if let Some(generations) = cli_overrides.generations {
            self.run.max_generations = Some(generations);
        }
        if let Some(sink) = cli_overrides.sink {
            self.output.sink = sink;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if cli_overrides.json {
            self.output.summary_format = SummaryFormat::Json;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub empty: bool,
    pub seed: Option<u64>,
    pub tick_ms: Option<u64>,
    pub frame_ms: Option<u64>,
    pub frames: Option<u64>,
    pub generations: Option<u64>,
    pub sink: Option<SinkKind>,
    pub output_dir: Option<PathBuf>,
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.board.width, 800);
        assert_eq!(settings.board.height, 600);
        assert_eq!(settings.timing.tick_interval(), Duration::from_secs(1));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/life.yaml");

        let mut settings = Settings::default();
        settings.board.seed = Some(42);
        settings.run.max_generations = Some(10);
        settings.output.sink = SinkKind::Ppm;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = "
board:
  width: 20
  height: 10
  seed_random: false
timing:
  tick_interval_ms: 250
  frame_interval_ms: 10
run: {}
output:
  sink: terminal
  output_directory: out
  summary_format: json
";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.board.seed, None);
        assert_eq!(settings.run, RunConfig::default());
        assert_eq!(settings.output.summary_format, SummaryFormat::Json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let mut settings = Settings::default();
        settings.board.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.board.width = usize::MAX;
        settings.board.height = 2;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.timing.tick_interval_ms = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.output.sink = SinkKind::Headless;
        assert!(settings.validate().is_err());
        settings.run.max_frames = Some(5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            width: Some(32),
            empty: true,
            generations: Some(3),
            sink: Some(SinkKind::Headless),
            json: true,
            ..Default::default()
        });

        assert_eq!(settings.board.width, 32);
        assert_eq!(settings.board.height, 600);
        assert!(!settings.board.seed_random);
        assert_eq!(settings.run.max_generations, Some(3));
        assert_eq!(settings.output.sink, SinkKind::Headless);
        assert_eq!(settings.output.summary_format, SummaryFormat::Json);
    }
}

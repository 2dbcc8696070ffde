//! Display and output formatting utilities

use crate::config::SummaryFormat;
use crate::driver::RunSummary;
use anyhow::{Context, Result};

/// Format run summaries for the console
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Format a summary in the requested format
    pub fn format(summary: &RunSummary, format: SummaryFormat) -> Result<String> {
        match format {
            SummaryFormat::Text => Ok(Self::format_text(summary)),
            SummaryFormat::Json => {
                serde_json::to_string_pretty(summary).context("Failed to serialize run summary")
            }
        }
    }

    /// Human readable summary
    pub fn format_text(summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!("Board: {}x{}\n", summary.width, summary.height));
        output.push_str(&format!(
            "Frames: {} over {:.3}s\n",
            summary.frames,
            summary.elapsed_ms as f64 / 1000.0
        ));
        output.push_str(&format!("Generations: {}\n", summary.generations));
        output.push_str(&format!(
            "Living Cells: {} → {} (peak {})\n",
            summary.initial_population,
            summary.final_population,
            summary.peak_population
        ));
        output.push_str(&format!("Final Density: {:.1}%\n", summary.final_density() * 100.0));

        if summary.population_history.len() > 1 {
            output.push_str(&format!(
                "Population: {}\n",
                Self::sparkline(&summary.population_history)
            ));
        }

        output
    }

    /// One block character per value, scaled between the min and max
    pub fn sparkline(values: &[usize]) -> String {
        const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

        let min = values.iter().copied().min().unwrap_or_default();
        let max = values.iter().copied().max().unwrap_or_default();
        let span = max - min;

        values
            .iter()
            .map(|&value| {
                if span == 0 {
                    BARS[0]
                } else {
                    BARS[(value - min) * (BARS.len() - 1) / span]
                }
            })
            .collect()
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary {
            width: 10,
            height: 10,
            frames: 120,
            generations: 2,
            elapsed_ms: 2000,
            initial_population: 50,
            final_population: 25,
            peak_population: 50,
            population_history: vec![50, 40, 25],
        }
    }

    #[test]
    fn test_text_summary() {
        let text = SummaryFormatter::format_text(&summary());
        assert!(text.contains("Board: 10x10"));
        assert!(text.contains("Frames: 120 over 2.000s"));
        assert!(text.contains("Living Cells: 50 → 25 (peak 50)"));
        assert!(text.contains("Final Density: 25.0%"));
        assert!(text.contains("Population: █▅▁"));
    }

    #[test]
    fn test_json_summary() {
        let json = SummaryFormatter::format(&summary(), SummaryFormat::Json).unwrap();
        let parsed: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary());
    }

    #[test]
    fn test_sparkline_flat() {
        assert_eq!(SummaryFormatter::sparkline(&[4, 4, 4]), "▁▁▁");
        assert_eq!(SummaryFormatter::sparkline(&[]), "");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}

//! Command line front end for the Game of Life raster simulation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use life_raster::{
    config::{CliOverrides, Settings, SinkKind, SummaryFormat},
    run_simulation,
    utils::{ColorOutput, SummaryFormatter},
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "life_raster")]
#[command(about = "Conway's Game of Life rendered as an RGBA raster")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SinkArg {
    Headless,
    Terminal,
    Ppm,
}

impl From<SinkArg> for SinkKind {
    fn from(arg: SinkArg) -> Self {
        match arg {
            SinkArg::Headless => SinkKind::Headless,
            SinkArg::Terminal => SinkKind::Terminal,
            SinkArg::Ppm => SinkKind::Ppm,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation in real time
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board width in cells (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Board height in cells (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Start from an all-dead board
        #[arg(long)]
        empty: bool,

        /// Seed for a reproducible random board
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds between generations (overrides config)
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Milliseconds between frames (overrides config)
        #[arg(long)]
        frame_ms: Option<u64>,

        /// Stop after this many frames
        #[arg(short, long)]
        frames: Option<u64>,

        /// Stop after this many generations
        #[arg(short, long)]
        generations: Option<u64>,

        /// Where frames are presented (overrides config)
        #[arg(short, long, value_enum)]
        sink: Option<SinkArg>,

        /// Output directory for image frames (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = dispatch(cli.command) {
        eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", err)));
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config,
            width,
            height,
            empty,
            seed,
            tick_ms,
            frame_ms,
            frames,
            generations,
            sink,
            output,
            json,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                empty,
                seed,
                tick_ms,
                frame_ms,
                frames,
                generations,
                sink: sink.map(SinkKind::from),
                output_dir: output,
                json,
            };
            run_command(&config, &overrides)
        }
        Commands::Setup { directory, force } => setup_command(&directory, force),
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;

    eprintln!(
        "{}",
        ColorOutput::info(&format!(
            "Running {}x{} board, one generation every {}ms",
            settings.board.width, settings.board.height, settings.timing.tick_interval_ms
        ))
    );

    let summary = run_simulation(&settings).context("Simulation failed")?;

    eprintln!("{}", ColorOutput::success("Simulation finished"));
    println!(
        "{}",
        SummaryFormatter::format(&summary, settings.output.summary_format)?
    );

    if settings.output.sink == SinkKind::Ppm {
        eprintln!(
            "Frames written to {}",
            settings.output.output_directory.display()
        );
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    eprintln!("{}", ColorOutput::info("Setting up configuration files..."));

    let config_dir = directory.join("config");
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)
        .with_context(|| format!("Failed to create directory {}", examples_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Small board printed to the terminal, four generations a second
    let mut terminal = Settings::default();
    terminal.board.width = 80;
    terminal.board.height = 40;
    terminal.timing.tick_interval_ms = 250;
    terminal.to_file(&examples_dir.join("terminal.yaml"))?;

    // Reproducible image sequence
    let mut ppm = Settings::default();
    ppm.board.seed = Some(1);
    ppm.run.max_generations = Some(10);
    ppm.output.sink = SinkKind::Ppm;
    ppm.to_file(&examples_dir.join("ppm.yaml"))?;

    // Benchmark-style headless run
    let mut headless = Settings::default();
    headless.timing.tick_interval_ms = 1;
    headless.timing.frame_interval_ms = 1;
    headless.run.max_generations = Some(100);
    headless.output.sink = SinkKind::Headless;
    headless.output.summary_format = SummaryFormat::Json;
    headless.to_file(&examples_dir.join("headless.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    eprintln!("{}", ColorOutput::success("Setup complete!"));

    Ok(())
}

//! Display surfaces that receive painted frames

use crate::config::SinkKind;
use crate::game_of_life::Board;
use crate::render::paint::BYTES_PER_PIXEL;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A painted frame handed to a sink
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Frame counter, starting at 0
    pub index: u64,
    /// Generation shown in this frame, 0 for the initial board
    pub generation: u64,
    /// Whether the board advanced since the previous frame
    pub ticked: bool,
    pub board: &'a Board,
    /// RGBA pixels, `width * height * 4` bytes
    pub pixels: &'a [u8],
}

impl Frame<'_> {
    /// True when this frame shows a board no earlier frame has shown
    pub fn is_new_generation(&self) -> bool {
        self.ticked || self.index == 0
    }
}

/// What the driver should do after presenting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkControl {
    Continue,
    Stop,
}

/// Receives each painted frame
pub trait FrameSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<SinkControl>;

    /// Flush anything buffered once the run ends
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Discards pixels, only counts frames
#[derive(Debug, Default)]
pub struct HeadlessSink {
    pub frames: u64,
}

impl FrameSink for HeadlessSink {
    fn present(&mut self, _frame: &Frame<'_>) -> Result<SinkControl> {
        self.frames += 1;
        Ok(SinkControl::Continue)
    }
}

/// Prints a down-sampled text view of each new generation
pub struct TerminalSink<W: Write> {
    out: W,
    max_cols: usize,
    max_rows: usize,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), 80, 40)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, max_cols: usize, max_rows: usize) -> Self {
        Self {
            out,
            max_cols: max_cols.max(1),
            max_rows: max_rows.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render `board` as text, each character covering a block of cells.
    /// A block shows as alive if any of its cells is alive.
    pub fn render_text(&self, board: &Board) -> String {
        let block_w = board.width().div_ceil(self.max_cols);
        let block_h = board.height().div_ceil(self.max_rows);
        let cols = board.width().div_ceil(block_w);
        let rows = board.height().div_ceil(block_h);

        let mut output = String::with_capacity(rows * (cols * 3 + 1));
        for row in 0..rows {
            for col in 0..cols {
                let alive = (row * block_h..((row + 1) * block_h).min(board.height())).any(|y| {
                    (col * block_w..((col + 1) * block_w).min(board.width()))
                        .any(|x| board.get(x, y).is_alive())
                });
                output.push(if alive { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<SinkControl> {
        if !frame.is_new_generation() {
            return Ok(SinkControl::Continue);
        }

        let text = self.render_text(frame.board);
        write!(
            self.out,
            "Generation {} (living: {})\n{}",
            frame.generation,
            frame.board.living_count(),
            text
        )
        .context("Failed to write frame to terminal")?;

        Ok(SinkControl::Continue)
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush terminal output")
    }
}

/// Writes each new generation as a binary PPM image
pub struct PpmSink {
    directory: PathBuf,
    written: Vec<PathBuf>,
}

impl PpmSink {
    /// Create the sink, creating `directory` if needed
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        std::fs::create_dir_all(&directory)
            .with_context(|| format!("Failed to create directory: {}", directory.display()))?;
        Ok(Self {
            directory,
            written: Vec::new(),
        })
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write_ppm(path: &Path, frame: &Frame<'_>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        write!(
            out,
            "P6\n{} {}\n255\n",
            frame.board.width(),
            frame.board.height()
        )?;
        for pixel in frame.pixels.chunks_exact(BYTES_PER_PIXEL) {
            out.write_all(&pixel[..3])?;
        }
        out.flush()
    }
}

impl FrameSink for PpmSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<SinkControl> {
        if !frame.is_new_generation() {
            return Ok(SinkControl::Continue);
        }

        let path = self
            .directory
            .join(format!("generation_{:06}.ppm", frame.generation));
        Self::write_ppm(&path, frame)
            .with_context(|| format!("Failed to write frame: {}", path.display()))?;
        self.written.push(path);
        Ok(SinkControl::Continue)
    }
}

/// Sink selected from configuration
pub enum AnySink {
    Headless(HeadlessSink),
    Terminal(TerminalSink<io::Stdout>),
    Ppm(PpmSink),
}

impl AnySink {
    pub fn new(kind: SinkKind, output_directory: &Path) -> Result<Self> {
        match kind {
            SinkKind::Headless => Ok(AnySink::Headless(HeadlessSink::default())),
            SinkKind::Terminal => Ok(AnySink::Terminal(TerminalSink::stdout())),
            SinkKind::Ppm => Ok(AnySink::Ppm(PpmSink::new(output_directory)?)),
        }
    }
}

impl FrameSink for AnySink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<SinkControl> {
        match self {
            AnySink::Headless(sink) => sink.present(frame),
            AnySink::Terminal(sink) => sink.present(frame),
            AnySink::Ppm(sink) => sink.present(frame),
        }
    }

    fn finish(&mut self) -> Result<()> {
        match self {
            AnySink::Headless(sink) => sink.finish(),
            AnySink::Terminal(sink) => sink.finish(),
            AnySink::Ppm(sink) => sink.finish(),
        }
    }
}

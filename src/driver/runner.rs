//! Frame loop tying the simulator, renderer and sink together

use super::clock::FrameClock;
use super::summary::RunSummary;
use crate::config::RunConfig;
use crate::game_of_life::{Board, Simulator};
use crate::render::{Frame, FrameSink, Renderer, SinkControl};
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info};

/// Generations kept in the population history
pub const POPULATION_HISTORY_LEN: usize = 256;

/// Owns the current board and advances it on a fixed interval.
///
/// Every frame is painted and presented; the board only advances when at
/// least `tick_interval` has elapsed since the previous advance.
pub struct Driver<C: FrameClock, S: FrameSink> {
    board: Board,
    pixels: Vec<u8>,
    tick_interval: Duration,
    last_advance: Duration,
    last_frame: Duration,
    generation: u64,
    frames: u64,
    initial_population: usize,
    peak_population: usize,
    /// Most recent populations, oldest first
    population: VecDeque<usize>,
    clock: C,
    sink: S,
}

impl<C: FrameClock, S: FrameSink> Driver<C, S> {
    pub fn new(board: Board, tick_interval: Duration, clock: C, sink: S) -> Self {
        let pixels = Renderer::allocate(&board);
        let living = board.living_count();
        let mut population = VecDeque::with_capacity(POPULATION_HISTORY_LEN);
        population.push_back(living);
        Self {
            board,
            pixels,
            tick_interval,
            last_advance: Duration::ZERO,
            last_frame: Duration::ZERO,
            generation: 0,
            frames: 0,
            initial_population: living,
            peak_population: living,
            population,
            clock,
            sink,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Last painted frame, RGBA
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Process one frame at timestamp `now`
    pub fn frame(&mut self, now: Duration) -> Result<SinkControl> {
        let ticked = now.saturating_sub(self.last_advance) >= self.tick_interval;
        if ticked {
            self.board = Simulator::advance(&self.board);
            self.last_advance = now;
            self.generation += 1;

            let living = self.board.living_count();
            if self.population.len() == POPULATION_HISTORY_LEN {
                self.population.pop_front();
            }
            self.population.push_back(living);
            self.peak_population = self.peak_population.max(living);
            debug!(generation = self.generation, living, at_ms = now.as_millis() as u64, "tick");
        }

        Renderer::paint(&self.board, &mut self.pixels).context("Failed to paint board")?;

        let frame = Frame {
            index: self.frames,
            generation: self.generation,
            ticked,
            board: &self.board,
            pixels: &self.pixels,
        };
        let control = self.sink.present(&frame)?;

        self.frames += 1;
        self.last_frame = now;
        Ok(control)
    }

    fn limit_reached(&self, limits: &RunConfig) -> bool {
        limits.max_frames.is_some_and(|max| self.frames >= max)
            || limits.max_generations.is_some_and(|max| self.generation >= max)
    }

    /// Run frames until a limit is reached, the clock runs out or the sink stops
    pub fn run(&mut self, limits: &RunConfig) -> Result<RunSummary> {
        info!(
            width = self.board.width(),
            height = self.board.height(),
            tick_ms = self.tick_interval.as_millis() as u64,
            "starting simulation"
        );

        while !self.limit_reached(limits) {
            let Some(now) = self.clock.wait_for_frame() else {
                debug!("frame clock exhausted");
                break;
            };
            if self.frame(now)? == SinkControl::Stop {
                info!(frame = self.frames, "sink requested stop");
                break;
            }
        }

        self.sink.finish()?;

        let summary = self.summary();
        info!(
            frames = summary.frames,
            generations = summary.generations,
            living = summary.final_population,
            "simulation finished"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            width: self.board.width(),
            height: self.board.height(),
            frames: self.frames,
            generations: self.generation,
            elapsed_ms: self.last_frame.as_millis() as u64,
            initial_population: self.initial_population,
            final_population: self.board.living_count(),
            peak_population: self.peak_population,
            population_history: self.population.iter().copied().collect(),
        }
    }
}

use std::time::Duration;

use anyhow::Result;
use life_raster::config::RunConfig;
use life_raster::driver::{Driver, ScriptedClock};
use life_raster::render::{Frame, FrameSink, PpmSink, SinkControl, ALIVE_RGBA, DEAD_RGBA};
use life_raster::{Board, Cell, Simulator};
use tempfile::tempdir;

/// Keeps a copy of every presented frame
#[derive(Default)]
struct Recorder {
    frames: Vec<(u64, bool, Vec<u8>)>,
    stop_after: Option<usize>,
}

impl FrameSink for Recorder {
    fn present(&mut self, frame: &Frame<'_>) -> Result<SinkControl> {
        self.frames
            .push((frame.generation, frame.ticked, frame.pixels.to_vec()));
        match self.stop_after {
            Some(limit) if self.frames.len() >= limit => Ok(SinkControl::Stop),
            _ => Ok(SinkControl::Continue),
        }
    }
}

fn glider_board() -> Board {
    "
    .#......
    ..#.....
    ###.....
    ........
    ........
    ........
    "
    .parse()
    .unwrap()
}

fn live_cells(board: &Board) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            if board.get(x, y) == Cell::Alive {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn glider_moves_diagonally() {
    let start = glider_board();
    let moved = Simulator::advance_generations(start.clone(), 4);

    let shifted: Vec<_> = live_cells(&start)
        .into_iter()
        .map(|(x, y)| (x + 1, y + 1))
        .collect();
    assert_eq!(live_cells(&moved), shifted);
}

#[test]
fn glider_settles_into_a_block_at_the_bottom_edge() {
    // no wraparound: the glider collides with the bottom edge and leaves a block
    let board = Simulator::advance_generations(glider_board(), 40);
    let settled = Simulator::advance(&board);
    assert_eq!(settled, board);
    assert_eq!(live_cells(&board), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
}

#[test]
fn frames_repaint_between_ticks() {
    let clock = ScriptedClock::from_millis([0, 400, 800, 1200, 1600, 2200]);
    let mut driver = Driver::new(
        glider_board(),
        Duration::from_secs(1),
        clock,
        Recorder::default(),
    );
    driver.run(&RunConfig::default()).unwrap();

    let frames = &driver.sink().frames;
    let generations: Vec<_> = frames.iter().map(|(g, _, _)| *g).collect();
    let ticks: Vec<_> = frames.iter().map(|(_, t, _)| *t).collect();
    assert_eq!(generations, vec![0, 0, 0, 1, 1, 2]);
    assert_eq!(ticks, vec![false, false, false, true, false, true]);

    // untouched frames repeat the same pixels
    assert_eq!(frames[0].2, frames[2].2);
    assert_ne!(frames[2].2, frames[3].2);

    for (_, _, pixels) in frames {
        assert_eq!(pixels.len(), 8 * 6 * 4);
        assert!(pixels
            .chunks_exact(4)
            .all(|pixel| pixel == ALIVE_RGBA || pixel == DEAD_RGBA));
    }
}

#[test]
fn sink_can_stop_the_run() {
    let clock = ScriptedClock::every(Duration::from_millis(16), 1000);
    let sink = Recorder {
        stop_after: Some(5),
        ..Default::default()
    };
    let mut driver = Driver::new(glider_board(), Duration::from_secs(1), clock, sink);

    let summary = driver.run(&RunConfig::default()).unwrap();
    assert_eq!(summary.frames, 5);
    assert_eq!(summary.generations, 0);
}

#[test]
fn ppm_sink_writes_one_image_per_generation() {
    let temp_dir = tempdir().unwrap();
    let sink = PpmSink::new(temp_dir.path()).unwrap();
    let clock = ScriptedClock::every(Duration::from_millis(100), 1000);
    let mut driver = Driver::new(glider_board(), Duration::from_millis(300), clock, sink);

    let limits = RunConfig {
        max_frames: None,
        max_generations: Some(3),
    };
    driver.run(&limits).unwrap();

    let written = driver.sink().written();
    assert_eq!(written.len(), 4);
    assert!(written[0].ends_with("generation_000000.ppm"));
    assert!(written[3].ends_with("generation_000003.ppm"));

    let bytes = std::fs::read(&written[0]).unwrap();
    let header = b"P6\n8 6\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    assert_eq!(bytes.len(), header.len() + 8 * 6 * 3);
}

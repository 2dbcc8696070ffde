//! Frame pacing

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

/// Supplies the timestamp of each frame, measured from the start of the run.
///
/// Timestamps are monotonically non-decreasing. `None` means no further
/// frames will come.
pub trait FrameClock {
    fn wait_for_frame(&mut self) -> Option<Duration>;
}

/// Blocks the calling thread until the next frame is due
#[derive(Debug)]
pub struct SleepClock {
    start: Instant,
    frame_interval: Duration,
    next_frame: Instant,
}

impl SleepClock {
    pub fn new(frame_interval: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            frame_interval,
            next_frame: start,
        }
    }
}

impl FrameClock for SleepClock {
    fn wait_for_frame(&mut self) -> Option<Duration> {
        let now = Instant::now();
        if self.next_frame > now {
            thread::sleep(self.next_frame - now);
            self.next_frame += self.frame_interval;
        } else {
            // running behind, drop the missed frames instead of bursting
            self.next_frame = now + self.frame_interval;
        }
        Some(self.start.elapsed())
    }
}

/// Replays a fixed list of timestamps
#[derive(Debug, Clone, Default)]
pub struct ScriptedClock {
    timestamps: VecDeque<Duration>,
}

impl ScriptedClock {
    pub fn new<I: IntoIterator<Item = Duration>>(timestamps: I) -> Self {
        Self {
            timestamps: timestamps.into_iter().collect(),
        }
    }

    /// Timestamps in milliseconds
    pub fn from_millis<I: IntoIterator<Item = u64>>(millis: I) -> Self {
        Self::new(millis.into_iter().map(Duration::from_millis))
    }

    /// `count` frames spaced `interval` apart, the first at zero
    pub fn every(interval: Duration, count: u32) -> Self {
        Self::new((0..count).map(|i| interval * i))
    }

    pub fn remaining(&self) -> usize {
        self.timestamps.len()
    }
}

impl FrameClock for ScriptedClock {
    fn wait_for_frame(&mut self) -> Option<Duration> {
        self.timestamps.pop_front()
    }
}

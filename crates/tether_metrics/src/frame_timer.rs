//! Frame timing for the runtime update loop

use super::ring_buffer::RingBuffer;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FrameTimer {
    frame_start: Instant,
    frame_times: RingBuffer<Duration>,
    frames: u64,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        Self {
            frame_start: Instant::now(),
            frame_times: RingBuffer::new(capacity),
            frames: 0,
        }
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    pub fn end(&mut self) {
        self.frame_times.push(self.frame_start.elapsed());
        self.frames += 1;
    }

    /// Frames completed since the timer was created.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> f64 {
        let avg = self.frame_times.average().as_secs_f64();
        if avg > 0.0 {
            1.0 / avg
        } else {
            0.0
        }
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_times.average().as_secs_f64() * 1000.0
    }

    pub fn frame_time_range_ms(&self) -> (f64, f64) {
        let (min, max) = self.frame_times.min_max();
        (min.as_secs_f64() * 1000.0, max.as_secs_f64() * 1000.0)
    }
}

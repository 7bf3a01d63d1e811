//! Frame timing: one clock for animation deltas and FPS reporting.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Longest delta handed to animations; absorbs stalls like window drags.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Tracks frame-to-frame time. `tick` yields the delta that drives the
/// tweens and controls, while a rolling window supports FPS logging.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a frame timer with a 120-sample rolling window.
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: Instant::now(),
            max_samples: 120,
        }
    }

    /// Record a new frame and return the clamped delta since the last one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }

        dt.min(MAX_FRAME_DELTA)
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of samples in the window.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

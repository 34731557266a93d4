//! Frame timing for the window loop

use std::collections::VecDeque;
use std::time::Instant;

/// Frame times over the last `sample_count` frames
pub struct FpsCounter {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
}

impl FpsCounter {
    /// Window of at least one frame
    pub fn new(sample_count: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count: sample_count.max(1),
        }
    }

    /// Seconds since the previous tick, and the windowed frame rate
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(dt);
        (dt, self.avg_fps())
    }

    fn record(&mut self, dt: f32) {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }
    }

    fn avg_dt(&self) -> f32 {
        self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32
    }

    pub fn avg_fps(&self) -> f32 {
        rate(self.avg_dt())
    }

    /// Mean frame time in the window, in ms
    pub fn avg_frame_time_ms(&self) -> f32 {
        self.avg_dt() * 1000.0
    }

    /// (slowest, fastest) frame rate in the window; zeros before the first tick
    pub fn min_max_fps(&self) -> (f32, f32) {
        let Some(&first) = self.frame_times.front() else {
            return (0.0, 0.0);
        };
        let (shortest, longest) = self
            .frame_times
            .iter()
            .fold((first, first), |(lo, hi), &dt| (lo.min(dt), hi.max(dt)));
        (rate(longest), rate(shortest))
    }
}

#[inline]
fn rate(dt: f32) -> f32 {
    if dt > 0.0 {
        1.0 / dt
    } else {
        0.0
    }
}

//! Frame timing for the animation step and the FPS readout.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Longest step handed to the animation code. Longer gaps (window dragged,
/// laptop resumed) are treated as one slow frame.
const MAX_STEP: Duration = Duration::from_millis(100);

/// Tracks frame durations over a rolling window.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Option<Instant>,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a new frame timer with a default 120-sample rolling window.
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: None,
            max_samples: 120,
        }
    }

    /// Marks the start of a frame and returns the animation step in seconds.
    ///
    /// The first call returns zero.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        let dt = now.saturating_duration_since(last);
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        dt.min(MAX_STEP).as_secs_f32()
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
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
        (self.total_secs() / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Short readout for the developer overlay, e.g. `60 fps  16.7 ms`.
    pub fn label(&self) -> String {
        format!("{:.0} fps  {:.1} ms", self.fps(), self.frame_time_ms())
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_fps_is_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
    }

    #[test]
    fn first_tick_has_no_step() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick(Instant::now()), 0.0);
        assert_eq!(timer.sample_count(), 0);
    }

    #[test]
    fn fps_from_steady_frames() {
        let mut timer = FrameTimer::new();
        let start = Instant::now();
        for i in 0..=10 {
            timer.tick(start + Duration::from_millis(20 * i));
        }
        assert_eq!(timer.sample_count(), 10);
        assert!((timer.fps() - 50.0).abs() < 1e-6);
        assert!((timer.frame_time_ms() - 20.0).abs() < 1e-6);
        assert_eq!(timer.label(), "50 fps  20.0 ms");
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut timer = FrameTimer::new();
        let start = Instant::now();
        timer.tick(start);
        let dt = timer.tick(start + Duration::from_secs(3));
        assert!((dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn max_samples_respected() {
        let mut timer = FrameTimer::new();
        let start = Instant::now();
        for i in 0..200 {
            timer.tick(start + Duration::from_millis(i));
        }
        assert_eq!(timer.sample_count(), 120);
    }
}

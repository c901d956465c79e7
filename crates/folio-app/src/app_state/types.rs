//! Internal constants for the app state module.

use std::time::Duration;

/// Smallest window the layout is designed for, logical pixels.
pub(super) const MIN_WINDOW_SIZE: (f64, f64) = (480.0, 360.0);

/// Time between frames at `frame_rate` frames per second.
pub(super) fn frame_interval(frame_rate: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_interval() {
        let d = frame_interval(60);
        assert!((d.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn zero_rate_is_clamped() {
        assert_eq!(frame_interval(0), Duration::from_secs(1));
    }
}

//! Time-driven animation helpers: entrance reveals, the hero typewriter and
//! easing curves.

mod reveal;
mod typewriter;

pub use reveal::{Reveal, RevealKey, RevealStyle, RevealTracker};
pub use typewriter::Typewriter;

/// Cubic ease-out.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Cubic ease-in-out.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear progress of an animation that starts `delay` seconds after
/// `start` and lasts `duration` seconds, clamped to 0..=1.
pub fn progress(now: f32, start: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if now >= start + delay { 1.0 } else { 0.0 };
    }
    ((now - start - delay) / duration).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for f in [ease_out, ease_in_out] {
            assert_eq!(f(0.0), 0.0);
            assert_eq!(f(1.0), 1.0);
            assert_eq!(f(-1.0), 0.0);
            assert_eq!(f(2.0), 1.0);
        }
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn progress_respects_delay() {
        assert_eq!(progress(1.0, 1.0, 0.2, 0.6), 0.0);
        assert!((progress(1.5, 1.0, 0.2, 0.6) - 0.5).abs() < 1e-5);
        assert_eq!(progress(5.0, 1.0, 0.2, 0.6), 1.0);
        assert_eq!(progress(1.3, 1.0, 0.2, 0.0), 1.0);
    }
}

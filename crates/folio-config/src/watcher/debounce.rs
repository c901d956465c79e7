use std::time::{Duration, Instant};

/// Quiet period required after the last change before a reload fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Coalesces bursts of change signals into one reload.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_signal: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_signal: None,
        }
    }

    /// Records a change at `now`, restarting the quiet window.
    pub fn signal(&mut self, now: Instant) {
        self.last_signal = Some(now);
    }

    /// Returns `true` once per burst, when the window has elapsed since the
    /// most recent signal.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_signal {
            Some(t) if now.saturating_duration_since(t) >= self.window => {
                self.last_signal = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.last_signal.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

use std::time::Duration;

/// Reveals a string one character per tick, then blinks a cursor.
///
/// Tick `k` (1-based) shows the first `k - 1` characters, so a string of
/// `n` characters passes through `n + 1` states before the reveal stops.
/// Both timers are accumulators advanced by frame time: a long frame fires
/// every interval it covers, in order.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    interval: f32,
    blink_interval: f32,
    accumulator: f32,
    /// Index of the next reveal tick.
    next_index: usize,
    shown: usize,
    typing: bool,
    cursor_visible: bool,
    blink_accumulator: f32,
}

impl Typewriter {
    pub fn new(text: &str, interval: Duration, blink_interval: Duration) -> Self {
        Self {
            chars: text.chars().collect(),
            interval: interval.as_secs_f32().max(f32::EPSILON),
            blink_interval: blink_interval.as_secs_f32().max(f32::EPSILON),
            accumulator: 0.0,
            next_index: 0,
            shown: 0,
            typing: true,
            cursor_visible: true,
            blink_accumulator: 0.0,
        }
    }

    /// Advances both timers by `dt` seconds. Returns every text state
    /// emitted during this step, oldest first.
    pub fn advance(&mut self, dt: f32) -> Vec<String> {
        let mut emitted = Vec::new();
        let mut dt = dt.max(0.0);

        if self.typing {
            self.accumulator += dt;
            dt = 0.0;
            while self.typing && self.accumulator >= self.interval {
                self.accumulator -= self.interval;
                self.shown = self.next_index.min(self.chars.len());
                emitted.push(self.text());
                self.next_index += 1;
                if self.next_index > self.chars.len() {
                    self.typing = false;
                    // Time left over after the last tick feeds the blink timer.
                    dt = self.accumulator;
                    self.accumulator = 0.0;
                }
            }
        }

        if !self.typing {
            self.blink_accumulator += dt;
            while self.blink_accumulator >= self.blink_interval {
                self.blink_accumulator -= self.blink_interval;
                self.cursor_visible = !self.cursor_visible;
            }
        }

        emitted
    }

    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Restarts the reveal with new text and timing.
    pub fn reset(&mut self, text: &str, interval: Duration, blink_interval: Duration) {
        *self = Self::new(text, interval, blink_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Typewriter {
        Typewriter::new(
            "Full-Stack Developer",
            Duration::from_millis(100),
            Duration::from_millis(500),
        )
    }

    #[test]
    fn emits_n_plus_one_increasing_states() {
        let mut tw = hero();
        let mut states = Vec::new();
        for _ in 0..400 {
            states.extend(tw.advance(0.016));
        }
        let n = "Full-Stack Developer".chars().count();
        assert_eq!(states.len(), n + 1);
        assert_eq!(states[0], "");
        assert_eq!(states[n], "Full-Stack Developer");
        for pair in states.windows(2) {
            assert!(pair[1].chars().count() > pair[0].chars().count());
        }
        assert!(!tw.is_typing());
    }

    #[test]
    fn long_frame_fires_every_interval() {
        let mut tw = hero();
        let states = tw.advance(0.35);
        assert_eq!(states, vec!["", "F", "Fu"]);
        assert_eq!(tw.text(), "Fu");
    }

    #[test]
    fn stops_after_full_text() {
        let mut tw = hero();
        let all = tw.advance(10.0);
        assert_eq!(all.len(), 21);
        assert!(tw.advance(10.0).is_empty());
        assert_eq!(tw.text(), "Full-Stack Developer");
    }

    #[test]
    fn cursor_blinks_only_after_typing() {
        let mut tw = hero();
        tw.advance(0.6);
        assert!(tw.cursor_visible());
        tw.advance(1.6);
        assert!(!tw.is_typing());
        assert!(tw.cursor_visible());
        tw.advance(0.5);
        assert!(!tw.cursor_visible());
        tw.advance(0.5);
        assert!(tw.cursor_visible());
    }

    #[test]
    fn empty_text_has_one_state() {
        let mut tw = Typewriter::new("", Duration::from_millis(100), Duration::from_millis(500));
        assert_eq!(tw.advance(1.0), vec![String::new()]);
        assert!(!tw.is_typing());
    }

    #[test]
    fn multibyte_characters_count_once() {
        let mut tw = Typewriter::new("héllo", Duration::from_millis(10), Duration::from_millis(500));
        let states = tw.advance(1.0);
        assert_eq!(states.len(), 6);
        assert_eq!(states[2], "hé");
    }
}

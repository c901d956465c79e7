use std::collections::HashMap;

use folio_common::Rect;

use super::{ease_out, progress};

/// Identifies one animated element: a static name plus an index for items
/// in a list.
pub type RevealKey = (&'static str, usize);

/// Direction an element enters from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStyle {
    /// Slides up from below.
    Rise,
    /// Slides in from the left.
    FromLeft,
    /// Slides in from the right.
    FromRight,
    /// Grows from `scale` to full size.
    Grow { scale: f32 },
    /// Fades only.
    Fade,
}

/// Current state of a reveal animation, applied by the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub opacity: f32,
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
    /// Raw linear progress, 0..=1.
    pub t: f32,
}

impl Reveal {
    pub const DONE: Reveal = Reveal {
        opacity: 1.0,
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        t: 1.0,
    };

    pub fn at(style: RevealStyle, t: f32, offset: f32) -> Reveal {
        let e = ease_out(t);
        let rest = 1.0 - e;
        let (dx, dy, scale) = match style {
            RevealStyle::Rise => (0.0, offset * rest, 1.0),
            RevealStyle::FromLeft => (-offset * rest, 0.0, 1.0),
            RevealStyle::FromRight => (offset * rest, 0.0, 1.0),
            RevealStyle::Grow { scale } => (0.0, 0.0, scale + (1.0 - scale) * e),
            RevealStyle::Fade => (0.0, 0.0, 1.0),
        };
        Reveal {
            opacity: e,
            dx,
            dy,
            scale,
            t,
        }
    }

    /// Applies the offset and scale to `rect`, scaling about its centre.
    pub fn apply(&self, rect: Rect) -> Rect {
        let w = rect.width * self.scale;
        let h = rect.height * self.scale;
        Rect::new(
            rect.x + (rect.width - w) * 0.5 + self.dx,
            rect.y + (rect.height - h) * 0.5 + self.dy,
            w,
            h,
        )
    }

    /// Combines an entrance nested inside this one: offsets add, opacity
    /// and scale multiply.
    pub fn nested(&self, child: &Reveal) -> Reveal {
        Reveal {
            opacity: self.opacity * child.opacity,
            dx: self.dx + child.dx,
            dy: self.dy + child.dy,
            scale: self.scale * child.scale,
            t: self.t.min(child.t),
        }
    }

    /// Same reveal drawn at `scale`, for hover emphasis.
    pub fn scaled(&self, scale: f32) -> Reveal {
        Reveal {
            scale: self.scale * scale,
            ..*self
        }
    }

    pub fn is_done(&self) -> bool {
        self.t >= 1.0
    }
}

/// Remembers when each element first came into view so its entrance plays
/// exactly once.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    triggered: HashMap<RevealKey, f32>,
    duration: f32,
    offset: f32,
    reduced_motion: bool,
}

impl RevealTracker {
    pub fn new(duration: f32, offset: f32, reduced_motion: bool) -> Self {
        Self {
            triggered: HashMap::new(),
            duration,
            offset,
            reduced_motion,
        }
    }

    pub fn set_timing(&mut self, duration: f32, offset: f32, reduced_motion: bool) {
        self.duration = duration;
        self.offset = offset;
        self.reduced_motion = reduced_motion;
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Returns the reveal state of `key`.
    ///
    /// `rect` and `viewport` are in the same coordinate space. The first call
    /// on which they intersect starts the animation at `now`; after that the
    /// element keeps animating regardless of visibility.
    pub fn reveal(
        &mut self,
        key: RevealKey,
        rect: Rect,
        viewport: Rect,
        now: f32,
        delay: f32,
        style: RevealStyle,
    ) -> Reveal {
        self.reveal_for(key, rect, viewport, now, delay, self.duration, style)
    }

    /// Like [`RevealTracker::reveal`] with an explicit duration.
    #[allow(clippy::too_many_arguments)]
    pub fn reveal_for(
        &mut self,
        key: RevealKey,
        rect: Rect,
        viewport: Rect,
        now: f32,
        delay: f32,
        duration: f32,
        style: RevealStyle,
    ) -> Reveal {
        if self.reduced_motion {
            return Reveal::DONE;
        }
        let start = match self.triggered.get(&key) {
            Some(&start) => start,
            None if rect.intersects(&viewport) => {
                self.triggered.insert(key, now);
                now
            }
            None => return Reveal::at(style, 0.0, self.offset),
        };
        Reveal::at(style, progress(now, start, delay, duration), self.offset)
    }

    pub fn is_triggered(&self, key: RevealKey) -> bool {
        self.triggered.contains_key(&key)
    }

    /// Whether any triggered animation is still running at `now`.
    pub fn is_animating(&self, now: f32) -> bool {
        // Stagger delays stay below two seconds.
        self.triggered
            .values()
            .any(|&start| now < start + self.duration + 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn hidden_until_visible() {
        let mut tracker = RevealTracker::new(0.6, 30.0, false);
        let below = Rect::new(0.0, 900.0, 100.0, 100.0);
        let r = tracker.reveal(("card", 0), below, VIEW, 1.0, 0.0, RevealStyle::Rise);
        assert_eq!(r.opacity, 0.0);
        assert_eq!(r.dy, 30.0);
        assert!(!tracker.is_triggered(("card", 0)));
    }

    #[test]
    fn plays_once_after_delay() {
        let mut tracker = RevealTracker::new(0.6, 30.0, false);
        let rect = Rect::new(0.0, 100.0, 100.0, 100.0);
        let key = ("card", 2);
        let r = tracker.reveal(key, rect, VIEW, 10.0, 0.2, RevealStyle::Rise);
        assert_eq!(r.t, 0.0);
        let r = tracker.reveal(key, rect, VIEW, 10.1, 0.2, RevealStyle::Rise);
        assert_eq!(r.t, 0.0);
        let r = tracker.reveal(key, rect, VIEW, 10.5, 0.2, RevealStyle::Rise);
        assert!((r.t - 0.5).abs() < 1e-4);
        let r = tracker.reveal(key, rect, VIEW, 11.0, 0.2, RevealStyle::Rise);
        assert!(r.is_done());
        assert_eq!(r.opacity, 1.0);
        assert_eq!(r.dy, 0.0);
    }

    #[test]
    fn stays_revealed_after_scrolling_away() {
        let mut tracker = RevealTracker::new(0.6, 30.0, false);
        let key = ("title", 0);
        tracker.reveal(key, Rect::new(0.0, 10.0, 10.0, 10.0), VIEW, 0.0, 0.0, RevealStyle::Fade);
        let gone = Rect::new(0.0, -5000.0, 10.0, 10.0);
        let r = tracker.reveal(key, gone, VIEW, 5.0, 0.0, RevealStyle::Fade);
        assert!(r.is_done());
    }

    #[test]
    fn reduced_motion_skips_animation() {
        let mut tracker = RevealTracker::new(0.6, 30.0, true);
        let r = tracker.reveal(
            ("x", 0),
            Rect::new(0.0, 9000.0, 1.0, 1.0),
            VIEW,
            0.0,
            1.0,
            RevealStyle::FromLeft,
        );
        assert_eq!(r, Reveal::DONE);
    }

    #[test]
    fn grow_scales_about_centre() {
        let r = Reveal::at(RevealStyle::Grow { scale: 0.5 }, 0.0, 30.0);
        let rect = r.apply(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(rect, Rect::new(25.0, 25.0, 50.0, 50.0));
    }

    #[test]
    fn nested_reveal_multiplies_opacity() {
        let half = Reveal::at(RevealStyle::Fade, 0.5, 20.0);
        assert_eq!(Reveal::DONE.nested(&half).opacity, half.opacity);
        let both = half.nested(&half);
        assert!((both.opacity - half.opacity * half.opacity).abs() < 1e-6);
        assert_eq!(both.t, 0.5);
    }

    #[test]
    fn side_slides_have_opposite_signs() {
        let l = Reveal::at(RevealStyle::FromLeft, 0.0, 30.0);
        let r = Reveal::at(RevealStyle::FromRight, 0.0, 30.0);
        assert_eq!(l.dx, -30.0);
        assert_eq!(r.dx, 30.0);
    }
}

use crate::motion::ease_in_out;

/// Vertical page scroll with eased programmatic jumps.
///
/// Wheel input moves the offset directly; `scroll_to` animates from the
/// current offset to the target over `duration` seconds.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    offset: f32,
    max: f32,
    animation: Option<ScrollAnimation>,
    duration: f32,
}

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    start: f32,
}

impl SmoothScroll {
    pub fn new(duration: f32) -> Self {
        Self {
            offset: 0.0,
            max: 0.0,
            animation: None,
            duration,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration;
    }

    /// Updates the scrollable range from the page and viewport heights.
    pub fn set_extent(&mut self, page_height: f32, viewport_height: f32) {
        self.max = (page_height - viewport_height).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max);
        if let Some(anim) = &mut self.animation {
            anim.to = anim.to.clamp(0.0, self.max);
        }
    }

    /// Immediate relative scroll, cancelling any running animation.
    pub fn scroll_by(&mut self, delta: f32) {
        self.animation = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max);
    }

    /// Starts an eased scroll to `target` at time `now`.
    pub fn scroll_to(&mut self, target: f32, now: f32) {
        let to = target.clamp(0.0, self.max);
        if self.duration <= 0.0 {
            self.animation = None;
            self.offset = to;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            start: now,
        });
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn update(&mut self, now: f32) {
        let Some(anim) = self.animation else {
            return;
        };
        let t = ((now - anim.start) / self.duration).clamp(0.0, 1.0);
        self.offset = anim.from + (anim.to - anim.from) * ease_in_out(t);
        if t >= 1.0 {
            self.offset = anim.to;
            self.animation = None;
        }
    }
}

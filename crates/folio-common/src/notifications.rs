//! Toast notifications shown in the bottom-right corner of the window.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default lifetime of a toast.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Severity level for toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single toast.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    fn new(level: NotificationLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, body)
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, body)
    }

    /// Creates a warning toast with an 8-second TTL.
    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, body).with_ttl(Duration::from_secs(8))
    }

    /// Creates an error toast with a 10-second TTL.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, body).with_ttl(Duration::from_secs(10))
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns `true` if this toast has exceeded its TTL as of `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }

    /// Fraction of the lifetime remaining, 1.0 when fresh and 0.0 when expired.
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        if self.ttl.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        (1.0 - elapsed.as_secs_f32() / self.ttl.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// A bounded queue of toasts that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
    default_ttl: Duration,
}

impl NotificationQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            default_ttl: DEFAULT_TTL,
        }
    }

    /// Overrides the TTL applied to info and success toasts.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn set_limits(&mut self, capacity: usize, default_ttl: Duration) {
        self.capacity = capacity.max(1);
        self.default_ttl = default_ttl;
        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
    }

    /// Pushes a toast, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, mut notification: Notification) {
        if matches!(
            notification.level,
            NotificationLevel::Info | NotificationLevel::Success
        ) {
            notification.ttl = self.default_ttl;
        }
        tracing::debug!(title = %notification.title, "toast");
        self.evict_expired(Instant::now());
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Returns all currently visible (non-expired) toasts, oldest first.
    pub fn visible(&mut self) -> Vec<&Notification> {
        self.visible_at(Instant::now())
    }

    pub fn visible_at(&mut self, now: Instant) -> Vec<&Notification> {
        self.evict_expired(now);
        self.items.iter().collect()
    }

    /// Number of toasts in the queue, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn evict_expired(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired_at(now));
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_respects_capacity() {
        let mut q = NotificationQueue::new(2);
        q.push(Notification::info("a", ""));
        q.push(Notification::info("b", ""));
        q.push(Notification::info("c", ""));
        let titles: Vec<_> = q.visible().iter().map(|n| n.title.clone()).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn expired_entries_are_evicted() {
        let mut q = NotificationQueue::new(4);
        q.push(Notification::warning("late", ""));
        let later = Instant::now() + Duration::from_secs(60);
        assert!(q.visible_at(later).is_empty());
        assert!(q.is_empty());
    }

    #[test]
    fn default_ttl_applies_to_info() {
        let mut q = NotificationQueue::new(4).with_default_ttl(Duration::from_secs(1));
        q.push(Notification::success("sent", "ok"));
        let soon = Instant::now() + Duration::from_millis(1500);
        assert!(q.visible_at(soon).is_empty());
    }

    #[test]
    fn error_keeps_own_ttl() {
        let mut q = NotificationQueue::new(4).with_default_ttl(Duration::from_secs(1));
        q.push(Notification::error("boom", ""));
        let soon = Instant::now() + Duration::from_secs(2);
        assert_eq!(q.visible_at(soon).len(), 1);
    }

    #[test]
    fn remaining_fraction_bounds() {
        let n = Notification::info("x", "y");
        assert!(n.remaining_fraction(n.created_at) > 0.99);
        assert_eq!(n.remaining_fraction(n.created_at + Duration::from_secs(30)), 0.0);
    }

    #[test]
    fn set_limits_shrinks_queue() {
        let mut q = NotificationQueue::new(5);
        for i in 0..5 {
            q.push(Notification::info(format!("{i}"), ""));
        }
        q.set_limits(2, DEFAULT_TTL);
        assert_eq!(q.len(), 2);
        assert_eq!(q.visible()[0].title, "3");
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut q = NotificationQueue::new(0);
        q.push(Notification::info("only", ""));
        assert_eq!(q.len(), 1);
    }
}

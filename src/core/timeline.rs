//! One-shot timers on an externally supplied clock.
//!
//! Nothing here reads the system time: callers pass `now` in, so the same
//! timers run from the real frame loop or from a simulated clock in tests.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending<K> {
    key: K,
    due: Duration,
}

/// Pending one-shot timers keyed by `K`.  At most one timer per key.
#[derive(Debug, Clone)]
pub struct Timeline<K> {
    pending: Vec<Pending<K>>,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq> Timeline<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `key` to fire at `due`, replacing any pending timer with the
    /// same key (clear-then-set).
    pub fn schedule(&mut self, key: K, due: Duration) {
        self.cancel(key);
        self.pending.push(Pending { key, due });
    }

    /// Disarm `key`.  Returns whether it was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.key != key);
        self.pending.len() != before
    }

    #[cfg(test)]
    pub fn is_pending(&self, key: K) -> bool {
        self.pending.iter().any(|p| p.key == key)
    }

    #[cfg(test)]
    pub fn due_at(&self, key: K) -> Option<Duration> {
        self.pending.iter().find(|p| p.key == key).map(|p| p.due)
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return the earliest timer due at or before `now`.
    /// Timers with equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<(K, Duration)> {
        let mut best: Option<usize> = None;
        for (i, p) in self.pending.iter().enumerate() {
            if p.due > now {
                continue;
            }
            match best {
                Some(b) if self.pending[b].due <= p.due => {}
                _ => best = Some(i),
            }
        }
        let p = self.pending.remove(best?);
        Some((p.key, p.due))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum T {
        A,
        B,
        C,
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut tl = Timeline::new();
        tl.schedule(T::A, ms(300));
        tl.schedule(T::B, ms(100));
        tl.schedule(T::C, ms(200));
        assert_eq!(tl.next_deadline(), Some(ms(100)));

        assert_eq!(tl.pop_due(ms(250)), Some((T::B, ms(100))));
        assert_eq!(tl.pop_due(ms(250)), Some((T::C, ms(200))));
        assert_eq!(tl.pop_due(ms(250)), None);
        assert!(tl.is_pending(T::A));
    }

    #[test]
    fn rescheduling_replaces_previous_timer() {
        let mut tl = Timeline::new();
        tl.schedule(T::A, ms(200));
        tl.schedule(T::A, ms(290));
        assert_eq!(tl.due_at(T::A), Some(ms(290)));
        assert_eq!(tl.pop_due(ms(200)), None);
        assert_eq!(tl.pop_due(ms(290)), Some((T::A, ms(290))));
    }

    #[test]
    fn cancel_reports_whether_pending() {
        let mut tl = Timeline::new();
        tl.schedule(T::A, ms(10));
        assert!(tl.cancel(T::A));
        assert!(!tl.cancel(T::A));
        assert_eq!(tl.next_deadline(), None);
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let mut tl = Timeline::new();
        tl.schedule(T::C, ms(50));
        tl.schedule(T::A, ms(50));
        assert_eq!(tl.pop_due(ms(50)).map(|(k, _)| k), Some(T::C));
        assert_eq!(tl.pop_due(ms(50)).map(|(k, _)| k), Some(T::A));
    }
}

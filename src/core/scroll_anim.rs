//! Animated scroll-to: drives the viewport from its current offset to a
//! section's top (minus the fixed header) along the back-ease-out curve.
//!
//! There is no cancel operation.  Callers hold the navigation lock for the
//! animation's duration so two animations never overlap.

use std::time::Duration;

use super::easing::ease_out_back;
use super::geometry::Viewport;

/// One in-flight scroll animation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start_offset: f64,
    destination: f64,
    started_at: Duration,
    duration: Duration,
    overshoot: f64,
}

impl ScrollAnimation {
    /// Start an animation toward the element whose document top is
    /// `target_doc_top`, leaving `header_clearance` above it.
    pub fn toward(
        target_doc_top: f64,
        header_clearance: f64,
        viewport: &Viewport,
        now: Duration,
        duration: Duration,
        overshoot: f64,
    ) -> Self {
        Self {
            start_offset: viewport.scroll_offset(),
            destination: target_doc_top - header_clearance,
            started_at: now,
            duration,
            overshoot,
        }
    }

    #[cfg(test)]
    pub fn destination(&self) -> f64 {
        self.destination
    }

    /// Offset the viewport should have at `now`.
    pub fn sample(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= self.duration {
            return self.destination;
        }
        ease_out_back(
            elapsed.as_secs_f64() * 1000.0,
            self.start_offset,
            self.destination - self.start_offset,
            self.duration.as_secs_f64() * 1000.0,
            self.overshoot,
        )
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }

    /// Frame callback: write the eased offset into the viewport.  Returns
    /// `true` while further frames are needed.
    pub fn step(&self, viewport: &mut Viewport, now: Duration) -> bool {
        viewport.scroll_to(self.sample(now));
        !self.is_finished(now)
    }
}

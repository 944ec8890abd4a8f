//! Intro progress with exponential smoothing.
//!
//! Gestures move `target`; each frame `current` closes a fixed fraction of
//! the remaining gap and snaps once the gap is tiny, so the loop always
//! terminates.

pub const PROGRESS_MAX: f64 = 100.0;

/// Gesture-driven progress pair, both in `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollProgress {
    target: f64,
    current: f64,
    /// Fraction of the remaining gap closed per tick.
    smoothing: f64,
    /// Gap below which `current` snaps to `target`.
    snap_epsilon: f64,
}

impl ScrollProgress {
    pub fn new(smoothing: f64, snap_epsilon: f64) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            smoothing: smoothing.clamp(0.01, 1.0),
            snap_epsilon: snap_epsilon.max(f64::EPSILON),
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Move the target by `amount` progress points, clamped.
    pub fn push(&mut self, amount: f64) {
        if !amount.is_finite() {
            return;
        }
        self.target = (self.target + amount).clamp(0.0, PROGRESS_MAX);
    }

    /// One smoothing step.  Call once per frame.
    pub fn tick(&mut self) {
        self.current += (self.target - self.current) * self.smoothing;
        if (self.target - self.current).abs() < self.snap_epsilon {
            self.current = self.target;
        }
    }

    /// Pin both values at the maximum (completion).
    pub fn saturate(&mut self) {
        self.current = PROGRESS_MAX;
        self.target = PROGRESS_MAX;
    }

    /// `current / 100`.
    pub fn ratio(&self) -> f64 {
        self.current / PROGRESS_MAX
    }

    /// True while `current` still has to move.
    pub fn is_animating(&self) -> bool {
        self.current != self.target
    }
}

//! Intro progress controller: the "unrolling scroll" that gates the page.
//!
//! Phase machine: `NotStarted → Active → Completed`.  While Active every
//! gesture delta feeds [`ScrollProgress`]; a frame loop smooths it and,
//! the first time it saturates, starts the welcome sequence.  The owner
//! (see `controller.rs`) arms the reveal timer and later calls
//! [`IntroController::complete`].

use super::progress::ScrollProgress;
use super::tuning::Tuning;

/// Which consumer owns gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntroPhase {
    /// Page still loading; intro not yet shown.
    #[default]
    NotStarted,
    /// Intro visible, page scroll locked.
    Active,
    /// Intro finished for good; section navigation owns gestures.
    Completed,
}

/// Visual state published by one smoothing tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroFrame {
    /// `current / 100`.
    pub openness: f64,
    /// Text overlay shown once openness passes the overlay threshold.
    pub overlay_visible: bool,
    /// True only on the tick that started the welcome sequence.
    pub welcome: bool,
}

#[derive(Debug, Clone)]
pub struct IntroController {
    phase: IntroPhase,
    progress: ScrollProgress,
    /// Set once, when progress first saturates.
    welcome_started: bool,
    /// Whether the smoothing loop wants another frame.
    loop_scheduled: bool,
    overlay_visible: bool,
    sensitivity: f64,
    completion_at: f64,
    overlay_at: f64,
}

impl IntroController {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: IntroPhase::NotStarted,
            progress: ScrollProgress::new(tuning.intro_smoothing, tuning.intro_snap_epsilon),
            welcome_started: false,
            loop_scheduled: false,
            overlay_visible: false,
            sensitivity: tuning.intro_sensitivity,
            completion_at: tuning.intro_completion_at,
            overlay_at: tuning.intro_overlay_at,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn progress(&self) -> &ScrollProgress {
        &self.progress
    }

    pub fn openness(&self) -> f64 {
        self.progress.ratio()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn welcome_started(&self) -> bool {
        self.welcome_started
    }

    /// Whether the smoothing loop is waiting for a frame.
    pub fn needs_frame(&self) -> bool {
        self.loop_scheduled
    }

    /// Intro UI became visible: `NotStarted → Active`.  Returns whether
    /// the phase changed.
    pub fn show(&mut self) -> bool {
        if self.phase != IntroPhase::NotStarted {
            return false;
        }
        self.phase = IntroPhase::Active;
        true
    }

    /// Feed a raw gesture delta (positive = unroll).  Ignored unless the
    /// intro is Active.  Once the welcome sequence has started the scroll
    /// stays fully open until the reveal, so further deltas are absorbed
    /// without effect.
    pub fn on_gesture_delta(&mut self, delta: f64) {
        if self.phase != IntroPhase::Active || self.welcome_started {
            return;
        }
        self.progress.push(delta * self.sensitivity);
        if self.progress.is_animating() {
            self.loop_scheduled = true;
        }
    }

    /// One frame of the smoothing loop.  Returns `None` when no frame was
    /// scheduled.
    pub fn tick(&mut self) -> Option<IntroFrame> {
        if !self.loop_scheduled {
            return None;
        }

        self.progress.tick();
        let openness = self.progress.ratio();
        self.overlay_visible = openness > self.overlay_at;

        if self.progress.current() >= self.completion_at && !self.welcome_started {
            self.progress.saturate();
            self.welcome_started = true;
            self.loop_scheduled = false;
            self.overlay_visible = self.progress.ratio() > self.overlay_at;
            return Some(IntroFrame {
                openness: self.progress.ratio(),
                overlay_visible: self.overlay_visible,
                welcome: true,
            });
        }

        self.loop_scheduled = self.progress.is_animating();
        Some(IntroFrame {
            openness,
            overlay_visible: self.overlay_visible,
            welcome: false,
        })
    }

    /// Reveal delay elapsed (or there is no intro at all): `→ Completed`.
    /// Returns `true` only on the first call.
    pub fn complete(&mut self) -> bool {
        if self.phase == IntroPhase::Completed {
            return false;
        }
        self.phase = IntroPhase::Completed;
        self.loop_scheduled = false;
        true
    }
}

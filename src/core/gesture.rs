//! Modality-agnostic gesture steps and the edge-resistance rule.
//!
//! Wheel and drag input are both reduced to a [`GestureStep`]: a signed
//! delta (positive = forward / down the page) tagged with its modality.
//! One [`ResistanceAccumulator::resist`] decides whether a step scrolls
//! natively, is absorbed as resistance at a section edge, or launches a
//! section transition.

use super::geometry::ViewRect;
use super::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    /// Discrete wheel events (delta in wheel units).
    Wheel,
    /// Pointer drag; delta is the pixel distance between successive moves.
    Touch,
}

impl Modality {
    /// Accumulated delta that triggers a transition.
    pub fn threshold(self, tuning: &Tuning) -> f64 {
        match self {
            Modality::Wheel => tuning.wheel_threshold,
            Modality::Touch => tuning.touch_threshold,
        }
    }

    /// Steps below this magnitude are ignored outright.
    pub fn min_step(self, tuning: &Tuning) -> f64 {
        match self {
            Modality::Wheel => tuning.wheel_min_step,
            Modality::Touch => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Modality::Wheel => "wheel",
            Modality::Touch => "touch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// One unit of user intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureStep {
    pub modality: Modality,
    pub delta: f64,
}

impl GestureStep {
    pub fn wheel(delta: f64) -> Self {
        Self {
            modality: Modality::Wheel,
            delta,
        }
    }

    pub fn touch(delta: f64) -> Self {
        Self {
            modality: Modality::Touch,
            delta,
        }
    }

    /// `None` for a zero (or non-finite) delta.
    pub fn direction(&self) -> Option<Direction> {
        if !self.delta.is_finite() || self.delta == 0.0 {
            None
        } else if self.delta > 0.0 {
            Some(Direction::Forward)
        } else {
            Some(Direction::Backward)
        }
    }
}

/// Whether the dominant section is pinned at either boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    /// Section bottom is (nearly) inside the viewport.
    pub at_bottom: bool,
    /// Section top is (nearly) at or below the header.
    pub at_top: bool,
}

impl Edges {
    pub fn of(rect: ViewRect, viewport_height: f64, tuning: &Tuning) -> Self {
        Self {
            at_bottom: rect.bottom <= viewport_height + tuning.edge_buffer,
            at_top: rect.top >= tuning.header_clearance - tuning.edge_buffer,
        }
    }
}

/// What the router should do with a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resistance {
    /// Not at an edge (or nowhere to go): let the page scroll natively.
    Native,
    /// At an edge; delta was accumulated and native scrolling suppressed.
    Absorbed,
    /// Accumulated past the threshold: transition in this direction.
    Trigger(Direction),
}

/// Signed resistance built up while pinned at a section edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResistanceAccumulator {
    value: f64,
}

impl ResistanceAccumulator {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// Apply one step.  `has_next` / `has_prev` say whether a neighbouring
    /// section exists in that direction.  A trigger resets the accumulator.
    pub fn resist(
        &mut self,
        step: GestureStep,
        edges: Edges,
        has_next: bool,
        has_prev: bool,
        threshold: f64,
    ) -> Resistance {
        match step.direction() {
            None => Resistance::Native,
            Some(Direction::Forward) => {
                if !edges.at_bottom {
                    self.reset();
                    return Resistance::Native;
                }
                if !has_next {
                    return Resistance::Native;
                }
                self.value += step.delta;
                if self.value > threshold {
                    self.reset();
                    Resistance::Trigger(Direction::Forward)
                } else {
                    Resistance::Absorbed
                }
            }
            Some(Direction::Backward) => {
                if !edges.at_top {
                    self.reset();
                    return Resistance::Native;
                }
                if !has_prev {
                    return Resistance::Native;
                }
                self.value += step.delta;
                if self.value < -threshold {
                    self.reset();
                    Resistance::Trigger(Direction::Backward)
                } else {
                    Resistance::Absorbed
                }
            }
        }
    }
}

/// Turns absolute pointer positions into step deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchTracker {
    last_y: Option<f64>,
}

impl TouchTracker {
    /// Pointer went down at `y`.
    pub fn start(&mut self, y: f64) {
        self.last_y = Some(y);
    }

    /// Pointer moved to `y`.  Positive result = finger moved up = scroll
    /// forward.  `None` without a preceding `start`.
    pub fn step(&mut self, y: f64) -> Option<f64> {
        let last = self.last_y?;
        self.last_y = Some(y);
        Some(last - y)
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }
}

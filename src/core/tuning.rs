//! Numeric knobs of the intro and navigation state machine.

use std::time::Duration;

/// Every constant the controller uses.  Defaults reproduce the reference
/// page feel; `config.rs` lets users override them.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    // ── intro ──────────────────────────────────────────────────
    /// Progress points per unit of gesture delta.
    pub intro_sensitivity: f64,
    /// Fraction of the remaining gap closed per frame.
    pub intro_smoothing: f64,
    /// Gap below which progress snaps to its target.
    pub intro_snap_epsilon: f64,
    /// Progress at which the welcome sequence fires.
    pub intro_completion_at: f64,
    /// Openness above which the text overlay shows.
    pub intro_overlay_at: f64,
    /// Reading time between the welcome text and the reveal.
    pub reveal_delay: Duration,
    /// How long the finished intro overlay lingers before it is gone.
    pub intro_teardown: Duration,
    /// Duration of the hero fade-in after the reveal.
    pub hero_fade: Duration,

    // ── loader ─────────────────────────────────────────────────
    /// Minimum time the loader stays fully visible.
    pub loader_min_visible: Duration,
    /// Loader fade-out before the intro is shown.
    pub loader_fade: Duration,

    // ── navigation ─────────────────────────────────────────────
    /// Fixed header height; sections settle just below it.
    pub header_clearance: f64,
    /// Slack when deciding whether a section edge is reached.
    pub edge_buffer: f64,
    /// Accumulated wheel delta needed to change section.
    pub wheel_threshold: f64,
    /// Accumulated drag distance needed to change section.
    pub touch_threshold: f64,
    /// Wheel steps smaller than this are ignored.
    pub wheel_min_step: f64,
    /// Wheel inactivity after which resistance resets.
    pub wheel_idle_reset: Duration,
    /// Length of a gesture-triggered section transition.
    pub transition: Duration,
    /// Length of an anchor/back-to-top jump.
    pub anchor_jump: Duration,
    /// Back-ease-out overshoot constant.
    pub overshoot: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            intro_sensitivity: 0.06,
            intro_smoothing: 0.08,
            intro_snap_epsilon: 0.1,
            intro_completion_at: 99.5,
            intro_overlay_at: 0.8,
            reveal_delay: Duration::from_millis(3500),
            intro_teardown: Duration::from_millis(1000),
            hero_fade: Duration::from_millis(1000),
            loader_min_visible: Duration::from_millis(1500),
            loader_fade: Duration::from_millis(800),
            header_clearance: 80.0,
            edge_buffer: 5.0,
            wheel_threshold: 200.0,
            touch_threshold: 80.0,
            wheel_min_step: 5.0,
            wheel_idle_reset: Duration::from_millis(200),
            transition: Duration::from_millis(1500),
            anchor_jump: Duration::from_millis(1200),
            overshoot: super::easing::DEFAULT_OVERSHOOT,
        }
    }
}

//! Back-ease-out curve used by every animated scroll.
//!
//! The curve passes slightly beyond `start + delta` before settling on it,
//! which gives section transitions their elastic feel.

/// Default overshoot constant.  Higher = more bounce past the target.
pub const DEFAULT_OVERSHOOT: f64 = 1.5;

/// Back-ease-out: position at time `t` of a move from `start` by `delta`
/// lasting `duration`.  `t` and `duration` share a unit (ms here).
///
/// Returns exactly `start + delta` at `t == duration`.  A non-positive
/// duration is treated as an instant jump.
pub fn ease_out_back(t: f64, start: f64, delta: f64, duration: f64, overshoot: f64) -> f64 {
    if duration <= 0.0 {
        return start + delta;
    }
    let p = t / duration - 1.0;
    delta * (p * p * ((overshoot + 1.0) * p + overshoot) + 1.0) + start
}

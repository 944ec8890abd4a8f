//! Core logic: the intro and section-navigation state machine.
//!
//! Everything in here is pure computation over explicit state and an
//! externally supplied clock.  No terminal I/O, no system time.

pub mod controller;
pub mod easing;
pub mod geometry;
pub mod gesture;
pub mod intro;
pub mod progress;
pub mod scroll_anim;
pub mod section;
pub mod spy;
pub mod timeline;
pub mod tuning;

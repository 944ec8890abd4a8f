//! Page controller: owns every piece of navigation state and routes
//! gestures between the intro and section-to-section paging.
//!
//! The controller never reads a clock.  Input handlers and [`advance`]
//! take `now` (time since start) so the host frame loop and tests drive it
//! identically.  Pending timers due at or before `now` fire at the start of
//! every call, in deadline order.
//!
//! [`advance`]: PageController::advance

use std::time::Duration;

use tracing::{debug, info};

use super::geometry::{PageLayout, Viewport};
use super::gesture::{
    Direction, Edges, GestureStep, Modality, Resistance, ResistanceAccumulator, TouchTracker,
};
use super::intro::{IntroController, IntroPhase};
use super::scroll_anim::ScrollAnimation;
use super::section::{dominant_section, Dominance, SECTION_REGISTRY};
use super::spy::{chrome_state, ChromeState};
use super::timeline::Timeline;
use super::tuning::Tuning;

// ───────────────────────────────────────── types ─────────────

/// One-shot timers the controller arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    LoaderFade,
    ShowIntro,
    Reveal,
    IntroTeardown,
    WheelIdle,
    ReleaseNavLock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderState {
    #[default]
    Visible,
    Fading,
    Hidden,
}

/// Lifecycle of the intro overlay as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntroOverlay {
    #[default]
    Hidden,
    Shown,
    /// Reveal happened; overlay is animating away.
    Finishing,
    Gone,
}

/// What the host should do with the input event that produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Default prevented: the page must not scroll natively.
    Suppressed,
    /// Let the page scroll natively by the step delta.
    PassThrough,
    /// Not handled at all (page locked or modal open); nothing scrolls.
    Ignored,
}

/// Anchor-style jumps that bypass gesture resistance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpTarget {
    /// A named section (navbar link).
    Section(String),
    /// Document top (back-to-top button).
    Top,
    /// The hero's "scroll down" hint.
    ScrollHint,
}

/// Notable state changes, drained by the host after each call.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    LoaderFading,
    IntroShown,
    WelcomeStarted,
    /// Page unlocked; hero entrance may start.
    Revealed,
    IntroGone,
    TransitionStarted { from: Option<String>, to: String },
    TransitionSettled,
}

/// Section the hero hint scrolls to.
const SCROLL_HINT_TARGET: &str = "impression";
/// Transition target name for the document top.
const TOP: &str = "top";

// ───────────────────────────────────────── controller ────────

#[derive(Debug)]
pub struct PageController {
    tuning: Tuning,
    registry: &'static [&'static str],
    page: PageLayout,
    viewport: Viewport,

    intro: IntroController,
    intro_enabled: bool,
    intro_overlay: IntroOverlay,
    loader: LoaderState,
    /// Page-scroll lock held from intro show until the reveal.
    scroll_locked: bool,
    revealed_at: Option<Duration>,

    /// External signal from the modal component.
    modal_open: bool,

    /// True only while a section transition is in flight.
    nav_lock: bool,
    /// Modality whose resistance launched the in-flight transition.
    lock_owner: Option<Modality>,
    scroll_anim: Option<ScrollAnimation>,
    /// Section (or [`TOP`]) the in-flight animation is heading for.
    anim_target: Option<String>,

    wheel: ResistanceAccumulator,
    touch: ResistanceAccumulator,
    touch_tracker: TouchTracker,

    timers: Timeline<Timer>,
    events: Vec<PageEvent>,
}

impl PageController {
    /// Controller for `page` seen through a viewport `viewport_height` tall,
    /// navigating the standard section registry.
    pub fn new(tuning: Tuning, page: PageLayout, viewport_height: f64, intro_enabled: bool) -> Self {
        Self::with_registry(tuning, SECTION_REGISTRY, page, viewport_height, intro_enabled)
    }

    pub fn with_registry(
        tuning: Tuning,
        registry: &'static [&'static str],
        page: PageLayout,
        viewport_height: f64,
        intro_enabled: bool,
    ) -> Self {
        let viewport = Viewport::new(viewport_height, page.height());
        Self {
            intro: IntroController::new(&tuning),
            tuning,
            registry,
            page,
            viewport,
            intro_enabled,
            intro_overlay: IntroOverlay::Hidden,
            loader: LoaderState::Visible,
            scroll_locked: true,
            revealed_at: None,
            modal_open: false,
            nav_lock: false,
            lock_owner: None,
            scroll_anim: None,
            anim_target: None,
            wheel: ResistanceAccumulator::default(),
            touch: ResistanceAccumulator::default(),
            touch_tracker: TouchTracker::default(),
            timers: Timeline::new(),
            events: Vec::new(),
        }
    }

    // ── accessors ────────────────────────────────────────────────

    pub fn page(&self) -> &PageLayout {
        &self.page
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn phase(&self) -> IntroPhase {
        self.intro.phase()
    }

    pub fn intro(&self) -> &IntroController {
        &self.intro
    }

    pub fn intro_overlay(&self) -> IntroOverlay {
        self.intro_overlay
    }

    pub fn loader(&self) -> LoaderState {
        self.loader
    }

    #[cfg(test)]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[cfg(test)]
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn nav_locked(&self) -> bool {
        self.nav_lock
    }

    #[cfg(test)]
    pub fn resistance(&self, modality: Modality) -> f64 {
        match modality {
            Modality::Wheel => self.wheel.value(),
            Modality::Touch => self.touch.value(),
        }
    }

    pub fn dominant(&self) -> Option<Dominance<'_>> {
        dominant_section(self.registry, &self.page, &self.viewport)
    }

    pub fn chrome(&self) -> ChromeState {
        chrome_state(&self.page, self.viewport.scroll_offset())
    }

    /// Hero entrance progress in `[0, 1]`; 0 before the reveal.
    pub fn hero_fade(&self, now: Duration) -> f64 {
        let Some(at) = self.revealed_at else {
            return 0.0;
        };
        let fade = self.tuning.hero_fade.as_secs_f64();
        if fade <= 0.0 {
            return 1.0;
        }
        (now.saturating_sub(at).as_secs_f64() / fade).clamp(0.0, 1.0)
    }

    /// True when nothing will change without new input.
    pub fn is_idle(&self) -> bool {
        !self.intro.needs_frame() && self.scroll_anim.is_none() && self.timers.next_deadline().is_none()
    }

    pub fn drain_events(&mut self) -> Vec<PageEvent> {
        std::mem::take(&mut self.events)
    }

    // ── external signals ─────────────────────────────────────────

    /// Document finished loading: start the loader countdown that ends in
    /// the intro being shown.
    pub fn page_ready(&mut self, now: Duration) {
        self.loader = LoaderState::Visible;
        let fade_at = now + self.tuning.loader_min_visible;
        self.timers.schedule(Timer::LoaderFade, fade_at);
        self.timers.schedule(Timer::ShowIntro, fade_at + self.tuning.loader_fade);
        debug!(?fade_at, "page ready, loader countdown armed");
    }

    pub fn set_modal_open(&mut self, open: bool) {
        if self.modal_open != open {
            debug!(open, "modal state changed");
        }
        self.modal_open = open;
    }

    /// Swap in a new layout (terminal resize), keeping the offset in range.
    /// An in-flight transition lands at once on its target's new position;
    /// the navigation lock still runs its full duration.
    pub fn relayout(&mut self, page: PageLayout, viewport_height: f64) {
        self.viewport.resize(viewport_height, page.height());
        self.page = page;

        if self.scroll_anim.take().is_some() {
            let doc_top = self.anim_target.as_deref().and_then(|id| self.doc_top_of(id));
            if let Some(doc_top) = doc_top {
                self.viewport
                    .scroll_to(doc_top - self.tuning.header_clearance);
            }
            debug!(to = ?self.anim_target, "transition settled early by relayout");
        }
    }

    fn doc_top_of(&self, id: &str) -> Option<f64> {
        if id == TOP {
            Some(0.0)
        } else {
            self.page.get(id).map(|s| s.doc_top)
        }
    }

    /// Native scrolling for a passed-through gesture.
    pub fn scroll_natively(&mut self, delta: f64) {
        if self.scroll_locked || self.modal_open {
            return;
        }
        self.viewport.scroll_by(delta);
    }

    // ── frame loop ───────────────────────────────────────────────

    /// Fire due timers, then run one frame of every active frame loop.
    pub fn advance(&mut self, now: Duration) {
        self.fire_due_timers(now);

        if let Some(frame) = self.intro.tick() {
            if frame.welcome {
                let reveal_at = now + self.tuning.reveal_delay;
                self.timers.schedule(Timer::Reveal, reveal_at);
                self.events.push(PageEvent::WelcomeStarted);
                info!(?reveal_at, "intro saturated, welcome sequence started");
            }
        }

        let settled = match &self.scroll_anim {
            Some(anim) => !anim.step(&mut self.viewport, now),
            None => false,
        };
        if settled {
            self.scroll_anim = None;
            self.anim_target = None;
        }
    }

    fn fire_due_timers(&mut self, now: Duration) {
        while let Some((timer, due)) = self.timers.pop_due(now) {
            match timer {
                Timer::LoaderFade => {
                    self.loader = LoaderState::Fading;
                    self.events.push(PageEvent::LoaderFading);
                }
                Timer::ShowIntro => {
                    self.loader = LoaderState::Hidden;
                    if self.intro_enabled && self.intro.show() {
                        self.scroll_locked = true;
                        self.intro_overlay = IntroOverlay::Shown;
                        self.events.push(PageEvent::IntroShown);
                        info!("intro shown, page scroll locked");
                    } else {
                        // No intro UI: the page is usable right away.
                        self.finish_intro(due, false);
                    }
                }
                Timer::Reveal => self.finish_intro(due, true),
                Timer::IntroTeardown => {
                    self.intro_overlay = IntroOverlay::Gone;
                    self.events.push(PageEvent::IntroGone);
                }
                Timer::WheelIdle => {
                    if self.wheel.value() != 0.0 {
                        debug!(value = self.wheel.value(), "wheel idle, resistance reset");
                    }
                    self.wheel.reset();
                }
                Timer::ReleaseNavLock => {
                    // Land exactly before unlocking: a gesture may arrive
                    // before the next frame.
                    if let Some(anim) = self.scroll_anim.take() {
                        anim.step(&mut self.viewport, due);
                    }
                    self.anim_target = None;
                    self.nav_lock = false;
                    match self.lock_owner.take() {
                        Some(Modality::Wheel) => self.wheel.reset(),
                        Some(Modality::Touch) => self.touch.reset(),
                        None => {}
                    }
                    self.events.push(PageEvent::TransitionSettled);
                    debug!(?due, "navigation lock released");
                }
            }
        }
    }

    fn finish_intro(&mut self, at: Duration, with_overlay: bool) {
        if !self.intro.complete() {
            return;
        }
        self.scroll_locked = false;
        self.revealed_at = Some(at);
        if with_overlay {
            self.intro_overlay = IntroOverlay::Finishing;
            self.timers
                .schedule(Timer::IntroTeardown, at + self.tuning.intro_teardown);
        } else {
            self.intro_overlay = IntroOverlay::Gone;
        }
        self.events.push(PageEvent::Revealed);
        info!("intro completed, page unlocked");
    }

    // ── gestures ─────────────────────────────────────────────────

    /// Wheel event with vertical delta in wheel units.
    pub fn on_wheel(&mut self, delta: f64, now: Duration) -> Disposition {
        self.fire_due_timers(now);
        self.route(GestureStep::wheel(delta), now)
    }

    /// Pointer pressed at document-independent screen `y` (pixels).
    pub fn on_touch_start(&mut self, y: f64, now: Duration) {
        self.fire_due_timers(now);
        self.touch_tracker.start(y);
        self.touch.reset();
    }

    /// Pointer dragged to `y`.  The step delta is the travel since the
    /// previous position.
    pub fn on_touch_move(&mut self, y: f64, now: Duration) -> Disposition {
        self.fire_due_timers(now);
        let Some(delta) = self.touch_tracker.step(y) else {
            return Disposition::Ignored;
        };
        self.route(GestureStep::touch(delta), now)
    }

    pub fn on_touch_end(&mut self) {
        self.touch_tracker.end();
    }

    fn route(&mut self, step: GestureStep, now: Duration) -> Disposition {
        match self.intro.phase() {
            IntroPhase::NotStarted => return Disposition::Ignored,
            IntroPhase::Active => {
                self.intro.on_gesture_delta(step.delta);
                return Disposition::Suppressed;
            }
            IntroPhase::Completed => {}
        }

        if self.modal_open {
            return Disposition::Ignored;
        }

        if self.nav_lock {
            return Disposition::Suppressed;
        }

        if step.delta.abs() < step.modality.min_step(&self.tuning) {
            return Disposition::PassThrough;
        }

        if step.modality == Modality::Wheel {
            self.timers
                .schedule(Timer::WheelIdle, now + self.tuning.wheel_idle_reset);
        }

        let Some(dominance) = dominant_section(self.registry, &self.page, &self.viewport) else {
            return Disposition::PassThrough;
        };
        let rect = self.viewport.rect_of(dominance.section);
        let edges = Edges::of(rect, self.viewport.height, &self.tuning);
        let from = dominance.section.id.clone();
        let next = dominance.next().map(|s| (s.id.clone(), s.doc_top));
        let prev = dominance.prev().map(|s| (s.id.clone(), s.doc_top));

        let threshold = step.modality.threshold(&self.tuning);
        let acc = match step.modality {
            Modality::Wheel => &mut self.wheel,
            Modality::Touch => &mut self.touch,
        };

        match acc.resist(step, edges, next.is_some(), prev.is_some(), threshold) {
            Resistance::Native => Disposition::PassThrough,
            Resistance::Absorbed => Disposition::Suppressed,
            Resistance::Trigger(direction) => {
                let target = match direction {
                    Direction::Forward => next,
                    Direction::Backward => prev,
                };
                if let Some((to, doc_top)) = target {
                    debug!(
                        modality = step.modality.label(),
                        %from,
                        %to,
                        "resistance threshold crossed"
                    );
                    self.begin_transition(
                        Some(from),
                        to,
                        doc_top,
                        Some(step.modality),
                        self.tuning.transition,
                        now,
                    );
                }
                Disposition::Suppressed
            }
        }
    }

    // ── transitions ──────────────────────────────────────────────

    /// Animated jump triggered by a link or button.  Refused (returns
    /// `false`) before the reveal, while a modal is open, while another
    /// transition is running, or when the target section is missing.
    pub fn jump_to(&mut self, target: JumpTarget, now: Duration) -> bool {
        self.fire_due_timers(now);
        if self.intro.phase() != IntroPhase::Completed || self.modal_open || self.nav_lock {
            return false;
        }

        let (to, doc_top, duration) = match &target {
            JumpTarget::Top => (TOP.to_string(), 0.0, self.tuning.anchor_jump),
            JumpTarget::Section(id) => match self.page.get(id) {
                Some(s) => (s.id.clone(), s.doc_top, self.tuning.anchor_jump),
                None => return false,
            },
            JumpTarget::ScrollHint => match self.page.get(SCROLL_HINT_TARGET) {
                Some(s) => (s.id.clone(), s.doc_top, self.tuning.transition),
                None => return false,
            },
        };

        let from = self.dominant().map(|d| d.section.id.clone());
        self.begin_transition(from, to, doc_top, None, duration, now);
        true
    }

    fn begin_transition(
        &mut self,
        from: Option<String>,
        to: String,
        doc_top: f64,
        owner: Option<Modality>,
        duration: Duration,
        now: Duration,
    ) {
        self.nav_lock = true;
        self.lock_owner = owner;
        match owner {
            Some(Modality::Wheel) => self.wheel.reset(),
            Some(Modality::Touch) => self.touch.reset(),
            None => {}
        }

        self.scroll_anim = Some(ScrollAnimation::toward(
            doc_top,
            self.tuning.header_clearance,
            &self.viewport,
            now,
            duration,
            self.tuning.overshoot,
        ));
        self.anim_target = Some(to.clone());
        self.timers.schedule(Timer::ReleaseNavLock, now + duration);

        info!(?from, %to, ?duration, "section transition started");
        self.events.push(PageEvent::TransitionStarted { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn page() -> PageLayout {
        PageLayout::stacked([
            ("hero", 1000.0),
            ("impression", 1200.0),
            ("culture", 1000.0),
            ("gardens", 1000.0),
            ("cuisine", 1000.0),
        ])
    }

    /// Controller already past the reveal (intro disabled), at time 2300ms.
    fn revealed() -> (PageController, Duration) {
        let mut c = PageController::new(Tuning::default(), page(), 1000.0, false);
        c.page_ready(ms(0));
        c.advance(ms(2300));
        assert_eq!(c.phase(), IntroPhase::Completed);
        c.drain_events();
        (c, ms(2300))
    }

    /// Advance frame by frame from `from` until `until` (inclusive).
    fn run_frames(c: &mut PageController, from: Duration, until: Duration) -> Duration {
        let mut now = from;
        while now < until {
            now = (now + FRAME).min(until);
            c.advance(now);
        }
        now
    }

    // ── intro ────────────────────────────────────────────────────

    #[test]
    fn loader_then_intro_then_reveal() {
        let mut c = PageController::new(Tuning::default(), page(), 1000.0, true);
        c.page_ready(ms(0));

        // Gestures during the loader are ignored.
        assert_eq!(c.on_wheel(1000.0, ms(100)), Disposition::Ignored);
        assert_eq!(c.intro().progress().target(), 0.0);

        c.advance(ms(1500));
        assert_eq!(c.loader(), LoaderState::Fading);
        c.advance(ms(2300));
        assert_eq!(c.loader(), LoaderState::Hidden);
        assert_eq!(c.phase(), IntroPhase::Active);
        assert!(c.scroll_locked());

        for delta in [1000.0, 2000.0, 1000.0] {
            assert_eq!(c.on_wheel(delta, ms(2300)), Disposition::Suppressed);
        }
        assert_eq!(c.intro().progress().target(), 100.0);

        let mut now = ms(2300);
        while !c.intro().welcome_started() {
            now += FRAME;
            c.advance(now);
            assert!(now < ms(10_000), "welcome never started");
        }
        let welcome_at = now;
        assert_eq!(c.intro().progress().current(), 100.0);
        assert_eq!(c.phase(), IntroPhase::Active);

        // Gestures during the reading delay cannot abort it.
        assert_eq!(c.on_wheel(-3000.0, welcome_at + ms(10)), Disposition::Suppressed);
        c.advance(welcome_at + ms(3499));
        assert_eq!(c.phase(), IntroPhase::Active);
        c.advance(welcome_at + ms(3500));
        assert_eq!(c.phase(), IntroPhase::Completed);
        assert!(!c.scroll_locked());
        assert_eq!(c.intro_overlay(), IntroOverlay::Finishing);

        c.advance(welcome_at + ms(4500));
        assert_eq!(c.intro_overlay(), IntroOverlay::Gone);

        let events = c.drain_events();
        let count = |e: &PageEvent| events.iter().filter(|x| *x == e).count();
        assert_eq!(count(&PageEvent::WelcomeStarted), 1);
        assert_eq!(count(&PageEvent::Revealed), 1);
        assert_eq!(count(&PageEvent::IntroShown), 1);

        // Completed intro never re-engages; wheel now drives navigation.
        let d = c.on_wheel(60.0, welcome_at + ms(5000));
        assert_ne!(d, Disposition::Ignored);
        assert_eq!(c.intro().progress().target(), 100.0);
    }

    #[test]
    fn touch_also_unrolls_the_intro() {
        let mut c = PageController::new(Tuning::default(), page(), 1000.0, true);
        c.page_ready(ms(0));
        c.advance(ms(2300));
        c.on_touch_start(900.0, ms(2300));
        assert_eq!(c.on_touch_move(400.0, ms(2310)), Disposition::Suppressed);
        assert!((c.intro().progress().target() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn hero_fades_in_after_reveal() {
        let (c, now) = revealed();
        assert_eq!(c.hero_fade(now), 0.0);
        assert!((c.hero_fade(now + ms(500)) - 0.5).abs() < 1e-9);
        assert_eq!(c.hero_fade(now + ms(5000)), 1.0);
    }

    // ── navigation ───────────────────────────────────────────────

    #[test]
    fn four_wheel_steps_at_bottom_edge_trigger_one_transition() {
        let (mut c, t0) = revealed();
        // Hero fills the viewport; its bottom sits on the viewport bottom.
        for i in 0..3 {
            assert_eq!(c.on_wheel(60.0, t0 + ms(i * 20)), Disposition::Suppressed);
        }
        assert_eq!(c.resistance(Modality::Wheel), 180.0);
        assert!(!c.nav_locked());

        assert_eq!(c.on_wheel(60.0, t0 + ms(60)), Disposition::Suppressed);
        assert!(c.nav_locked());
        assert_eq!(c.resistance(Modality::Wheel), 0.0);

        // Fifth step during the lock: discarded, no growth.
        assert_eq!(c.on_wheel(60.0, t0 + ms(80)), Disposition::Suppressed);
        assert_eq!(c.resistance(Modality::Wheel), 0.0);

        let started = c
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, PageEvent::TransitionStarted { .. }))
            .count();
        assert_eq!(started, 1);

        let end = run_frames(&mut c, t0 + ms(60), t0 + ms(60 + 1500));
        assert!(!c.nav_locked());
        assert_eq!(c.viewport().scroll_offset(), 920.0);
        assert_eq!(c.dominant().map(|d| d.section.id.clone()).as_deref(), Some("impression"));

        // Impression is taller than the viewport: forward wheel scrolls natively.
        assert_eq!(c.on_wheel(60.0, end + ms(10)), Disposition::PassThrough);
    }

    #[test]
    fn lock_lasts_transition_duration_within_a_frame() {
        let (mut c, t0) = revealed();
        c.on_wheel(250.0, t0);
        assert!(c.nav_locked());

        let mut now = t0;
        let mut locked_for = Duration::ZERO;
        while c.nav_locked() {
            now += FRAME;
            c.advance(now);
            if c.nav_locked() {
                locked_for = now - t0;
            }
            assert!(now < t0 + ms(3000));
        }
        assert!(locked_for < ms(1500));
        assert!(now - t0 <= ms(1500) + FRAME);
    }

    #[test]
    fn wheel_idle_resets_resistance() {
        let (mut c, t0) = revealed();
        c.on_wheel(75.0, t0);
        c.on_wheel(75.0, t0 + ms(10));
        assert_eq!(c.resistance(Modality::Wheel), 150.0);

        // 90 ms of silence: still armed.
        c.advance(t0 + ms(100));
        assert_eq!(c.resistance(Modality::Wheel), 150.0);
        // Idle timeout (200 ms after the last step) clears it.
        c.advance(t0 + ms(210));
        assert_eq!(c.resistance(Modality::Wheel), 0.0);

        // Next burst starts from scratch: 75 alone does not trigger.
        c.on_wheel(75.0, t0 + ms(400));
        assert!(!c.nav_locked());
    }

    #[test]
    fn small_wheel_steps_pass_through_untouched() {
        let (mut c, t0) = revealed();
        c.on_wheel(60.0, t0);
        assert_eq!(c.on_wheel(4.0, t0 + ms(5)), Disposition::PassThrough);
        assert_eq!(c.resistance(Modality::Wheel), 60.0);
    }

    #[test]
    fn backward_from_first_section_scrolls_natively() {
        let (mut c, t0) = revealed();
        assert_eq!(c.on_wheel(-300.0, t0), Disposition::PassThrough);
        assert!(!c.nav_locked());
        assert_eq!(c.resistance(Modality::Wheel), 0.0);
    }

    #[test]
    fn backward_transition_from_section_top() {
        let (mut c, t0) = revealed();
        assert!(c.jump_to(JumpTarget::Section("culture".into()), t0));
        let now = run_frames(&mut c, t0, t0 + ms(1200));
        // culture top sits just below the header.
        assert_eq!(c.viewport().scroll_offset(), 2120.0);
        assert!(!c.nav_locked());

        for i in 0..2 {
            assert_eq!(c.on_wheel(-120.0, now + ms(i * 20)), Disposition::Suppressed);
        }
        assert!(c.nav_locked());
        run_frames(&mut c, now + ms(20), now + ms(20 + 1500));
        assert_eq!(c.viewport().scroll_offset(), 920.0);
    }

    #[test]
    fn gesture_at_lock_release_sees_the_settled_offset() {
        let tall = PageLayout::stacked([("hero", 1000.0), ("impression", 2000.0), ("culture", 1000.0)]);
        let mut c = PageController::new(Tuning::default(), tall, 1000.0, false);
        c.page_ready(ms(0));
        c.advance(ms(2300));
        let t0 = ms(2300);

        c.on_wheel(250.0, t0);
        assert!(c.nav_locked());
        run_frames(&mut c, t0, t0 + ms(1488));
        assert_ne!(c.viewport().scroll_offset(), 920.0);

        // No frame between the lock deadline and this step.
        let d = c.on_wheel(100.0, t0 + ms(1500));
        assert!(!c.nav_locked());
        assert_eq!(c.viewport().scroll_offset(), 920.0);
        assert_eq!(d, Disposition::PassThrough);

        c.scroll_natively(100.0);
        c.advance(t0 + ms(1516));
        assert_eq!(c.viewport().scroll_offset(), 1020.0);
    }

    #[test]
    fn relayout_mid_transition_lands_on_the_new_target_position() {
        let (mut c, t0) = revealed();
        assert!(c.jump_to(JumpTarget::Section("culture".into()), t0));
        run_frames(&mut c, t0, t0 + ms(300));

        let taller_hero = PageLayout::stacked([
            ("hero", 1500.0),
            ("impression", 1200.0),
            ("culture", 1000.0),
            ("gardens", 1000.0),
            ("cuisine", 1000.0),
        ]);
        c.relayout(taller_hero, 1000.0);
        assert_eq!(c.viewport().scroll_offset(), 2620.0);
        assert!(c.nav_locked());

        run_frames(&mut c, t0 + ms(300), t0 + ms(1200));
        assert_eq!(c.viewport().scroll_offset(), 2620.0);
        assert!(!c.nav_locked());
        assert!(c.is_idle());
    }

    #[test]
    fn touch_drag_uses_its_own_threshold() {
        let (mut c, t0) = revealed();
        c.on_touch_start(600.0, t0);
        assert_eq!(c.on_touch_move(570.0, t0 + ms(10)), Disposition::Suppressed);
        assert_eq!(c.on_touch_move(540.0, t0 + ms(20)), Disposition::Suppressed);
        assert_eq!(c.resistance(Modality::Touch), 60.0);
        assert_eq!(c.on_touch_move(510.0, t0 + ms(30)), Disposition::Suppressed);
        assert!(c.nav_locked());
        // Locked: further drags are suppressed.
        assert_eq!(c.on_touch_move(400.0, t0 + ms(40)), Disposition::Suppressed);
        assert_eq!(c.resistance(Modality::Touch), 0.0);
        // Wheel resistance is untouched by touch input.
        assert_eq!(c.resistance(Modality::Wheel), 0.0);
    }

    #[test]
    fn touch_move_without_start_is_ignored() {
        let (mut c, t0) = revealed();
        assert_eq!(c.on_touch_move(300.0, t0), Disposition::Ignored);
    }

    #[test]
    fn modal_blocks_everything() {
        let (mut c, t0) = revealed();
        c.set_modal_open(true);
        for i in 0..10 {
            assert_eq!(c.on_wheel(100.0, t0 + ms(i)), Disposition::Ignored);
        }
        assert_eq!(c.resistance(Modality::Wheel), 0.0);
        assert!(!c.jump_to(JumpTarget::Top, t0));
        c.scroll_natively(500.0);
        assert_eq!(c.viewport().scroll_offset(), 0.0);

        c.set_modal_open(false);
        c.scroll_natively(500.0);
        assert_eq!(c.viewport().scroll_offset(), 500.0);
    }

    #[test]
    fn missing_sections_degrade_to_native_scrolling() {
        let mut c = PageController::new(
            Tuning::default(),
            PageLayout::stacked([("footer", 3000.0)]),
            1000.0,
            false,
        );
        c.page_ready(ms(0));
        c.advance(ms(2300));
        assert!(c.dominant().is_none());
        assert_eq!(c.on_wheel(500.0, ms(2400)), Disposition::PassThrough);
        assert!(!c.jump_to(JumpTarget::ScrollHint, ms(2400)));
        assert!(!c.jump_to(JumpTarget::Section("culture".into()), ms(2400)));
    }

    #[test]
    fn jumps_are_refused_before_reveal_and_during_transitions() {
        let mut c = PageController::new(Tuning::default(), page(), 1000.0, true);
        c.page_ready(ms(0));
        c.advance(ms(2300));
        assert!(!c.jump_to(JumpTarget::ScrollHint, ms(2400)));

        let (mut c, t0) = revealed();
        assert!(c.jump_to(JumpTarget::ScrollHint, t0));
        assert!(!c.jump_to(JumpTarget::Top, t0 + ms(100)));
        run_frames(&mut c, t0, t0 + ms(1500));
        assert_eq!(c.viewport().scroll_offset(), 920.0);
        assert!(c.jump_to(JumpTarget::Top, t0 + ms(1600)));
        run_frames(&mut c, t0 + ms(1600), t0 + ms(2800));
        assert_eq!(c.viewport().scroll_offset(), 0.0);
        assert!(c.is_idle());
    }

    #[test]
    fn chrome_tracks_scroll() {
        let (mut c, t0) = revealed();
        assert_eq!(c.chrome().active_anchor.as_deref(), Some("hero"));
        c.jump_to(JumpTarget::Section("gardens".into()), t0);
        run_frames(&mut c, t0, t0 + ms(1200));
        let chrome = c.chrome();
        assert!(chrome.navbar_condensed && chrome.back_to_top_visible);
        assert_eq!(chrome.active_anchor.as_deref(), Some("gardens"));
    }
}

//! Input handling: maps key/mouse events to controller calls.
//!
//! The terminal plays the part of the browser: wheel notches become wheel
//! deltas, a held left button becomes a touch drag, and whenever the
//! controller passes a gesture through, the "native" scroll is applied here.

use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use crate::core::controller::{Disposition, JumpTarget, PageEvent};
use crate::core::intro::IntroPhase;
use crate::ui::layout::AppLayout;

use super::content::SECTIONS;
use super::state::AppState;

/// Status-bar hint once the page is unlocked.
pub const NAV_HINT: &str =
    "wheel/j/k: scroll | drag: swipe | 1-5: sections | t: top | m: details | q: quit";

// ── frame ───────────────────────────────────────────────────────

/// Advance animations and timers to `now`.  Requests a redraw unless the
/// page was and stays at rest.
pub fn handle_frame(state: &mut AppState, now: Duration) {
    state.frame = state.frame.wrapping_add(1);
    let was_busy = !state.controller.is_idle();
    state.controller.advance(now);
    absorb_events(state);
    if was_busy || !state.controller.is_idle() || state.controller.hero_fade(now) < 1.0 {
        state.redraw = true;
    }
}

/// Relayout for a new terminal size.
pub fn handle_resize(state: &mut AppState, width: u16, height: u16) {
    debug!(width, height, "terminal resized");
    state.resize(width, height);
    state.redraw = true;
}

/// Turn controller events into status-bar messages.
fn absorb_events(state: &mut AppState) {
    for event in state.controller.drain_events() {
        debug!(?event, "page event");
        match event {
            PageEvent::IntroShown => {
                state.status_message = Some("Scroll or drag to unroll the scroll".into());
            }
            PageEvent::WelcomeStarted => {
                state.status_message = Some("Welcome".into());
            }
            PageEvent::Revealed => {
                state.status_message = None;
            }
            PageEvent::TransitionStarted { to, .. } => {
                let label = SECTIONS
                    .iter()
                    .find(|s| s.id == to)
                    .map_or(to.as_str(), |s| s.nav);
                state.status_message = Some(format!("→ {label}"));
            }
            PageEvent::TransitionSettled => {
                state.status_message = None;
            }
            PageEvent::LoaderFading | PageEvent::IntroGone => {}
        }
    }
}

// ── keys ────────────────────────────────────────────────────────

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Duration) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    state.redraw = true;

    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.modal_section.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char('q') => {
                close_modal(state);
            }
            _ => {}
        }
        return;
    }

    let notch = state.config.wheel_notch_delta;
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => wheel(state, notch, now),
        KeyCode::Up | KeyCode::Char('k') => wheel(state, -notch, now),
        KeyCode::Home | KeyCode::Char('t') => jump(state, JumpTarget::Top, now),
        KeyCode::Enter => {
            let on_hero = state
                .controller
                .dominant()
                .is_some_and(|d| d.section.id == "hero");
            if on_hero {
                jump(state, JumpTarget::ScrollHint, now);
            }
        }
        KeyCode::Char('m') => open_modal(state),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(section) = SECTIONS.get(idx) {
                jump(state, JumpTarget::Section(section.id.to_string()), now);
            }
        }
        _ => {}
    }
}

// ── mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Duration) {
    state.redraw = true;
    if state.modal_section.is_some() {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            close_modal(state);
        }
        return;
    }

    let notch = state.config.wheel_notch_delta;
    match mouse.kind {
        MouseEventKind::ScrollDown => wheel(state, notch, now),
        MouseEventKind::ScrollUp => wheel(state, -notch, now),
        MouseEventKind::Down(MouseButton::Left) => {
            if handle_chrome_click(state, mouse.column, mouse.row, now) {
                return;
            }
            let y = state.row_to_px(mouse.row);
            state.drag_y = Some(y);
            state.controller.on_touch_start(y, now);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let y = state.row_to_px(mouse.row);
            let Some(prev) = state.drag_y.replace(y) else {
                return;
            };
            let disposition = state.controller.on_touch_move(y, now);
            apply(state, disposition, prev - y);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            state.drag_y = None;
            state.controller.on_touch_end();
        }
        _ => {}
    }
}

/// Clicks on the navbar links or the back-to-top button.  Returns whether
/// the click was consumed.
fn handle_chrome_click(state: &mut AppState, col: u16, row: u16, now: Duration) -> bool {
    if state.controller.phase() != IntroPhase::Completed {
        return false;
    }
    let layout = AppLayout::new(state.term_width, state.term_height, state.header_rows());

    for (idx, rect) in layout.nav_item_rects().into_iter().enumerate() {
        if point_in_rect(rect, col, row) {
            if let Some(section) = SECTIONS.get(idx) {
                jump(state, JumpTarget::Section(section.id.to_string()), now);
            }
            return true;
        }
    }

    if state.controller.chrome().back_to_top_visible
        && point_in_rect(layout.back_to_top_area, col, row)
    {
        jump(state, JumpTarget::Top, now);
        return true;
    }
    false
}

// ── helpers ─────────────────────────────────────────────────────

fn wheel(state: &mut AppState, delta: f64, now: Duration) {
    let disposition = state.controller.on_wheel(delta, now);
    apply(state, disposition, delta);
}

/// Play the browser's part for a gesture the controller did not consume.
fn apply(state: &mut AppState, disposition: Disposition, delta: f64) {
    match disposition {
        Disposition::PassThrough => state.controller.scroll_natively(delta),
        Disposition::Suppressed | Disposition::Ignored => {}
    }
    absorb_events(state);
}

fn jump(state: &mut AppState, target: JumpTarget, now: Duration) {
    if !state.controller.jump_to(target, now) {
        debug!(locked = state.controller.nav_locked(), "jump refused");
    }
    absorb_events(state);
}

fn open_modal(state: &mut AppState) {
    if state.controller.phase() != IntroPhase::Completed {
        return;
    }
    let idx = state.controller.dominant().and_then(|d| {
        let id = d.section.id.clone();
        SECTIONS.iter().position(|s| s.id == id)
    });
    if let Some(idx) = idx {
        state.modal_section = Some(idx);
        state.controller.set_modal_open(true);
    }
}

fn close_modal(state: &mut AppState) {
    state.modal_section = None;
    state.controller.set_modal_open(false);
}

fn point_in_rect(area: ratatui::layout::Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 2,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// 120x41 terminal (40 page rows = 800px), intro skipped, revealed.
    fn revealed() -> (AppState, Duration) {
        let config = AppConfig {
            skip_intro: true,
            ..AppConfig::default()
        };
        let mut state = AppState::new(config, 120, 41);
        state.controller.page_ready(ms(0));
        handle_frame(&mut state, ms(2300));
        assert_eq!(state.controller.phase(), IntroPhase::Completed);
        (state, ms(2300))
    }

    fn frames(state: &mut AppState, from: Duration, to: Duration) {
        let mut now = from;
        while now < to {
            now = (now + ms(16)).min(to);
            handle_frame(state, now);
        }
    }

    #[test]
    fn three_wheel_notches_page_to_the_next_section() {
        let (mut state, t0) = revealed();
        let down = mouse(MouseEventKind::ScrollDown, 10);
        handle_mouse(&mut state, down, t0);
        handle_mouse(&mut state, down, t0 + ms(30));
        assert!(!state.controller.nav_locked());
        handle_mouse(&mut state, down, t0 + ms(60));
        assert!(state.controller.nav_locked());
        assert_eq!(state.status_message.as_deref(), Some("→ Impression"));

        frames(&mut state, t0 + ms(60), t0 + ms(1560));
        // impression top (800px) minus 80px header.
        assert_eq!(state.controller.viewport().scroll_offset(), 720.0);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn keys_jump_to_sections() {
        let (mut state, t0) = revealed();
        handle_key(&mut state, key(KeyCode::Char('3')), t0);
        frames(&mut state, t0, t0 + ms(1200));
        let culture = state.controller.page().get("culture").map(|s| s.doc_top);
        assert_eq!(
            Some(state.controller.viewport().scroll_offset()),
            culture.map(|t| t - 80.0)
        );
        assert_eq!(
            state.controller.chrome().active_anchor.as_deref(),
            Some("culture")
        );
    }

    #[test]
    fn modal_swallows_gestures_until_closed() {
        let (mut state, t0) = revealed();
        handle_key(&mut state, key(KeyCode::Char('m')), t0);
        assert_eq!(state.modal_section, Some(0));
        assert!(state.controller.modal_open());

        for i in 0..5 {
            handle_mouse(&mut state, mouse(MouseEventKind::ScrollDown, 5), t0 + ms(i * 10));
        }
        assert!(!state.controller.nav_locked());
        assert_eq!(state.controller.viewport().scroll_offset(), 0.0);

        handle_key(&mut state, key(KeyCode::Esc), t0 + ms(100));
        assert!(state.modal_section.is_none());
        assert!(!state.controller.modal_open());
        assert!(!state.should_quit);
    }

    #[test]
    fn drag_away_from_an_edge_scrolls_natively() {
        let (mut state, t0) = revealed();
        // Narrow terminal: impression is taller than the viewport.
        state.resize(30, 41);
        handle_key(&mut state, key(KeyCode::Char('2')), t0);
        frames(&mut state, t0, t0 + ms(1200));
        let settled = state.controller.viewport().scroll_offset();

        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 30), t0 + ms(1300));
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 28), t0 + ms(1310));
        assert_eq!(state.controller.viewport().scroll_offset(), settled + 40.0);
        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 28), t0 + ms(1320));
        assert!(state.drag_y.is_none());
    }

    #[test]
    fn frames_at_rest_skip_the_redraw() {
        let (mut state, _) = revealed();
        state.redraw = false;
        handle_frame(&mut state, ms(5000));
        assert!(!state.redraw);

        handle_mouse(&mut state, mouse(MouseEventKind::ScrollDown, 5), ms(5010));
        assert!(state.redraw);
        state.redraw = false;
        // The wheel idle timer is pending: frames keep drawing until it fires.
        handle_frame(&mut state, ms(5026));
        assert!(state.redraw);
    }

    #[test]
    fn intro_consumes_wheel_before_reveal() {
        let mut state = AppState::new(AppConfig::default(), 120, 41);
        state.controller.page_ready(ms(0));
        handle_frame(&mut state, ms(2300));
        assert_eq!(state.controller.phase(), IntroPhase::Active);
        assert!(state.status_message.is_some());

        handle_mouse(&mut state, mouse(MouseEventKind::ScrollDown, 5), ms(2310));
        assert!(state.controller.intro().progress().target() > 0.0);
        assert_eq!(state.controller.viewport().scroll_offset(), 0.0);
        // Section keys do nothing yet.
        handle_key(&mut state, key(KeyCode::Char('4')), ms(2320));
        assert!(!state.controller.nav_locked());
    }
}

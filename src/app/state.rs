//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::core::controller::PageController;

use super::content;

/// Top-level application state.
pub struct AppState {
    /// Intro + navigation state machine; owns the viewport.
    pub controller: PageController,
    pub config: AppConfig,
    /// Reference point for the controller clock.
    started: Instant,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Section whose details are shown in the modal, if open.
    pub modal_section: Option<usize>,
    /// Last pointer row (in pixels) while the left button is held.
    pub drag_y: Option<f64>,
    /// Terminal size the page is laid out for.
    pub term_width: u16,
    pub term_height: u16,
    /// Something changed since the last draw.
    pub redraw: bool,
    /// Monotonically increasing frame counter (drives the loader spinner).
    pub frame: u64,
}

impl AppState {
    pub fn new(config: AppConfig, term_width: u16, term_height: u16) -> Self {
        let (page, viewport_px) = Self::layout_for(&config, term_width, term_height);
        let controller = PageController::new(
            config.tuning.clone(),
            page,
            viewport_px,
            !config.skip_intro,
        );
        Self {
            controller,
            config,
            started: Instant::now(),
            should_quit: false,
            status_message: None,
            modal_section: None,
            drag_y: None,
            term_width,
            term_height,
            redraw: true,
            frame: 0,
        }
    }

    /// Controller time: elapsed since startup.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Rows of the fixed header (navbar) overlaying the page top.
    pub fn header_rows(&self) -> u16 {
        header_rows(&self.config)
    }

    /// Convert a screen row to page-independent pixels.
    pub fn row_to_px(&self, row: u16) -> f64 {
        f64::from(row) * self.config.px_per_row
    }

    /// Rebuild the layout for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.term_width = width;
        self.term_height = height;
        let (page, viewport_px) = Self::layout_for(&self.config, width, height);
        self.controller.relayout(page, viewport_px);
    }

    fn layout_for(
        config: &AppConfig,
        width: u16,
        height: u16,
    ) -> (crate::core::geometry::PageLayout, f64) {
        let rows = height.saturating_sub(1);
        let page = content::build_page(width, rows, header_rows(config), config.px_per_row);
        (page, f64::from(rows) * config.px_per_row)
    }
}

fn header_rows(config: &AppConfig) -> u16 {
    (config.tuning.header_clearance / config.px_per_row).round() as u16
}

//! Layout helpers: split the terminal area into regions.
//!
//! Hit-testing in the input handler uses the same rectangles as the
//! renderer, so both go through [`AppLayout`].

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::content::SECTIONS;

/// Brand shown at the left of the navbar.
pub const BRAND: &str = " SUZHOU ";
/// Label of the back-to-top button.
pub const BACK_TO_TOP: &str = " ▲ Top ";

/// Primary screen layout: the scrolling page with the fixed navbar laid
/// over its top rows, and a bottom status bar.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub page_area: Rect,
    /// Top `header_rows` of the page area.
    pub navbar_area: Rect,
    /// Bottom-right corner of the page area.
    pub back_to_top_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, header_rows: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // page (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);
        let page_area = chunks[0];

        let navbar_area = Rect {
            height: header_rows.min(page_area.height),
            ..page_area
        };

        let button_width = BACK_TO_TOP.chars().count() as u16;
        let back_to_top_area = Rect::new(
            page_area.right().saturating_sub(button_width + 2),
            page_area.bottom().saturating_sub(2).max(page_area.y),
            button_width.min(page_area.width),
            1.min(page_area.height),
        );

        Self {
            page_area,
            navbar_area,
            back_to_top_area,
            status_area: chunks[1],
        }
    }

    /// Layout for a terminal `width` x `height` cells.
    pub fn new(width: u16, height: u16, header_rows: u16) -> Self {
        Self::from_area(Rect::new(0, 0, width, height), header_rows)
    }

    /// Row of the navbar that carries the brand and links.
    pub fn nav_row(&self) -> u16 {
        self.navbar_area.y + self.navbar_area.height.saturating_sub(1) / 2
    }

    /// One rect per section link, in [`SECTIONS`] order.  Links that do not
    /// fit the width are dropped from the end.
    pub fn nav_item_rects(&self) -> Vec<Rect> {
        if self.navbar_area.height == 0 {
            return Vec::new();
        }
        let row = self.nav_row();
        let right = self.navbar_area.right();
        let mut x = self.navbar_area.x + BRAND.chars().count() as u16 + 2;

        let mut rects = Vec::with_capacity(SECTIONS.len());
        for section in SECTIONS {
            let width = section.nav.chars().count() as u16 + 2;
            if x + width > right {
                break;
            }
            rects.push(Rect::new(x, row, width, 1));
            x += width + 1;
        }
        rects
    }
}

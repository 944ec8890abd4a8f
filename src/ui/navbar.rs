//! Fixed navbar over the top of the page, plus the back-to-top button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::app::content::SECTIONS;
use crate::core::spy::ChromeState;

use super::layout::{AppLayout, BACK_TO_TOP, BRAND};
use super::theme::Theme;

pub struct Navbar<'a> {
    pub layout: &'a AppLayout,
    pub chrome: &'a ChromeState,
}

impl Widget for Navbar<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let bar = self.layout.navbar_area;
        if bar.height == 0 {
            return;
        }
        let style = Theme::navbar_style(self.chrome.navbar_condensed);
        if self.chrome.navbar_condensed {
            buf.set_style(bar, style);
        }

        let row = self.layout.nav_row();
        buf.set_line(
            bar.x + 1,
            row,
            &Line::from(Span::styled(BRAND, Theme::brand_style())),
            bar.width.saturating_sub(1),
        );

        let active = self.chrome.active_anchor.as_deref();
        for (rect, section) in self.layout.nav_item_rects().into_iter().zip(SECTIONS) {
            let item_style = if active == Some(section.id) {
                Theme::nav_active_style()
            } else {
                style
            };
            buf.set_line(
                rect.x,
                rect.y,
                &Line::from(Span::styled(format!(" {} ", section.nav), item_style)),
                rect.width,
            );
        }

        if self.chrome.back_to_top_visible {
            let button = self.layout.back_to_top_area;
            buf.set_line(
                button.x,
                button.y,
                &Line::from(Span::styled(BACK_TO_TOP, Theme::button_style())),
                button.width,
            );
        }
    }
}

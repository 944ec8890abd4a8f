//! The scrolling page: every section drawn at the current scroll offset.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::app::content::{self, SectionContent, SECTIONS, SECTION_PAD_TOP};
use crate::core::geometry::PageLayout;

use super::theme::Theme;

const HERO_HINT: &str = "▼  Enter or scroll down";

pub struct PageWidget<'a> {
    pub page: &'a PageLayout,
    pub scroll_offset: f64,
    pub px_per_row: f64,
    /// Hero entrance progress in `[0, 1]`.
    pub hero_fade: f64,
}

impl PageWidget<'_> {
    /// Screen row (relative to the page area) of document position `doc_y`.
    fn row_of(&self, doc_y: f64) -> i64 {
        ((doc_y - self.scroll_offset) / self.px_per_row).round() as i64
    }
}

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.px_per_row <= 0.0 {
            return;
        }
        let text_width = content::text_width(area.width);
        let left = area.x + area.width.saturating_sub(text_width as u16) / 2;

        for section in SECTIONS {
            let Some(placed) = self.page.get(section.id) else {
                continue;
            };
            let top = self.row_of(placed.doc_top);
            let bottom = self.row_of(placed.doc_bottom());
            if bottom < 0 || top >= i64::from(area.height) {
                continue;
            }

            if section.id == "hero" {
                render_hero(section, top, bottom, self.hero_fade, area, buf);
                continue;
            }

            let rule = "─".repeat(usize::from(area.width));
            put(buf, area, top, area.x, Line::styled(rule, Theme::rule_style()), area.width);

            let title_row = top + i64::from(SECTION_PAD_TOP);
            put(
                buf,
                area,
                title_row,
                left,
                Line::from(Span::styled(section.title, Theme::title_style())),
                text_width as u16,
            );
            for (i, text) in content::body_lines(section, text_width).into_iter().enumerate() {
                put(
                    buf,
                    area,
                    title_row + 2 + i as i64,
                    left,
                    Line::styled(text, Theme::body_style()),
                    text_width as u16,
                );
            }
        }
    }
}

fn render_hero(
    section: &SectionContent,
    top: i64,
    bottom: i64,
    fade: f64,
    area: Rect,
    buf: &mut Buffer,
) {
    if fade <= 0.0 {
        return;
    }
    let centred = |text: &str| area.x + area.width.saturating_sub(text.chars().count() as u16) / 2;
    let middle = top + (bottom - top) / 2;

    // Title slides up into place as it fades in.
    let slide = ((1.0 - fade) * 3.0).round() as i64;
    let title_row = middle - 1 + slide;
    put(
        buf,
        area,
        title_row,
        centred(section.title),
        Line::styled(section.title, Theme::hero_style(fade)),
        area.width,
    );
    if let Some(&tagline) = section.body.first() {
        put(
            buf,
            area,
            title_row + 2,
            centred(tagline),
            Line::styled(tagline, Theme::body_style()),
            area.width,
        );
    }
    put(
        buf,
        area,
        bottom - 2,
        centred(HERO_HINT),
        Line::styled(HERO_HINT, Theme::hint_style()),
        area.width,
    );
}

/// Draw `line` at page-relative `row` if that row is on screen.
fn put(buf: &mut Buffer, area: Rect, row: i64, x: u16, line: Line<'_>, width: u16) {
    if row < 0 || row >= i64::from(area.height) {
        return;
    }
    buf.set_line(x, area.y + row as u16, &line, width);
}

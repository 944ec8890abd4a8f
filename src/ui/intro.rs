//! The intro overlay: a hand scroll that unrolls as the user scrolls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use crate::core::controller::IntroOverlay;

use super::theme::Theme;

/// Lines written on the unrolled scroll.
const SCROLL_TEXT: &[&str] = &[
    "Above there is heaven,",
    "below there are Suzhou and Hangzhou.",
];
const WELCOME_TEXT: &str = "Welcome to Suzhou";
const PROMPT_TEXT: &str = "scroll to unroll";

/// Widest the paper gets, in columns.
const MAX_PAPER_WIDTH: u16 = 64;

pub struct IntroWidget {
    pub overlay: IntroOverlay,
    /// How far the scroll is unrolled, in `[0, 1]`.
    pub openness: f64,
    pub text_visible: bool,
    pub welcome: bool,
}

impl IntroWidget {
    /// Paper width in columns for `openness` inside an area `width` wide.
    pub fn paper_width(openness: f64, width: u16) -> u16 {
        let max = MAX_PAPER_WIDTH.min(width.saturating_sub(4));
        (f64::from(max) * openness.clamp(0.0, 1.0)).round() as u16
    }
}

impl Widget for IntroWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if matches!(self.overlay, IntroOverlay::Hidden | IntroOverlay::Gone) || area.height < 3 {
            return;
        }
        Clear.render(area, buf);

        let finishing = self.overlay == IntroOverlay::Finishing;
        let dim = |style: ratatui::style::Style| {
            if finishing {
                style.add_modifier(Modifier::DIM)
            } else {
                style
            }
        };

        let paper_height = (area.height * 3 / 5).max(3);
        let top = area.y + (area.height - paper_height) / 2;
        let paper_width = Self::paper_width(self.openness, area.width);
        let centre = area.x + area.width / 2;
        let left = centre.saturating_sub(paper_width / 2);

        if paper_width > 0 {
            let paper = Rect::new(left, top, paper_width, paper_height);
            buf.set_style(paper, dim(Theme::paper_style()));
        }

        // Rods sit just outside the paper on both sides.
        let left_rod = left.saturating_sub(1).max(area.x);
        let right_rod = (left + paper_width).min(area.right().saturating_sub(1));
        for y in top.saturating_sub(1)..(top + paper_height + 1).min(area.bottom()) {
            for x in [left_rod, right_rod] {
                buf.set_string(x, y, "┃", dim(Theme::rod_style()));
            }
        }

        let mut lines: Vec<&str> = Vec::new();
        if self.welcome {
            lines.push(WELCOME_TEXT);
        } else if self.text_visible {
            lines.extend_from_slice(SCROLL_TEXT);
        }
        let text_top = top + paper_height / 2 - (lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let width = text.chars().count() as u16;
            if width > paper_width {
                continue;
            }
            let x = centre.saturating_sub(width / 2);
            let line = Line::from(Span::styled(*text, dim(Theme::overlay_style())));
            buf.set_line(x, text_top + i as u16, &line, width);
        }

        if !self.welcome && !finishing && self.openness < 1.0 {
            let width = PROMPT_TEXT.chars().count() as u16;
            let y = (top + paper_height + 1).min(area.bottom().saturating_sub(1));
            let line = Line::from(Span::styled(PROMPT_TEXT, Theme::hint_style()));
            buf.set_line(centre.saturating_sub(width / 2), y, &line, width.min(area.width));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_width_follows_openness() {
        assert_eq!(IntroWidget::paper_width(0.0, 120), 0);
        assert_eq!(IntroWidget::paper_width(0.5, 120), 32);
        assert_eq!(IntroWidget::paper_width(1.0, 120), MAX_PAPER_WIDTH);
        // Narrow terminal: never wider than the area.
        assert_eq!(IntroWidget::paper_width(1.0, 30), 26);
        assert_eq!(IntroWidget::paper_width(3.0, 30), 26);
    }
}

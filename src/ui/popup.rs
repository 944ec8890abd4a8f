//! Popup overlay showing the full text of one section.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::app::content::SectionContent;

use super::theme::Theme;

// ───────────────────────────────────────── section modal ─────

pub struct SectionModal<'a> {
    pub section: &'a SectionContent,
}

impl Widget for SectionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 60.min(area.width.saturating_sub(4)).max(20);
        let height = area.height.saturating_sub(6).clamp(8, 24);
        let popup = centered_fixed(width, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", self.section.title))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style());

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for (i, para) in self.section.body.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            lines.push(Line::styled(*para, Theme::body_style()));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Esc/m: close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

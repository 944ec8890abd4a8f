//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Ink on rice paper, with a touch of lacquer red.
const INK: Color = Color::Rgb(40, 36, 32);
const PAPER: Color = Color::Rgb(236, 226, 204);
const LACQUER: Color = Color::Rgb(178, 34, 34);
const JADE: Color = Color::Rgb(94, 160, 130);

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── loader / intro ─────────────────────────────────────────
    pub fn loader_style(fading: bool) -> Style {
        let style = Style::default().fg(LACQUER).add_modifier(Modifier::BOLD);
        if fading {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    pub fn paper_style() -> Style {
        Style::default().bg(PAPER).fg(INK)
    }

    pub fn rod_style() -> Style {
        Style::default().fg(LACQUER).add_modifier(Modifier::BOLD)
    }

    pub fn overlay_style() -> Style {
        Style::default()
            .bg(PAPER)
            .fg(INK)
            .add_modifier(Modifier::BOLD)
    }

    // ── page ───────────────────────────────────────────────────
    pub fn title_style() -> Style {
        Style::default().fg(JADE).add_modifier(Modifier::BOLD)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn hero_style(fade: f64) -> Style {
        let base = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        if fade < 1.0 {
            base.add_modifier(Modifier::DIM)
        } else {
            base
        }
    }

    pub fn hint_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn rule_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn navbar_style(condensed: bool) -> Style {
        if condensed {
            Style::default().bg(INK).fg(PAPER)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn brand_style() -> Style {
        Style::default().fg(LACQUER).add_modifier(Modifier::BOLD)
    }

    pub fn nav_active_style() -> Style {
        Style::default()
            .fg(JADE)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn button_style() -> Style {
        Style::default().bg(LACQUER).fg(Color::White)
    }

    pub fn border_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}

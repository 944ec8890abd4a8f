//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the controller state and turns it into cells on the
//! terminal.  Nothing here mutates state.

pub mod intro;
pub mod layout;
pub mod loader;
pub mod navbar;
pub mod page;
pub mod popup;
pub mod theme;

use std::time::Duration;

use ratatui::{widgets::Paragraph, Frame};

use crate::app::content::SECTIONS;
use crate::app::handler::NAV_HINT;
use crate::app::state::AppState;
use crate::core::controller::LoaderState;
use crate::core::intro::IntroPhase;

use self::intro::IntroWidget;
use self::layout::AppLayout;
use self::loader::LoaderWidget;
use self::navbar::Navbar;
use self::page::PageWidget;
use self::popup::SectionModal;
use self::theme::Theme;

/// Draw one frame.
pub fn render(frame: &mut Frame, state: &AppState, now: Duration) {
    let controller = &state.controller;
    let layout = AppLayout::from_area(frame.area(), state.header_rows());

    if controller.loader() != LoaderState::Hidden {
        frame.render_widget(
            LoaderWidget {
                state: controller.loader(),
                tick: state.frame,
            },
            frame.area(),
        );
        return;
    }

    frame.render_widget(
        PageWidget {
            page: controller.page(),
            scroll_offset: controller.viewport().scroll_offset(),
            px_per_row: state.config.px_per_row,
            hero_fade: controller.hero_fade(now),
        },
        layout.page_area,
    );

    let revealed = controller.phase() == IntroPhase::Completed;
    if revealed {
        let chrome = controller.chrome();
        frame.render_widget(
            Navbar {
                layout: &layout,
                chrome: &chrome,
            },
            layout.navbar_area,
        );
    }

    let intro = controller.intro();
    frame.render_widget(
        IntroWidget {
            overlay: controller.intro_overlay(),
            openness: intro.openness(),
            text_visible: intro.overlay_visible(),
            welcome: intro.welcome_started(),
        },
        layout.page_area,
    );

    let hint = if revealed { NAV_HINT } else { "" };
    let status_text = state.status_message.as_deref().unwrap_or(hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if let Some(section) = state.modal_section.and_then(|i| SECTIONS.get(i)) {
        frame.render_widget(SectionModal { section }, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler::handle_frame;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn screen(state: &AppState, now: Duration) -> String {
        let backend = TestBackend::new(state.term_width, state.term_height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state, now)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn loader_then_intro_then_page() {
        let mut state = AppState::new(AppConfig::default(), 100, 30);
        state.controller.page_ready(ms(0));
        handle_frame(&mut state, ms(10));
        assert!(screen(&state, ms(10)).contains("Suzhou"));

        handle_frame(&mut state, ms(2300));
        let intro = screen(&state, ms(2300));
        assert!(intro.contains("scroll to unroll"));
        assert!(!intro.contains("SUZHOU"));
    }

    #[test]
    fn revealed_page_shows_navbar_and_hero() {
        let config = AppConfig {
            skip_intro: true,
            ..AppConfig::default()
        };
        let mut state = AppState::new(config, 100, 30);
        state.controller.page_ready(ms(0));
        handle_frame(&mut state, ms(2300));

        let text = screen(&state, ms(4000));
        assert!(text.contains("SUZHOU"));
        assert!(text.contains("Impression"));
        assert!(text.contains("Suzhou, Jiangnan"));
        assert!(text.contains("1-5: sections"));
    }

    #[test]
    fn modal_is_drawn_over_the_page() {
        let config = AppConfig {
            skip_intro: true,
            ..AppConfig::default()
        };
        let mut state = AppState::new(config, 100, 30);
        state.controller.page_ready(ms(0));
        handle_frame(&mut state, ms(2300));
        state.modal_section = Some(2);

        let text = screen(&state, ms(4000));
        assert!(text.contains("Kunqu and Silk"));
        assert!(text.contains("Esc/m: close"));
    }
}

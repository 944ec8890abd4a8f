//! Loading screen: a spinner + label centred in the terminal while the
//! page "loads".

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use crate::core::controller::LoaderState;

use super::theme::Theme;

/// Braille-dot spinner frames.  Cycles through these on each frame.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Full-screen loader.  Renders nothing once hidden.
pub struct LoaderWidget {
    pub state: LoaderState,
    /// Frame counter (drives the spinner).
    pub tick: u64,
}

impl Widget for LoaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state == LoaderState::Hidden || area.height == 0 {
            return;
        }
        Clear.render(area, buf);

        let frame = SPINNER_FRAMES[(self.tick as usize) % SPINNER_FRAMES.len()];
        let label = format!("{frame}  Suzhou  {frame}");
        let width = label.chars().count() as u16;

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        let line = Line::from(Span::styled(
            label,
            Theme::loader_style(self.state == LoaderState::Fading),
        ));
        buf.set_line(x, y, &line, width.min(area.width));
    }
}

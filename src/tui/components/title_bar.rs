//! # TitleBar Component
//!
//! Top navigation bar: a "‹ Reset" button on the left, the screen title in
//! the middle and a bold "Done" button on the right.
//!
//! ```text
//! ‹ Reset            Select region            Done
//! ```
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives the title as a prop and
//! has no internal state. Mouse hit testing is a pure function of the
//! column and the area the bar was drawn in, see [`TitleBar::button_at`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const RESET_LABEL: &str = "‹ Reset";
const DONE_LABEL: &str = "Done";

/// Clickable buttons in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Reset,
    Done,
}

pub struct TitleBar {
    /// Screen title (e.g., "Select region")
    pub title: String,
}

impl TitleBar {
    pub fn new(title: String) -> Self {
        Self { title }
    }

    /// Which button, if any, sits at column `x` of a bar drawn in `area`.
    pub fn button_at(x: u16, area: Rect) -> Option<NavButton> {
        let reset_end = area.x + RESET_LABEL.width() as u16;
        let done_start = area.right().saturating_sub(DONE_LABEL.width() as u16);

        if x >= area.x && x < reset_end {
            Some(NavButton::Reset)
        } else if x >= done_start && x < area.right() {
            Some(NavButton::Done)
        } else {
            None
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

        let reset = Paragraph::new(Span::styled(RESET_LABEL, button_style));
        let title = Paragraph::new(Line::styled(
            self.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        let done = Paragraph::new(Span::styled(DONE_LABEL, button_style));

        let [reset_area, title_area, done_area] = Layout::horizontal([
            Constraint::Length(RESET_LABEL.width() as u16),
            Constraint::Min(0),
            Constraint::Length(DONE_LABEL.width() as u16),
        ])
        .areas(area);

        frame.render_widget(reset, reset_area);
        frame.render_widget(title, title_area);
        frame.render_widget(done, done_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_renders_buttons_and_title() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut title_bar = TitleBar::new("Select region".to_string());
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.starts_with(RESET_LABEL));
        assert!(text.contains("Select region"));
        assert!(text.ends_with(DONE_LABEL));
    }

    #[test]
    fn test_button_at() {
        let area = Rect::new(0, 0, 60, 1);
        assert_eq!(TitleBar::button_at(0, area), Some(NavButton::Reset));
        assert_eq!(TitleBar::button_at(6, area), Some(NavButton::Reset));
        assert_eq!(TitleBar::button_at(7, area), None);
        assert_eq!(TitleBar::button_at(30, area), None);
        assert_eq!(TitleBar::button_at(56, area), Some(NavButton::Done));
        assert_eq!(TitleBar::button_at(59, area), Some(NavButton::Done));
        assert_eq!(TitleBar::button_at(60, area), None);
    }
}

//! # Notice Dialog
//!
//! Centered modal box for the "Reset", "Selected Region" and "No Selection"
//! notices. Enter, Esc, Space or a click dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::action::{Notice, NoticeKind};
use crate::tui::component::Component;

/// Widest the dialog grows, borders included.
const MAX_WIDTH: u16 = 44;
/// Borders (2) + padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Borders (2) + blank line + OK line
const VERTICAL_OVERHEAD: u16 = 4;

/// Props-only wrapper: borrows the notice for one frame.
pub struct NoticeDialog<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    /// Dialog rectangle for `notice` centered in `outer`.
    pub fn area(notice: &Notice, outer: Rect) -> Rect {
        let width = MAX_WIDTH.min(outer.width);
        let text_width = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
        let message_lines = textwrap::wrap(&notice.message, text_width).len().max(1) as u16;
        let height = (message_lines + VERTICAL_OVERHEAD).min(outer.height);

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(outer);
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        area
    }
}

impl Component for NoticeDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = Self::area(self.notice, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let accent = match self.notice.kind {
            NoticeKind::NoSelection => Color::Yellow,
            NoticeKind::Reset | NoticeKind::Confirmation => Color::Green,
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .title(Line::from(format!(" {} ", self.notice.title)).centered())
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));

        let text_width = overlay.width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
        let mut lines: Vec<Line> = textwrap::wrap(&self.notice.message, text_width)
            .into_iter()
            .map(|line| Line::from(line.into_owned()))
            .collect();
        lines.push(Line::default());
        lines.push(Line::styled(
            "[ OK ]",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(body, overlay);
    }
}

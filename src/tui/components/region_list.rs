//! # Region List Component
//!
//! Scrollable list of region rows below the search field.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RegionListState` lives in `TuiState` (keyboard focus, scroll offset)
//! - `RegionList` is created each frame with borrowed state and the rows
//!   for this render pass
//!
//! Focus is the row Enter will tap. It is separate from the core
//! selection: moving focus never selects anything.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::row::{LabelWeight, RowView, Tint};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const ICON: &str = " ● ";
const CHECKMARK: &str = " ✓ ";
/// Icon + checkmark columns around the label
const ROW_OVERHEAD: usize = 6;

/// Persistent state for the region list.
pub struct RegionListState {
    pub focused: usize,
    pub list_state: ListState,
    /// Area of the last render, for paging.
    last_area: Rect,
}

/// Events emitted by the region list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionListEvent {
    Tap(usize),
}

impl RegionListState {
    pub fn new() -> Self {
        Self {
            focused: 0,
            list_state: ListState::default().with_selected(Some(0)),
            last_area: Rect::default(),
        }
    }

    /// Back to the top. Called whenever the displayed list is replaced.
    pub fn reset_focus(&mut self) {
        self.focused = 0;
        self.list_state = ListState::default().with_selected(Some(0));
    }

    /// Handle a key event for a list of `len` rows.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<RegionListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_focus(-1, len);
                None
            }
            TuiEvent::CursorDown => {
                self.move_focus(1, len);
                None
            }
            TuiEvent::PageUp => {
                self.move_focus(-(self.page_size() as isize), len);
                None
            }
            TuiEvent::PageDown => {
                self.move_focus(self.page_size() as isize, len);
                None
            }
            TuiEvent::Submit => (self.focused < len).then_some(RegionListEvent::Tap(self.focused)),
            _ => None,
        }
    }

    /// Row index under screen position (`x`, `y`) for a list drawn in `area`.
    pub fn row_at(&self, x: u16, y: u16, area: Rect, len: usize) -> Option<usize> {
        if !area.contains(Position::new(x, y)) {
            return None;
        }
        let index = self.list_state.offset() + (y - area.y) as usize;
        (index < len).then_some(index)
    }

    fn move_focus(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        self.focused = self.focused.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(self.focused));
    }

    fn page_size(&self) -> usize {
        (self.last_area.height as usize).max(1)
    }
}

impl Default for RegionListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the region list.
pub struct RegionList<'a> {
    state: &'a mut RegionListState,
    rows: &'a [RowView],
}

impl<'a> RegionList<'a> {
    pub fn new(state: &'a mut RegionListState, rows: &'a [RowView]) -> Self {
        Self { state, rows }
    }
}

impl Component for RegionList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.last_area = area;

        if self.rows.is_empty() {
            let empty = Paragraph::new("No regions match your search.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        self.state.focused = self.state.focused.min(self.rows.len() - 1);
        self.state.list_state.select(Some(self.state.focused));

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| ListItem::new(row_line(row, area.width)))
            .collect();

        let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Build the line for one row from its visual description.
///
/// ```text
///  ●  Canada                                   ✓
/// ```
pub fn row_line(row: &RowView, width: u16) -> Line<'static> {
    let visual = row.visual();

    let label_width = (width as usize).saturating_sub(ROW_OVERHEAD);
    let label = truncate_to_width(&visual.label, label_width);
    let padding = label_width.saturating_sub(label.width());

    let label_style = match visual.weight {
        LabelWeight::Bold => Style::default().add_modifier(Modifier::BOLD),
        LabelWeight::Regular => Style::default(),
    };

    let checkmark = if visual.checkmark_visible {
        Span::styled(
            CHECKMARK,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(" ".repeat(CHECKMARK.width()))
    };

    Line::from(vec![
        Span::styled(ICON, Style::default().fg(tint_color(visual.icon_tint))),
        Span::styled(format!("{label}{}", " ".repeat(padding)), label_style),
        checkmark,
    ])
}

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Active => Color::Green,
        Tint::Inactive => Color::DarkGray,
    }
}

/// Truncate a string to fit within `max_width` columns, adding "…" if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

//! # SearchBar Component
//!
//! Single-line search field above the region list.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Report every text change so the list can be refiltered
//! - Show how many regions the current text matches
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. The core `App` owns the
//! authoritative search text, so after every dispatched action the parent
//! calls [`SearchBar::sync`] to pull cleared or reset text back in.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) + padding (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to the first text column (border + padding)
const TEXT_OFFSET: u16 = 2;

const PLACEHOLDER: &str = "Type to filter regions";

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The text changed; carries the full new text.
    Changed(String),
}

/// Search field with match counter.
///
/// # Props
///
/// - `shown` / `total`: displayed and total region counts (from App state)
/// - `focused`: whether the terminal cursor should be placed in the field
///
/// # State
///
/// - `buffer`: Current search text
/// - `cursor`: Cursor position as a byte offset into `buffer`
pub struct SearchBar {
    buffer: String,
    cursor: usize,
    pub shown: usize,
    pub total: usize,
    pub focused: bool,
}

impl SearchBar {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.len(),
            shown: 0,
            total: 0,
            focused: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Adopt `text` from the core state if it differs; cursor goes to the end.
    pub fn sync(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor = self.buffer.len();
        }
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!("Search ({} of {})", self.shown, self.total);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .title(title);

        let width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let (visible, cursor_col) = visible_window(&self.buffer, self.cursor, width);

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(visible).style(Style::default().fg(Color::Green))
        };
        frame.render_widget(input.block(block), area);

        if self.focused && area.height > 2 {
            frame.set_cursor_position((area.x + TEXT_OFFSET + cursor_col as u16, area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines from the clipboard become spaces
                let text = text.replace(['\r', '\n'], " ");
                if text.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// The slice of `text` that fits in `width` columns with the cursor visible,
/// plus the cursor's column within that slice.
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }

    let cursor_col = text[..cursor].width();
    // Keep one column free for the cursor itself
    let skip = (cursor_col + 1).saturating_sub(width);

    let mut col = 0;
    let mut visible = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if col >= skip && col + w <= skip + width {
            visible.push(c);
        }
        col += w;
    }

    (visible, cursor_col - skip)
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavButton, NoticeDialog, RegionList, RegionListState, TitleBar};

const HELP_TEXT: &str = " ↑↓ Move  Enter Select  ^D Done  ^R Reset  Esc Clear/Quit";

/// The four horizontal bands of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub search: Rect,
    pub list: Rect,
    pub help: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title, search, list, help] = layout.areas(area);
    ScreenLayout {
        title,
        search,
        list,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let frame_area = frame.area();
    let layout = screen_layout(frame_area);

    // Every pass rebuilds rows from the displayed list + selection
    let rows = app.rows();

    TitleBar::new(app.title.clone()).render(frame, layout.title);

    tui.search_bar.shown = app.store.len();
    tui.search_bar.total = app.store.regions().len();
    tui.search_bar.focused = tui.notice.is_none();
    tui.search_bar.render(frame, layout.search);

    RegionList::new(&mut tui.region_list, &rows).render(frame, layout.list);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        layout.help,
    );

    if let Some(notice) = &tui.notice {
        NoticeDialog::new(notice).render(frame, frame_area);
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Button(NavButton),
    Row(usize),
}

/// Hit test: given a screen position, find the button or row under it.
pub fn hit_test(
    x: u16,
    y: u16,
    frame_area: Rect,
    list: &RegionListState,
    len: usize,
) -> Option<Hit> {
    let layout = screen_layout(frame_area);

    if layout.title.contains(Position::new(x, y)) {
        return TitleBar::button_at(x, layout.title).map(Hit::Button);
    }

    list.row_at(x, y, layout.list, len).map(Hit::Row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Notice;
    use crate::core::selection::Selection;
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_screen_layout_bands() {
        let layout = screen_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.search, Rect::new(0, 1, 80, 3));
        assert_eq!(layout.list, Rect::new(0, 4, 80, 19));
        assert_eq!(layout.help, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_draw_ui_shows_sorted_regions() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(&app.search_text);

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Select region"));
        assert!(text.contains("Search (41 of 41)"));
        assert!(text.contains("Afghanistan"));
        assert!(text.contains("Albania"));
        assert!(!text.contains('✓'));
    }

    #[test]
    fn test_draw_ui_shows_selection_and_notice() {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.selection = Selection::Selected(0);
        let mut tui = TuiState::new(&app.search_text);
        tui.notice = Some(Notice::confirmation("Afghanistan"));

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains('✓'));
        assert!(text.contains("Selected Region"));
    }

    #[test]
    fn test_hit_test() {
        let area = Rect::new(0, 0, 80, 24);
        let list = RegionListState::new();

        assert_eq!(hit_test(0, 0, area, &list, 41), Some(Hit::Button(NavButton::Reset)));
        assert_eq!(hit_test(78, 0, area, &list, 41), Some(Hit::Button(NavButton::Done)));
        assert_eq!(hit_test(40, 0, area, &list, 41), None);
        assert_eq!(hit_test(10, 2, area, &list, 41), None);
        assert_eq!(hit_test(10, 4, area, &list, 41), Some(Hit::Row(0)));
        assert_eq!(hit_test(10, 6, area, &list, 41), Some(Hit::Row(2)));
        assert_eq!(hit_test(10, 6, area, &list, 2), None);
    }
}

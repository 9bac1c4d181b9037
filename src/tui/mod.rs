//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the picker
//! screen, and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on this screen animates, so the loop sleeps up to 250ms waiting
//! for input and only redraws after at least one event arrived. All pending
//! events are drained before the next draw.
//!
//! ## Event Routing
//!
//! ```text
//! TuiEvent ─┬─ notice open? ─────────▶ dismiss / swallow
//!           ├─ Ctrl+R / Ctrl+D ──────▶ Action::Reset / Action::Done
//!           ├─ click ─▶ hit_test ────▶ Reset / Done / TapRow(i)
//!           ├─ ↑↓ PgUp PgDn Enter ───▶ RegionListState ─▶ TapRow(i)
//!           └─ everything else ──────▶ SearchBar ─▶ SearchChanged(text)
//! ```

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, Notice, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{NavButton, RegionListEvent, RegionListState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_bar: SearchBar,
    pub region_list: RegionListState,
    // Modal notice (None = hidden)
    pub notice: Option<Notice>,
}

impl TuiState {
    pub fn new(search_text: &str) -> Self {
        Self {
            search_bar: SearchBar::new(search_text),
            region_list: RegionListState::new(),
            notice: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                      // Show cursor for search editing
            SetCursorStyle::SteadyBar, // Caret-style cursor in the search field
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady bar cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

/// Run the picker until the user quits.
///
/// Returns the last region confirmed with Done, if any.
pub fn run(config: ResolvedConfig) -> std::io::Result<Option<String>> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app.search_text);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();

    result.map(|()| app.confirmed)
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let frame_area = terminal.get_frame().area();

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, event, frame_area) {
                info!("Quitting");
                return Ok(());
            }
        }
    }
}

/// Route one terminal event. Returns `true` when the app should quit.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> bool {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => return false,
        // ForceQuit (Ctrl+C) always quits, even with a notice open
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit),
        _ => {}
    }

    // The notice is modal: it swallows everything until dismissed
    if tui.notice.is_some() {
        if matches!(
            event,
            TuiEvent::Submit | TuiEvent::Escape | TuiEvent::InputChar(' ') | TuiEvent::MouseClick(..)
        ) {
            tui.notice = None;
        }
        return false;
    }

    let len = app.store.len();
    let action = match event {
        TuiEvent::Reset => Some(Action::Reset),
        TuiEvent::Done => Some(Action::Done),
        // Esc clears a non-empty search first, then quits
        TuiEvent::Escape if !app.search_text.is_empty() => Some(Action::SearchCancelled),
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::MouseClick(x, y) => match ui::hit_test(x, y, frame_area, &tui.region_list, len) {
            Some(Hit::Button(NavButton::Reset)) => Some(Action::Reset),
            Some(Hit::Button(NavButton::Done)) => Some(Action::Done),
            Some(Hit::Row(index)) => {
                tui.region_list.focused = index;
                Some(Action::TapRow(index))
            }
            None => None,
        },
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::PageUp
        | TuiEvent::PageDown
        | TuiEvent::Submit => tui
            .region_list
            .handle_event(&event, len)
            .map(|RegionListEvent::Tap(index)| Action::TapRow(index)),
        _ => tui
            .search_bar
            .handle_event(&event)
            .map(|SearchEvent::Changed(text)| Action::SearchChanged(text)),
    };

    action.is_some_and(|action| dispatch(app, tui, action))
}

/// Apply an action to the core and mirror the result into presentation state.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    debug!("Dispatching {:?}", action);
    let recomputes = action.recomputes_list();

    let effect = update(app, action);

    tui.search_bar.sync(&app.search_text);
    if recomputes {
        tui.region_list.reset_focus();
    }

    match effect {
        Effect::Render => false,
        Effect::Notify(notice) => {
            tui.notice = Some(notice);
            false
        }
        Effect::Quit => true,
    }
}

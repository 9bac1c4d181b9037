//! # Actions
//!
//! Everything that can happen on the picker screen becomes an `Action`.
//! User types in the search field? That's `Action::SearchChanged(text)`.
//! User presses Done? That's `Action::Done`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what to do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! | Action            | Selection after      | Effect                 |
//! |-------------------|----------------------|------------------------|
//! | SearchChanged(t)  | NoSelection          | Render                 |
//! | SearchCancelled   | NoSelection          | Render                 |
//! | Reset             | NoSelection          | Notify(reset)          |
//! | TapRow(i)         | toggled              | Render                 |
//! | Done              | unchanged            | Notify(confirm / none) |
//! | Quit              | unchanged            | Quit                   |

use log::{debug, info};

use crate::core::selection::Selection;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SearchChanged(String),
    /// Search dismissed: text cleared, full list back.
    SearchCancelled,
    /// Row at this index of the displayed list was tapped.
    TapRow(usize),
    Reset,
    Done,
    Quit,
}

impl Action {
    /// Whether this action replaces the displayed list.
    pub fn recomputes_list(&self) -> bool {
        matches!(
            self,
            Action::SearchChanged(_) | Action::SearchCancelled | Action::Reset
        )
    }
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Rows changed; redraw them.
    Render,
    /// Rows may have changed; redraw and show this notice.
    Notify(Notice),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Reset,
    Confirmation,
    NoSelection,
}

/// A titled message for the user. Advisory only, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn reset() -> Self {
        Self {
            kind: NoticeKind::Reset,
            title: "Reset".to_string(),
            message: "Regions List Reset".to_string(),
        }
    }

    pub fn confirmation(region: &str) -> Self {
        Self {
            kind: NoticeKind::Confirmation,
            title: "Selected Region".to_string(),
            message: region.to_string(),
        }
    }

    pub fn no_selection() -> Self {
        Self {
            kind: NoticeKind::NoSelection,
            title: "No Selection".to_string(),
            message: "Please select a region first.".to_string(),
        }
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} (selection={:?})", action, app.selection);

    match action {
        Action::SearchChanged(text) => {
            app.store.filter(&text);
            app.search_text = text;
            app.selection = Selection::NoSelection;
            debug!("{} regions match {:?}", app.store.len(), app.search_text);
            Effect::Render
        }
        Action::SearchCancelled => {
            app.search_text.clear();
            app.store.reset();
            app.selection = Selection::NoSelection;
            Effect::Render
        }
        Action::Reset => {
            app.search_text.clear();
            app.store.reset();
            app.selection = Selection::NoSelection;
            info!("Region list reset");
            Effect::Notify(Notice::reset())
        }
        Action::TapRow(index) => {
            let len = app.store.len();
            assert!(
                index < len,
                "row index {index} out of range for {len} displayed regions"
            );
            app.selection = app.selection.tap(index);
            Effect::Render
        }
        Action::Done => match app.selection.index() {
            Some(index) => {
                let region = app.store.displayed()[index].clone();
                info!("Region confirmed: {}", region);
                let notice = Notice::confirmation(&region);
                app.confirmed = Some(region);
                Effect::Notify(notice)
            }
            None => Effect::Notify(Notice::no_selection()),
        },
        Action::Quit => Effect::Quit,
    }
}

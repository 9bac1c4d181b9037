//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::action::{Action, update};
use crate::core::config::DEFAULT_TITLE;
use crate::core::regions::DEFAULT_REGIONS;
use crate::core::state::App;

/// Creates a test App over the built-in region list.
pub fn test_app() -> App {
    App::new(
        DEFAULT_REGIONS.iter().map(|s| s.to_string()).collect(),
        DEFAULT_TITLE.to_string(),
    )
}

/// Taps the row currently showing `name`. Panics if it isn't displayed.
pub fn tap_region(app: &mut App, name: &str) {
    let index = app
        .store
        .position(name)
        .unwrap_or_else(|| panic!("{name} is not displayed"));
    update(app, Action::TapRow(index));
}

/// Flattens a TestBackend buffer into one string of cell symbols.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

//! # Application State
//!
//! Core state for the region picker. This module contains domain logic only -
//! no TUI-specific types. Presentation state (cursor focus, open dialogs)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: RegionStore          // full list + filtered/sorted view
//! ├── selection: Selection        // index into store.displayed()
//! ├── search_text: String         // current query
//! ├── title: String               // navigation bar title
//! └── confirmed: Option<String>   // last region confirmed with Done
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::regions::RegionStore;
use crate::core::row::RowView;
use crate::core::selection::Selection;

pub struct App {
    pub store: RegionStore,
    pub selection: Selection,
    pub search_text: String,
    pub title: String,
    /// Set each time Done confirms a region. Printed on exit.
    pub confirmed: Option<String>,
}

impl App {
    pub fn new(regions: Vec<String>, title: String) -> Self {
        Self {
            store: RegionStore::new(regions),
            selection: Selection::NoSelection,
            search_text: String::new(),
            title,
            confirmed: None,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.regions.clone(), config.title.clone());
        if !config.initial_query.is_empty() {
            app.search_text = config.initial_query.clone();
            app.store.filter(&app.search_text);
        }
        app
    }

    /// Rows for a render pass, rebuilt from the displayed list and selection.
    pub fn rows(&self) -> Vec<RowView> {
        self.store
            .displayed()
            .iter()
            .enumerate()
            .map(|(index, name)| RowView {
                name: name.clone(),
                is_selected: self.selection.is_selected(index),
            })
            .collect()
    }

    /// Name of the selected region, if any.
    pub fn selected_region(&self) -> Option<&str> {
        self.selection
            .index()
            .map(|index| self.store.displayed()[index].as_str())
    }
}

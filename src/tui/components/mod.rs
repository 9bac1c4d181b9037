//! # TUI Components
//!
//! This module contains all UI components for the picker screen.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: navigation bar with the Reset and Done buttons
//! - `NoticeDialog`: modal notice box
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBar`: search field, emits the new text on every edit
//! - `RegionList`: row list with keyboard focus, emits row taps
//!
//! ## Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, event handling and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Reset / title / Done)
//! ├── search_bar.rs   (Search field)
//! ├── region_list.rs  (Rows)
//! └── notice.rs       (Modal notice)
//! ```

pub mod notice;
pub mod region_list;
pub mod search_bar;
pub mod title_bar;

pub use notice::NoticeDialog;
pub use region_list::{RegionList, RegionListEvent, RegionListState};
pub use search_bar::{SearchBar, SearchEvent};
pub use title_bar::{NavButton, TitleBar};

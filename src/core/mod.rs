//! # Core Application Logic
//!
//! This module contains the region picker's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RegionStore (data)   │
//!                    │  • Selection (state)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`regions`]: `RegionStore`: the region list and its filtered, sorted view
//! - [`selection`]: `Selection`: the single-select toggle state machine
//! - [`row`]: pure `(name, is_selected)` → row visual contract
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: settings from file, env and CLI
//!
//! `config` is the one exception to "no I/O": it reads the config file
//! before the screen starts.

pub mod action;
pub mod config;
pub mod regions;
pub mod row;
pub mod selection;
pub mod state;

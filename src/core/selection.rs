//! # Selection
//!
//! At most one row of the displayed list is selected at a time.
//!
//! ```text
//!   NoSelection ──tap(i)──▶ Selected(i)
//!   Selected(i) ──tap(i)──▶ NoSelection      (toggle off)
//!   Selected(i) ──tap(j)──▶ Selected(j)      (j ≠ i)
//! ```
//!
//! The index points into the *displayed* list, which is replaced on every
//! filter. Callers clear the selection whenever that happens.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(usize),
}

impl Selection {
    /// The state after the row at `index` is tapped.
    pub fn tap(self, index: usize) -> Selection {
        match self {
            Selection::Selected(current) if current == index => Selection::NoSelection,
            _ => Selection::Selected(index),
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(index) => Some(index),
        }
    }

    pub fn is_selected(self, row: usize) -> bool {
        self == Selection::Selected(row)
    }
}

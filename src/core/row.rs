//! # Row Rendering Contract
//!
//! A row's look is a pure function of `(name, is_selected)`. Nothing is
//! cached per row, so a row that moves after a filter is drawn from its new
//! data, never from flags left behind by whatever was at that index before.
//!
//! The types here describe *what* a row shows. The TUI adapter decides how
//! that maps onto terminal colors and glyphs.

/// One entry of a render pass: the region name and whether it is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub name: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelWeight {
    Regular,
    Bold,
}

/// Color role of the row icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Active,
    Inactive,
}

/// Toolkit-neutral description of a rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowVisual {
    pub label: String,
    pub weight: LabelWeight,
    pub icon_tint: Tint,
    pub checkmark_visible: bool,
}

pub fn render_row(name: &str, is_selected: bool) -> RowVisual {
    if is_selected {
        RowVisual {
            label: name.to_string(),
            weight: LabelWeight::Bold,
            icon_tint: Tint::Active,
            checkmark_visible: true,
        }
    } else {
        RowVisual {
            label: name.to_string(),
            weight: LabelWeight::Regular,
            icon_tint: Tint::Inactive,
            checkmark_visible: false,
        }
    }
}

impl RowView {
    pub fn visual(&self) -> RowVisual {
        render_row(&self.name, self.is_selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_row_is_bold_active_with_checkmark() {
        let visual = render_row("Canada", true);
        assert_eq!(visual.label, "Canada");
        assert_eq!(visual.weight, LabelWeight::Bold);
        assert_eq!(visual.icon_tint, Tint::Active);
        assert!(visual.checkmark_visible);
    }

    #[test]
    fn test_unselected_row_is_regular_inactive_without_checkmark() {
        let visual = render_row("Canada", false);
        assert_eq!(visual.weight, LabelWeight::Regular);
        assert_eq!(visual.icon_tint, Tint::Inactive);
        assert!(!visual.checkmark_visible);
    }

    #[test]
    fn test_row_view_visual_matches_render_row() {
        let row = RowView {
            name: "Chad".to_string(),
            is_selected: true,
        };
        assert_eq!(row.visual(), render_row("Chad", true));
    }
}

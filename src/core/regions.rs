//! # Region Store
//!
//! Owns the canonical region list and the currently displayed view of it.
//!
//! ```text
//! regions (immutable)  ──filter(query)──▶  displayed (sorted subset)
//! ```
//!
//! The displayed list is rebuilt from scratch on every `filter()` call.
//! Nothing is updated incrementally, so the result only depends on the
//! query, never on the previous view.

/// The built-in region list shown when no `[list]` is configured.
pub const DEFAULT_REGIONS: &[&str] = &[
    "Afghanistan",
    "Albania",
    "Algeria",
    "Andorra",
    "Angola",
    "Argentina",
    "Armenia",
    "Aruba",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahamas",
    "Bahrain",
    "Bangladesh",
    "Barbados",
    "Belarus",
    "Belgium",
    "Belize",
    "Benin",
    "Bermuda",
    "Bhutan",
    "Bolivia",
    "Botswana",
    "Brazil",
    "Bulgaria",
    "Burundi",
    "Cambodia",
    "Cameroon",
    "Canada",
    "Chad",
    "Chile",
    "China",
    "Colombia",
    "Comoros",
    "Congo",
    "Croatia",
    "Cuba",
    "Cyprus",
    "Denmark",
    "Djibouti",
    "Dominica",
];

#[derive(Debug, Clone)]
pub struct RegionStore {
    regions: Vec<String>,
    displayed: Vec<String>,
}

impl RegionStore {
    /// Create a store over `regions` with the full list displayed, sorted.
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let regions: Vec<String> = regions.into_iter().map(Into::into).collect();
        let mut store = Self {
            regions,
            displayed: Vec::new(),
        };
        store.reset();
        store
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_REGIONS.iter().copied())
    }

    /// Recompute the displayed list for `search_text`.
    ///
    /// Empty text shows every region. Otherwise only regions containing the
    /// text (case-insensitive, anywhere in the name) are kept. The query is
    /// used as-is: surrounding whitespace is part of the match.
    pub fn filter(&mut self, search_text: &str) {
        let mut displayed: Vec<String> = if search_text.is_empty() {
            self.regions.clone()
        } else {
            let needle = fold_case(search_text);
            self.regions
                .iter()
                .filter(|region| fold_case(region).contains(&needle))
                .cloned()
                .collect()
        };
        sort_regions(&mut displayed);
        self.displayed = displayed;
    }

    pub fn reset(&mut self) {
        self.filter("");
    }

    /// The current filtered, sorted view.
    pub fn displayed(&self) -> &[String] {
        &self.displayed
    }

    /// The full list in its original order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.displayed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    /// Index of `name` in the displayed list, if it is currently shown.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.displayed.iter().position(|region| region == name)
    }
}

/// Full Unicode case folding used for both matching and ordering.
///
/// Unlike `to_lowercase` this maps both sigmas to σ and ß to "ss".
fn fold_case(s: &str) -> String {
    caseless::default_case_fold_str(s)
}

/// Ascending by case-folded name. `sort_by_cached_key` is stable, so
/// duplicates keep their list order.
fn sort_regions(regions: &mut [String]) {
    regions.sort_by_cached_key(|region| fold_case(region));
}

#[cfg(test)]
#[path = "regions_proptests.rs"]
mod proptests;

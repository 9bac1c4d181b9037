use super::*;
use proptest::prelude::*;

/// Queries mixing ASCII and non-ASCII letters, case flips and spaces.
fn query_strategy() -> impl Strategy<Value = String> {
    "[a-zA-ZÄÖÜäöüßΣσς ]{0,4}"
}

/// Arbitrary region lists, including non-ASCII names and duplicates.
fn region_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-ZÄÖÜäöüßΣσς ]{1,12}", 0..30)
}

fn is_sorted_folded(list: &[String]) -> bool {
    list.windows(2)
        .all(|pair| fold_case(&pair[0]) <= fold_case(&pair[1]))
}

proptest! {
    /// Every displayed region contains the query and the view stays sorted
    #[test]
    fn prop_filter_keeps_only_matches_sorted(query in query_strategy()) {
        let mut store = RegionStore::with_defaults();
        store.filter(&query);

        prop_assert!(is_sorted_folded(store.displayed()));
        let needle = fold_case(&query);
        for region in store.displayed() {
            prop_assert!(fold_case(region).contains(&needle));
        }
    }

    /// No matching region is dropped from the view
    #[test]
    fn prop_filter_is_complete(regions in region_list_strategy(), query in query_strategy()) {
        let mut store = RegionStore::new(regions.clone());
        store.filter(&query);

        let needle = fold_case(&query);
        let expected = regions
            .iter()
            .filter(|r| fold_case(r).contains(&needle))
            .count();
        prop_assert_eq!(store.len(), expected);
    }

    /// Filtering twice with the same query gives the same view as once
    #[test]
    fn prop_filter_is_idempotent(regions in region_list_strategy(), query in query_strategy()) {
        let mut once = RegionStore::new(regions.clone());
        once.filter(&query);

        let mut twice = RegionStore::new(regions);
        twice.filter(&query);
        twice.filter(&query);

        prop_assert_eq!(once.displayed(), twice.displayed());
    }

    /// reset() is the same as filter("") whatever came before
    #[test]
    fn prop_reset_equals_empty_filter(regions in region_list_strategy(), query in query_strategy()) {
        let mut reset = RegionStore::new(regions.clone());
        reset.filter(&query);
        reset.reset();

        let mut empty = RegionStore::new(regions.clone());
        empty.filter(&query);
        empty.filter("");

        prop_assert_eq!(reset.displayed(), empty.displayed());
        prop_assert_eq!(reset.len(), regions.len());
    }
}

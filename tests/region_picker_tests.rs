use regions::core::action::{Action, Effect, NoticeKind, update};
use regions::core::config::{
    QUERY_ENV, RegionsConfig, TITLE_ENV, load_config_from, resolve, resolve_with_env,
};
use regions::core::regions::{DEFAULT_REGIONS, RegionStore};
use regions::core::selection::Selection;
use regions::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

/// Creates an app over the built-in list with the default title
fn default_app() -> App {
    App::new(
        DEFAULT_REGIONS.iter().map(|s| s.to_string()).collect(),
        "Select region".to_string(),
    )
}

/// Types `text` into the search field one character at a time
fn type_search(app: &mut App, text: &str) {
    let mut typed = String::new();
    for c in text.chars() {
        typed.push(c);
        update(app, Action::SearchChanged(typed.clone()));
    }
}

/// Env lookup with nothing set
fn no_env(_: &str) -> Option<String> {
    None
}

/// Taps the displayed row named `name`
fn tap(app: &mut App, name: &str) -> Effect {
    let index = app
        .store
        .position(name)
        .unwrap_or_else(|| panic!("{name} is not displayed"));
    update(app, Action::TapRow(index))
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_ba_on_bundled_list() {
    let mut app = default_app();
    type_search(&mut app, "BA");

    assert_eq!(
        app.store.displayed(),
        [
            "Albania",
            "Aruba",
            "Azerbaijan",
            "Bahamas",
            "Bahrain",
            "Bangladesh",
            "Barbados",
            "Cuba"
        ]
    );
}

#[test]
fn test_filter_ba_on_short_list() {
    let mut store = RegionStore::new(["Barbados", "Bahrain", "Canada", "Bahamas", "Chile"]);
    store.filter("ba");
    assert_eq!(store.displayed(), ["Bahamas", "Bahrain", "Barbados"]);
}

#[test]
fn test_clearing_search_restores_full_sorted_list() {
    let mut app = default_app();
    type_search(&mut app, "ch");
    update(&mut app, Action::SearchChanged(String::new()));

    assert_eq!(app.store.len(), DEFAULT_REGIONS.len());
    assert_eq!(app.store.displayed()[0], "Afghanistan");
    assert!(app.store.displayed().is_sorted());
}

#[test]
fn test_no_match_shows_empty_list() {
    let mut app = default_app();
    type_search(&mut app, "xyz");

    assert!(app.store.is_empty());
    assert!(app.rows().is_empty());
    assert_eq!(
        update(&mut app, Action::Done),
        Effect::Notify(regions::core::action::Notice::no_selection())
    );
}

// ============================================================================
// Selection and Done
// ============================================================================

#[test]
fn test_tap_canada_then_done_confirms_canada() {
    let mut app = default_app();
    let canada = app.store.position("Canada").unwrap();

    assert_eq!(tap(&mut app, "Canada"), Effect::Render);
    assert_eq!(app.selection, Selection::Selected(canada));

    let Effect::Notify(notice) = update(&mut app, Action::Done) else {
        panic!("Done should notify");
    };
    assert_eq!(notice.kind, NoticeKind::Confirmation);
    assert!(notice.message.contains("Canada"));
    assert_eq!(app.confirmed.as_deref(), Some("Canada"));
}

#[test]
fn test_done_without_selection_is_not_a_confirmation() {
    let mut app = default_app();

    let Effect::Notify(notice) = update(&mut app, Action::Done) else {
        panic!("Done should notify");
    };
    assert_eq!(notice.kind, NoticeKind::NoSelection);
    assert_eq!(notice.message, "Please select a region first.");
    assert_eq!(app.confirmed, None);
}

#[test]
fn test_tapping_selected_row_again_deselects() {
    let mut app = default_app();
    tap(&mut app, "Chile");
    tap(&mut app, "Chile");

    assert_eq!(app.selection, Selection::NoSelection);
    assert!(app.rows().iter().all(|row| !row.is_selected));
}

#[test]
fn test_only_one_row_is_ever_marked() {
    let mut app = default_app();
    tap(&mut app, "Chile");
    tap(&mut app, "China");

    let marked: Vec<_> = app
        .rows()
        .into_iter()
        .filter(|row| row.is_selected)
        .map(|row| row.name)
        .collect();
    assert_eq!(marked, ["China"]);
}

#[test]
fn test_selection_indexes_the_filtered_view() {
    let mut app = default_app();
    type_search(&mut app, "ch");
    tap(&mut app, "China");

    assert_eq!(app.selection, Selection::Selected(2));
    assert_eq!(app.selected_region(), Some("China"));
}

#[test]
fn test_editing_search_drops_selection() {
    let mut app = default_app();
    type_search(&mut app, "c");
    tap(&mut app, "Canada");

    type_search(&mut app, "ch");

    assert_eq!(app.selection, Selection::NoSelection);
    let Effect::Notify(notice) = update(&mut app, Action::Done) else {
        panic!("Done should notify");
    };
    assert_eq!(notice.kind, NoticeKind::NoSelection);
}

// ============================================================================
// Reset and cancel
// ============================================================================

#[test]
fn test_reset_clears_everything_and_notifies() {
    let mut app = default_app();
    type_search(&mut app, "be");
    tap(&mut app, "Belgium");

    let Effect::Notify(notice) = update(&mut app, Action::Reset) else {
        panic!("Reset should notify");
    };

    assert_eq!(notice.kind, NoticeKind::Reset);
    assert_eq!(notice.title, "Reset");
    assert_eq!(notice.message, "Regions List Reset");
    assert!(app.search_text.is_empty());
    assert_eq!(app.selection, Selection::NoSelection);
    assert_eq!(app.store.len(), DEFAULT_REGIONS.len());
}

#[test]
fn test_cancel_search_is_silent() {
    let mut app = default_app();
    type_search(&mut app, "cu");
    tap(&mut app, "Cuba");

    assert_eq!(update(&mut app, Action::SearchCancelled), Effect::Render);
    assert!(app.search_text.is_empty());
    assert_eq!(app.selection, Selection::NoSelection);
    assert_eq!(app.store.len(), DEFAULT_REGIONS.len());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_app_from_config_file() {
    let dir = std::env::temp_dir().join(format!("regions-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(
        &path,
        r#"
[general]
title = "Pick a country"

[list]
regions = ["Norway", "Nepal", "  ", "Niger"]
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.general.title.as_deref(), Some("Pick a country"));

    let resolved = resolve_with_env(&config, None, Some("ne"), no_env);
    let app = App::from_config(&resolved);

    assert_eq!(app.title, "Pick a country");
    assert_eq!(app.store.regions().len(), 3);
    assert_eq!(app.search_text, "ne");
    assert_eq!(app.store.displayed(), ["Nepal"]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_title_wins_over_file() {
    let mut config = RegionsConfig::default();
    config.general.title = Some("From file".to_string());

    let resolved = resolve(&config, Some("From CLI"), Some(""));

    assert_eq!(resolved.title, "From CLI");
    assert_eq!(resolved.regions.len(), DEFAULT_REGIONS.len());
}

#[test]
fn test_env_overrides_file_but_not_cli() {
    let mut config = RegionsConfig::default();
    config.general.title = Some("From file".to_string());
    config.general.initial_query = Some("be".to_string());
    let env = |key: &str| match key {
        TITLE_ENV => Some("From env".to_string()),
        QUERY_ENV => Some("ch".to_string()),
        _ => None,
    };

    let resolved = resolve_with_env(&config, None, Some("cu"), env);
    let app = App::from_config(&resolved);

    assert_eq!(app.title, "From env");
    assert_eq!(app.search_text, "cu");
    assert_eq!(app.store.displayed(), ["Cuba"]);
}

//! Behavioural properties of the catalog state manager.

use arcade_core::catalog::{CatalogState, View, filter_entries};
use arcade_core::models::GameEntry;
use proptest::prelude::*;

fn entry(id: &str, title: &str, description: &str) -> GameEntry {
    GameEntry::new(id, title, description, format!("{id}.png"), format!("https://{id}"))
}

/// Catalog with unique ids built from generated titles and descriptions.
fn arb_catalog() -> impl Strategy<Value = Vec<GameEntry>> {
    proptest::collection::vec(("[a-zA-ZéÉüÜ ]{0,12}", "[a-zA-ZéÉüÜ ]{0,16}"), 0..12).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (title, description))| {
                entry(&format!("g{i}"), &format!("T{title}"), &description)
            })
            .collect()
    })
}

fn contains_folded(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}

// =============================================================================
// Worked example
// =============================================================================

#[test]
fn snake_and_tetris_example() {
    let mut state = CatalogState::new();
    state.load(vec![
        entry("a", "Snake Classic", "Eat and grow"),
        entry("b", "Tetris", "Stack blocks"),
    ]);

    let ids = |state: &CatalogState| -> Vec<String> {
        state
            .visible_entries()
            .iter()
            .map(|e| e.id.to_string())
            .collect()
    };

    state.set_query("sn");
    assert_eq!(ids(&state), vec!["a"]);

    state.set_query("grow");
    assert_eq!(ids(&state), vec!["a"]);

    state.set_query("z");
    assert!(ids(&state).is_empty());

    state.select("b").unwrap();
    assert!(matches!(state.view(), View::Viewing(e) if e.id == "b"));

    assert!(state.select("x").is_err());
    assert!(matches!(state.view(), View::Viewing(e) if e.id == "b"));
}

#[test]
fn accented_titles_fold_case() {
    let mut state = CatalogState::new();
    state.load(vec![
        entry("p", "Pokémon Éclair", ""),
        entry("t", "Tetris", "Über blocks"),
    ]);

    state.set_query("POKÉ");
    let visible: Vec<_> = state.visible_entries().iter().map(|e| e.id.to_string()).collect();
    assert_eq!(visible, vec!["p"]);

    state.set_query("über");
    let visible: Vec<_> = state.visible_entries().iter().map(|e| e.id.to_string()).collect();
    assert_eq!(visible, vec!["t"]);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn visible_is_ordered_subsequence(catalog in arb_catalog(), query in "[a-zA-Z]{0,3}") {
        let visible = filter_entries(&catalog, &query);

        let mut cursor = catalog.iter();
        for shown in &visible {
            prop_assert!(
                cursor.any(|e| e.id == shown.id),
                "{} is out of order or not in the catalog",
                shown.id
            );
        }
    }

    #[test]
    fn filter_is_sound_and_complete(catalog in arb_catalog(), query in "[a-zA-ZéÉüÜ]{0,3}") {
        let visible = filter_entries(&catalog, &query);

        for e in &catalog {
            let expected = contains_folded(&e.title, &query)
                || contains_folded(&e.description, &query);
            let shown = visible.iter().any(|v| v.id == e.id);
            prop_assert_eq!(expected, shown, "mismatch for {:?}", e);
        }
    }

    #[test]
    fn empty_query_shows_everything(catalog in arb_catalog(), query in "[a-z]{0,4}") {
        let mut state = CatalogState::new();
        state.load(catalog.clone());
        state.set_query(query);
        state.set_query("");

        prop_assert_eq!(state.visible_entries().len(), catalog.len());
    }

    #[test]
    fn select_then_clear_returns_to_browsing(catalog in arb_catalog(), pick in 0usize..12) {
        let mut state = CatalogState::new();
        state.load(catalog.clone());

        if let Some(target) = catalog.get(pick) {
            state.select(target.id.as_str()).unwrap();
        }
        state.clear_selection();
        prop_assert!(state.selected().is_none());
        state.clear_selection();
        prop_assert!(state.view().is_browsing());
    }

    #[test]
    fn select_miss_never_changes_selection(catalog in arb_catalog(), pick in 0usize..12) {
        let mut state = CatalogState::new();
        state.load(catalog.clone());
        if let Some(target) = catalog.get(pick) {
            state.select(target.id.as_str()).unwrap();
        }
        let before = state.selected().map(|e| e.id.clone());

        prop_assert!(state.select("not-a-game").is_err());
        prop_assert_eq!(state.selected().map(|e| e.id.clone()), before);
    }

    #[test]
    fn load_always_resets(catalog in arb_catalog(), query in "[a-z]{0,4}", pick in 0usize..12) {
        let mut state = CatalogState::new();
        state.load(catalog.clone());
        state.set_query(query);
        if let Some(target) = catalog.get(pick) {
            state.select(target.id.as_str()).unwrap();
        }

        state.load(Vec::new());
        prop_assert_eq!(state.query(), "");
        prop_assert!(state.selected().is_none());
    }
}

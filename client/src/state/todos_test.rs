use super::*;

fn todo(id: &str, done: bool) -> Todo {
    Todo {
        id: id.to_owned(),
        item: format!("item {id}"),
        user_id: "u-1".to_owned(),
        is_done: done,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

fn page(ids: &[&str]) -> TodoPage {
    TodoPage { entries: ids.iter().map(|id| todo(id, false)).collect(), total_data: 12, total_page: 2 }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_installs_page() {
    let mut state = TodoState::default();
    let seq = state.begin_load();
    assert!(state.loading);
    assert!(state.finish_load(seq, page(&["a", "b"])));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.total_pages, 2);
    assert_eq!(state.total_items, 12);
}

#[test]
fn stale_load_is_ignored() {
    let mut state = TodoState::default();
    let old = state.begin_load();
    let new = state.begin_load();
    assert!(!state.finish_load(old, page(&["old"])));
    assert!(state.items.is_empty());
    assert!(state.loading);
    assert!(state.finish_load(new, page(&["new"])));
    assert_eq!(state.items[0].id, "new");
}

#[test]
fn stale_failure_is_ignored() {
    let mut state = TodoState::default();
    let old = state.begin_load();
    let _new = state.begin_load();
    assert!(!state.fail_load(old, "boom".to_owned()));
    assert_eq!(state.error, None);
}

#[test]
fn failure_records_message() {
    let mut state = TodoState::default();
    let seq = state.begin_load();
    assert!(state.fail_load(seq, "Failed to fetch todos".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch todos"));
}

#[test]
fn new_page_drops_selection_of_vanished_items() {
    let mut state = TodoState::default();
    state.set_page(page(&["a", "b"]));
    state.toggle_selection("a");
    state.toggle_selection("b");
    state.set_page(page(&["b", "c"]));
    assert_eq!(state.selected, vec!["b".to_owned()]);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn add_and_update() {
    let mut state = TodoState::default();
    state.add(todo("a", false));
    state.update(todo("a", true));
    assert!(state.items[0].is_done);
    state.update(todo("missing", true));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn remove_also_deselects() {
    let mut state = TodoState::default();
    state.set_page(page(&["a", "b"]));
    state.toggle_selection("a");
    state.remove("a");
    assert_eq!(state.items.len(), 1);
    assert!(!state.is_selected("a"));
}

#[test]
fn toggle_selection_flips() {
    let mut state = TodoState::default();
    state.toggle_selection("a");
    assert!(state.is_selected("a"));
    state.toggle_selection("a");
    assert!(!state.is_selected("a"));
}

#[test]
fn remove_selected_removes_only_selected() {
    let mut state = TodoState::default();
    state.set_page(page(&["a", "b", "c"]));
    state.toggle_selection("a");
    state.toggle_selection("c");
    state.remove_selected();
    assert_eq!(state.items.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["b"]);
    assert!(state.selected.is_empty());
}

#[test]
fn clear_selection_keeps_items() {
    let mut state = TodoState::default();
    state.set_page(page(&["a"]));
    state.toggle_selection("a");
    state.clear_selection();
    assert!(state.selected.is_empty());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn reset_invalidates_in_flight_loads() {
    let mut state = TodoState::default();
    state.set_page(page(&["a"]));
    let seq = state.begin_load();
    state.reset();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    // The in-flight sequence no longer matches after the next begin.
    let next = state.begin_load();
    assert_ne!(seq, next);
}

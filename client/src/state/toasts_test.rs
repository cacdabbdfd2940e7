use super::*;

#[test]
fn push_returns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one".to_owned());
    let b = state.push(ToastKind::Error, "two".to_owned());
    assert_ne!(a, b);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one".to_owned());
    state.push(ToastKind::Success, "two".to_owned());
    state.dismiss(&a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "two");
    state.dismiss("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn oldest_toasts_are_dropped() {
    let mut state = ToastState::default();
    for i in 0..(MAX_VISIBLE_TOASTS + 2) {
        state.push(ToastKind::Success, format!("m{i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.items[0].message, "m2");
}

#[test]
fn kinds_have_distinct_classes() {
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
}

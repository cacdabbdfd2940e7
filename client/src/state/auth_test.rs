use session::{MemoryStore, Route};

use super::*;

fn user(role: Role) -> User {
    User { id: "u-1".to_owned(), full_name: "ada lovelace".to_owned(), email: "ada@example.com".to_owned(), role }
}

fn snapshot(role: Role, token: &str) -> String {
    serde_json::json!({
        "state": {
            "user": { "id": "u-1", "fullName": "ada lovelace", "email": "ada@example.com", "role": role.as_str() },
            "token": token,
            "isAuthenticated": true
        },
        "version": 0
    })
    .to_string()
}

fn restored(role: Role, token: &str) -> AuthState<MemoryStore> {
    let backend = MemoryStore::with_entries([("token", token), ("auth-storage", snapshot(role, token).as_str())]);
    let mut auth = AuthState::new(backend);
    auth.rehydrate();
    auth
}

#[test]
fn fresh_state_holds_every_guard() {
    let auth = AuthState::new(MemoryStore::new());
    assert_eq!(auth.guard_decision(&Gate::dashboard_area()), GateDecision::Pending);
    assert_eq!(auth.guard_decision(&Gate::admin_area()), GateDecision::Pending);
    assert_eq!(auth.entry_route(), None);
}

#[test]
fn empty_storage_routes_to_login() {
    let mut auth = AuthState::new(MemoryStore::new());
    auth.rehydrate();
    assert_eq!(auth.entry_route(), Some(Route::Login));
    assert_eq!(auth.guard_decision(&Gate::dashboard_area()), GateDecision::RedirectTo(Route::Login));
    assert!(!auth.can_begin_verification());
}

#[test]
fn rehydrate_runs_once() {
    let mut auth = restored(Role::User, "tok");
    auth.logout();
    auth.rehydrate();
    assert!(!auth.session().is_authenticated());
}

#[test]
fn restored_session_waits_for_verification() {
    let mut auth = restored(Role::User, "tok");
    assert!(auth.is_verifying());
    assert_eq!(auth.guard_decision(&Gate::dashboard_area()), GateDecision::Pending);
    assert_eq!(auth.entry_route(), None);

    assert!(auth.can_begin_verification());
    let token = auth.begin_verification();
    assert_eq!(token.as_deref(), Some("tok"));
    assert!(!auth.can_begin_verification());
    assert_eq!(auth.begin_verification(), None);

    auth.finish_verification("tok", Ok::<_, String>(AuthPayload { user: user(Role::User), token: "tok".to_owned() }));
    assert!(!auth.is_verifying());
    assert_eq!(auth.guard_decision(&Gate::dashboard_area()), GateDecision::Allow);
    assert_eq!(auth.entry_route(), Some(Route::Dashboard));
}

#[test]
fn expired_token_signs_out_and_redirects() {
    let mut auth = restored(Role::User, "expired");
    let token = auth.begin_verification().unwrap();
    auth.finish_verification(&token, Err("401 Unauthorized"));
    assert!(!auth.session().is_authenticated());
    assert_eq!(auth.guard_decision(&Gate::dashboard_area()), GateDecision::RedirectTo(Route::Login));
    assert_eq!(auth.entry_route(), Some(Route::Login));
    assert!(!auth.can_begin_verification());
}

#[test]
fn login_during_verification_wins_over_late_failure() {
    let mut auth = restored(Role::User, "old");
    let token = auth.begin_verification().unwrap();
    auth.login(AuthPayload { user: user(Role::Admin), token: "new".to_owned() });
    auth.finish_verification(&token, Err("401"));
    assert!(auth.session().is_authenticated());
    assert_eq!(auth.session().token(), Some("new"));
    assert_eq!(auth.entry_route(), Some(Route::Admin));
}

#[test]
fn admin_is_partitioned_from_user_area() {
    let mut auth = AuthState::new(MemoryStore::new());
    auth.rehydrate();
    auth.login(AuthPayload { user: user(Role::Admin), token: "t".to_owned() });
    assert_eq!(auth.guard_decision(&Gate::dashboard_area()), GateDecision::RedirectTo(Route::Admin));
    assert_eq!(auth.guard_decision(&Gate::admin_area()), GateDecision::Allow);
}

#[test]
fn display_name_and_initial() {
    let mut auth = AuthState::new(MemoryStore::new());
    assert_eq!(auth.display_name(), "");
    assert_eq!(auth.initial(), "");
    auth.rehydrate();
    auth.login(AuthPayload { user: user(Role::User), token: "t".to_owned() });
    assert_eq!(auth.display_name(), "ada lovelace");
    assert_eq!(auth.initial(), "A");
    assert_eq!(auth.role(), Some(Role::User));
}

#[test]
fn set_user_keeps_token() {
    let mut auth = AuthState::new(MemoryStore::new());
    auth.rehydrate();
    auth.login(AuthPayload { user: user(Role::User), token: "t".to_owned() });
    let mut renamed = user(Role::User);
    renamed.full_name = "Countess".to_owned();
    auth.set_user(renamed);
    assert_eq!(auth.display_name(), "Countess");
    assert_eq!(auth.session().token(), Some("t"));
}

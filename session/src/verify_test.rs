use super::*;
use crate::model::{Role, User};
use crate::state::reduce;
use crate::storage::PersistedSession;

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        full_name: "Barbara Liskov".to_owned(),
        email: "barbara@example.com".to_owned(),
        role,
    }
}

fn restored(token: &str) -> Session {
    let snapshot = PersistedSession { user: Some(user(Role::User)), token: Some(token.to_owned()), is_authenticated: true };
    reduce(&Session::default(), SessionAction::Hydrated(Some(snapshot))).session
}

#[test]
fn disabled_before_hydration() {
    let session = Session::default();
    let mut verifier = Verifier::default();
    assert!(!Verifier::is_enabled(&session));
    assert!(!verifier.is_pending(&session));
    assert_eq!(verifier.begin(&session), None);
}

#[test]
fn disabled_without_token() {
    let session = reduce(&Session::default(), SessionAction::Hydrated(None)).session;
    assert!(!Verifier::is_enabled(&session));
}

#[test]
fn disabled_after_fresh_login() {
    let hydrated = reduce(&Session::default(), SessionAction::Hydrated(None)).session;
    let session = reduce(&hydrated, SessionAction::Login { user: user(Role::User), token: "abc".to_owned() }).session;
    assert!(!Verifier::is_enabled(&session));
}

#[test]
fn pending_before_begin_and_while_in_flight() {
    let session = restored("abc");
    let mut verifier = Verifier::default();
    assert!(verifier.is_pending(&session));
    assert_eq!(verifier.begin(&session).as_deref(), Some("abc"));
    assert!(verifier.is_pending(&session));
    assert!(verifier.is_in_flight());
}

#[test]
fn begins_at_most_once_per_token() {
    let session = restored("abc");
    let mut verifier = Verifier::default();
    assert!(verifier.can_begin(&session));
    assert!(verifier.begin(&session).is_some());
    assert!(!verifier.can_begin(&session));
    assert!(verifier.begin(&session).is_none());
    let _ = verifier.finish(&session, "abc", Err::<AuthPayload, _>("network down"));
    assert!(verifier.begin(&session).is_none());
}

#[test]
fn success_confirms_identity() {
    let session = restored("abc");
    let mut verifier = Verifier::default();
    let token = verifier.begin(&session).unwrap();
    let action = verifier
        .finish(&session, &token, Ok::<_, String>(AuthPayload { user: user(Role::Admin), token: "abc".to_owned() }))
        .unwrap();
    let next = reduce(&session, action).session;
    assert!(next.is_verified());
    assert_eq!(next.user().map(|u| u.role), Some(Role::Admin));
    assert!(!verifier.is_pending(&next));
}

#[test]
fn failure_logs_out() {
    let session = restored("expired");
    let mut verifier = Verifier::default();
    let token = verifier.begin(&session).unwrap();
    let action = verifier.finish(&session, &token, Err::<AuthPayload, _>("401")).unwrap();
    assert_eq!(action, SessionAction::Logout);
    let next = reduce(&session, action).session;
    assert_eq!(next.user(), None);
    assert_eq!(next.token(), None);
    assert!(!next.is_authenticated());
    assert!(!verifier.is_pending(&next));
}

#[test]
fn result_for_replaced_token_is_discarded() {
    let session = restored("old");
    let mut verifier = Verifier::default();
    let token = verifier.begin(&session).unwrap();
    let relogged = reduce(&session, SessionAction::Login { user: user(Role::User), token: "new".to_owned() }).session;
    assert_eq!(verifier.finish(&relogged, &token, Err::<AuthPayload, _>("401")), None);
    assert!(!verifier.is_in_flight());
}

#[test]
fn failure_after_confirmation_is_ignored() {
    let session = restored("abc");
    let mut verifier = Verifier::default();
    let token = verifier.begin(&session).unwrap();
    let confirmed = reduce(&session, SessionAction::Login { user: user(Role::User), token: "abc".to_owned() }).session;
    assert_eq!(verifier.finish(&confirmed, &token, Err::<AuthPayload, _>("timeout")), None);
}

#[test]
fn new_token_after_logout_can_be_verified() {
    let session = restored("first");
    let mut verifier = Verifier::default();
    let token = verifier.begin(&session).unwrap();
    let _ = verifier.finish(&session, &token, Err::<AuthPayload, _>("401"));

    let other = restored("second");
    assert_eq!(verifier.begin(&other).as_deref(), Some("second"));
}

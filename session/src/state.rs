//! Pure session reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `reduce` never touches storage. It returns the next [`Session`] and the list
//! of [`StorageEffect`]s the persistence adapter must apply afterwards, which
//! keeps every transition testable without a browser.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::model::User;
use crate::storage::PersistedSession;

/// Client-held authentication state. One instance per process.
///
/// Fields are private so the `is_authenticated => user && token` invariant can
/// only change through [`reduce`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
    is_authenticated: bool,
    has_hydrated: bool,
    verified: bool,
}

impl Session {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub fn has_hydrated(&self) -> bool {
        self.has_hydrated
    }

    /// True when the current user was returned by the server during this
    /// process (login, register or verification) rather than restored from
    /// storage.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Whether the field invariants hold.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let auth_ok = !self.is_authenticated || (self.user.is_some() && self.token.is_some());
        let verified_ok = !self.verified || self.is_authenticated;
        auth_ok && verified_ok
    }

    /// The subset that survives a restart.
    #[must_use]
    pub fn snapshot(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

/// Every way the session may change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// A server response confirmed `user` and issued `token`.
    Login { user: User, token: String },
    /// Clear identity. Idempotent.
    Logout,
    /// Replace the profile record without touching the credential.
    SetUser(User),
    /// Result of reading durable storage at startup. `None` covers both an
    /// empty and an unreadable store.
    Hydrated(Option<PersistedSession>),
}

/// Storage write requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageEffect {
    WriteToken(String),
    RemoveToken,
    WriteSnapshot(PersistedSession),
}

/// Output of [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub effects: Vec<StorageEffect>,
}

/// Compute the session that follows `action`.
#[must_use]
pub fn reduce(current: &Session, action: SessionAction) -> Transition {
    match action {
        SessionAction::Login { user, token } => {
            let session = Session {
                user: Some(user),
                token: Some(token.clone()),
                is_authenticated: true,
                has_hydrated: current.has_hydrated,
                verified: true,
            };
            let effects = vec![StorageEffect::WriteToken(token), StorageEffect::WriteSnapshot(session.snapshot())];
            Transition { session, effects }
        }
        SessionAction::Logout => {
            let session = cleared(current.has_hydrated);
            let effects = vec![StorageEffect::RemoveToken, StorageEffect::WriteSnapshot(session.snapshot())];
            Transition { session, effects }
        }
        SessionAction::SetUser(user) => {
            let session = Session { user: Some(user), ..current.clone() };
            let effects = vec![StorageEffect::WriteSnapshot(session.snapshot())];
            Transition { session, effects }
        }
        SessionAction::Hydrated(persisted) => hydrate(current, persisted),
    }
}

fn hydrate(current: &Session, persisted: Option<PersistedSession>) -> Transition {
    match persisted {
        Some(PersistedSession { user: Some(user), token: Some(token), .. }) => {
            // A re-read of what this process already confirmed stays confirmed.
            let verified = current.verified
                && current.token.as_deref() == Some(token.as_str())
                && current.user.as_ref() == Some(&user);
            let session = Session {
                user: Some(user),
                token: Some(token.clone()),
                is_authenticated: true,
                has_hydrated: true,
                verified,
            };
            Transition { session, effects: vec![StorageEffect::WriteToken(token)] }
        }
        _ => {
            let session = cleared(true);
            let effects = vec![StorageEffect::RemoveToken, StorageEffect::WriteSnapshot(session.snapshot())];
            Transition { session, effects }
        }
    }
}

fn cleared(has_hydrated: bool) -> Session {
    Session { has_hydrated, ..Session::default() }
}

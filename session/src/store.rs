//! Persisted session store: reducer + persistence adapter.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::model::User;
use crate::state::{Session, SessionAction, reduce};
use crate::storage::{KeyValueStore, SessionPersistence};

/// Owns the process-wide [`Session`] and keeps durable storage in sync with it.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    session: Session,
    persistence: SessionPersistence<S>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Empty, not-yet-hydrated store over `backend`.
    pub fn new(backend: S) -> Self {
        Self { session: Session::default(), persistence: SessionPersistence::new(backend) }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn persistence(&self) -> &SessionPersistence<S> {
        &self.persistence
    }

    /// Record a server-confirmed identity and persist the token.
    pub fn login(&mut self, user: User, token: String) {
        log::info!("session login: user={} role={}", user.id, user.role.as_str());
        self.dispatch(SessionAction::Login { user, token });
    }

    /// Clear identity and remove the stored token.
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            log::info!("session logout");
        }
        self.dispatch(SessionAction::Logout);
    }

    /// Replace the profile record; the credential is untouched.
    pub fn set_user(&mut self, user: User) {
        self.dispatch(SessionAction::SetUser(user));
    }

    /// Restore the persisted subset. Storage failures degrade to an empty
    /// session.
    pub fn rehydrate(&mut self) {
        let persisted = match self.persistence.load() {
            Ok(persisted) => persisted,
            Err(e) => {
                log::warn!("session rehydration failed, starting signed out: {e}");
                None
            }
        };
        self.dispatch(SessionAction::Hydrated(persisted));
        log::debug!(
            "session hydrated: authenticated={} verified={}",
            self.session.is_authenticated(),
            self.session.is_verified()
        );
    }

    /// Run one reducer step, swap the session in a single assignment, then
    /// apply the storage effects.
    pub fn dispatch(&mut self, action: SessionAction) {
        let transition = reduce(&self.session, action);
        debug_assert!(transition.session.is_consistent());
        self.session = transition.session;
        for effect in &transition.effects {
            if let Err(e) = self.persistence.apply(effect) {
                log::warn!("session storage write failed: {e}");
            }
        }
    }
}

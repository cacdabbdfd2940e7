//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the persisted [`SessionStore`] and the one-shot [`Verifier`] so route
//! guards, the entry router and the navigation bar all read one source of
//! truth. Only the methods here mutate the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt::Display;

use session::{
    AuthPayload, Gate, GateDecision, GuardInput, KeyValueStore, Role, Route, Session, SessionStore, User, Verifier,
    entry_route, evaluate_chain,
};

use crate::util::storage::BrowserStorage;

#[derive(Clone, Debug)]
pub struct AuthState<S = BrowserStorage> {
    store: SessionStore<S>,
    verifier: Verifier,
}

impl Default for AuthState<BrowserStorage> {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> AuthState<S> {
    pub fn new(backend: S) -> Self {
        Self { store: SessionStore::new(backend), verifier: Verifier::default() }
    }

    pub fn session(&self) -> &Session {
        self.store.session()
    }

    pub fn user(&self) -> Option<&User> {
        self.session().user()
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    /// Name shown in the navigation bar.
    pub fn display_name(&self) -> String {
        self.user().map(|u| u.full_name.clone()).unwrap_or_default()
    }

    /// Upper-cased first letter of the display name, for the avatar.
    pub fn initial(&self) -> String {
        self.display_name().chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }

    /// Load the persisted session. Only the first call has any effect.
    pub fn rehydrate(&mut self) {
        if !self.session().has_hydrated() {
            self.store.rehydrate();
        }
    }

    pub fn login(&mut self, payload: AuthPayload) {
        self.store.login(payload.user, payload.token);
    }

    pub fn logout(&mut self) {
        self.store.logout();
    }

    pub fn set_user(&mut self, user: User) {
        self.store.set_user(user);
    }

    /// True while a stored token awaits its server check.
    pub fn is_verifying(&self) -> bool {
        self.verifier.is_pending(self.session())
    }

    fn guard_input(&self) -> GuardInput<'_> {
        GuardInput::new(self.session(), &self.verifier)
    }

    pub fn guard_decision(&self, gates: &[Gate]) -> GateDecision {
        evaluate_chain(gates, &self.guard_input())
    }

    /// Where `/` should send the visitor, once that is known.
    pub fn entry_route(&self) -> Option<Route> {
        entry_route(&self.guard_input())
    }

    pub fn can_begin_verification(&self) -> bool {
        self.verifier.can_begin(self.session())
    }

    /// Claim the verification request; returns the token to send.
    pub fn begin_verification(&mut self) -> Option<String> {
        self.verifier.begin(self.store.session())
    }

    /// Apply the server's answer for `token`.
    pub fn finish_verification<E: Display>(&mut self, token: &str, outcome: Result<AuthPayload, E>) {
        if let Some(action) = self.verifier.finish(self.store.session(), token, outcome) {
            self.store.dispatch(action);
        }
    }
}

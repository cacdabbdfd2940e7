//! Bookkeeping for the one-shot server identity check.
//!
//! SYSTEM CONTEXT
//! ==============
//! The network call itself lives in the client. This type decides when it may
//! fire (hydrated, token present, user not yet confirmed, not already tried
//! for this token) and turns its outcome into a [`SessionAction`]. There is no
//! retry: a failure is final for that token.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use std::fmt::Display;

use crate::model::AuthPayload;
use crate::state::{Session, SessionAction};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Verifier {
    /// Token of the request currently awaiting a response.
    in_flight: Option<String>,
    /// Token of the most recent request issued.
    attempted: Option<String>,
}

impl Verifier {
    /// Whether the session calls for verification at all.
    #[must_use]
    pub fn is_enabled(session: &Session) -> bool {
        session.has_hydrated() && session.token().is_some() && !session.is_verified()
    }

    /// True from the moment verification becomes enabled until its outcome has
    /// been applied. Guards hold while this is set.
    #[must_use]
    pub fn is_pending(&self, session: &Session) -> bool {
        if !Self::is_enabled(session) {
            return false;
        }
        let token = session.token();
        self.attempted.as_deref() != token || self.in_flight.as_deref() == token
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether [`Verifier::begin`] would issue a request. Read-only, so a
    /// reactive effect can probe it without notifying its own subscribers.
    #[must_use]
    pub fn can_begin(&self, session: &Session) -> bool {
        Self::is_enabled(session) && self.attempted.as_deref() != session.token()
    }

    /// Claim the request for the session's token. Returns the token to send,
    /// or `None` if verification is disabled or was already tried for it.
    pub fn begin(&mut self, session: &Session) -> Option<String> {
        if !self.can_begin(session) {
            return None;
        }
        let token = session.token()?.to_owned();
        log::debug!("verifying stored session token");
        self.attempted = Some(token.clone());
        self.in_flight = Some(token.clone());
        Some(token)
    }

    /// Settle the request issued for `token` and map its outcome onto the
    /// session. Results for a token the session no longer holds are dropped.
    pub fn finish<E: Display>(
        &mut self,
        session: &Session,
        token: &str,
        outcome: Result<AuthPayload, E>,
    ) -> Option<SessionAction> {
        if self.in_flight.as_deref() == Some(token) {
            self.in_flight = None;
        }
        if session.token() != Some(token) {
            log::debug!("discarding verification result for a replaced token");
            return None;
        }
        match outcome {
            Ok(payload) => Some(SessionAction::Login { user: payload.user, token: payload.token }),
            Err(e) => {
                if session.is_verified() {
                    return None;
                }
                log::warn!("session verification failed, signing out: {e}");
                Some(SessionAction::Logout)
            }
        }
    }
}

//! Route guard chain and entry router.
//!
//! DESIGN
//! ======
//! A protected area is an ordered list of [`Gate`]s. Each gate looks at the
//! same [`GuardInput`] and answers `Allow`, `Pending` or `RedirectTo`. The
//! chain is evaluated outer to inner and the first non-`Allow` answer wins, so
//! an inner gate never runs against a session an outer gate already rejected.
//!
//! No gate redirects before the session has hydrated.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::model::Role;
use crate::route::{Route, home_for_role};
use crate::state::Session;
use crate::verify::Verifier;

/// Progress of the general-auth gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    PendingHydration,
    Verifying,
    Authorized,
    Unauthorized,
}

/// What a gate (or a whole chain) wants the view to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Pending,
    RedirectTo(Route),
}

/// Deny condition of a role gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleRule {
    DenyIfRole(Role),
    DenyUnlessRole(Role),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// General-auth gate. With `require_auth == false` it only waits for
    /// hydration.
    Auth { require_auth: bool, fallback: Route },
    /// Role gate, redirecting to `redirect` when `rule` matches.
    Role { rule: RoleRule, redirect: Route },
}

/// Everything a gate may look at.
#[derive(Clone, Copy, Debug)]
pub struct GuardInput<'a> {
    pub session: &'a Session,
    /// A verification for the session's token has not settled yet.
    pub verifying: bool,
}

impl<'a> GuardInput<'a> {
    #[must_use]
    pub fn new(session: &'a Session, verifier: &Verifier) -> Self {
        Self { session, verifying: verifier.is_pending(session) }
    }

    #[must_use]
    pub fn auth_phase(&self) -> AuthPhase {
        if !self.session.has_hydrated() {
            AuthPhase::PendingHydration
        } else if self.verifying {
            AuthPhase::Verifying
        } else if self.session.is_authenticated() && self.session.token().is_some() {
            AuthPhase::Authorized
        } else {
            AuthPhase::Unauthorized
        }
    }
}

impl Gate {
    /// Auth gate that sends anonymous visitors to the login page.
    #[must_use]
    pub fn require_auth() -> Self {
        Self::Auth { require_auth: true, fallback: Route::Login }
    }

    /// Auth gate for public routes that still need a hydrated session.
    #[must_use]
    pub fn session_aware() -> Self {
        Self::Auth { require_auth: false, fallback: Route::Login }
    }

    /// Chain for the ordinary user dashboard: admins are sent to their area.
    #[must_use]
    pub fn dashboard_area() -> Vec<Self> {
        vec![
            Self::require_auth(),
            Self::Role { rule: RoleRule::DenyIfRole(Role::Admin), redirect: home_for_role(Role::Admin) },
        ]
    }

    /// Chain for the admin panel: everyone but admins is sent to the dashboard.
    #[must_use]
    pub fn admin_area() -> Vec<Self> {
        vec![
            Self::require_auth(),
            Self::Role { rule: RoleRule::DenyUnlessRole(Role::Admin), redirect: home_for_role(Role::User) },
        ]
    }

    #[must_use]
    pub fn evaluate(&self, input: &GuardInput<'_>) -> GateDecision {
        match *self {
            Self::Auth { require_auth, fallback } => match input.auth_phase() {
                AuthPhase::PendingHydration => GateDecision::Pending,
                AuthPhase::Verifying if require_auth => GateDecision::Pending,
                AuthPhase::Unauthorized if require_auth => GateDecision::RedirectTo(fallback),
                _ => GateDecision::Allow,
            },
            Self::Role { rule, redirect } => {
                if !input.session.has_hydrated() || input.verifying {
                    return GateDecision::Pending;
                }
                let role = input.session.user().filter(|_| input.session.is_authenticated()).map(|u| u.role);
                let denied = match (rule, role) {
                    (RoleRule::DenyIfRole(target), Some(role)) => role == target,
                    (RoleRule::DenyIfRole(_), None) => false,
                    (RoleRule::DenyUnlessRole(target), Some(role)) => role != target,
                    // No confirmed role: fail closed.
                    (RoleRule::DenyUnlessRole(_), None) => true,
                };
                if denied { GateDecision::RedirectTo(redirect) } else { GateDecision::Allow }
            }
        }
    }
}

/// Evaluate `gates` in order; the first non-`Allow` decision wins.
#[must_use]
pub fn evaluate_chain(gates: &[Gate], input: &GuardInput<'_>) -> GateDecision {
    gates
        .iter()
        .map(|gate| gate.evaluate(input))
        .find(|decision| *decision != GateDecision::Allow)
        .unwrap_or(GateDecision::Allow)
}

/// Landing decision for `/`. `None` while the session is still resolving.
#[must_use]
pub fn entry_route(input: &GuardInput<'_>) -> Option<Route> {
    match input.auth_phase() {
        AuthPhase::PendingHydration | AuthPhase::Verifying => None,
        AuthPhase::Authorized => Some(input.session.user().map_or(Route::Login, |u| home_for_role(u.role))),
        AuthPhase::Unauthorized => Some(Route::Login),
    }
}

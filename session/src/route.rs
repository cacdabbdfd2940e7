//! Application route table and the role-to-area mapping.
//!
//! `home_for_role` is the single source for "where does this role live"; the
//! entry router and both role gates derive their destinations from it so the
//! partition cannot drift.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::model::Role;

/// Top-level client routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Admin,
}

impl Route {
    /// Absolute path used for navigation.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Admin => "/admin",
        }
    }

    /// Parse a navigation path back into a route.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/dashboard" => Some(Self::Dashboard),
            "/admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// The only area a user with `role` may reach.
#[must_use]
pub fn home_for_role(role: Role) -> Route {
    match role {
        Role::Admin => Route::Admin,
        Role::User => Route::Dashboard,
    }
}

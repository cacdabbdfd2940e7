//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied around the pages in `app`, not
//! inside them.

pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;

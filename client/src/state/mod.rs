//! Reactive state held in Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal` per state type. Each type is plain data with
//! methods so it can be unit-tested without a reactive runtime.

pub mod auth;
pub mod filters;
pub mod toasts;
pub mod todos;

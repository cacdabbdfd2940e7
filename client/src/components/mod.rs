//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers;
//! `guard` is the only one that decides whether a page may render.

pub mod guard;
pub mod loading;
pub mod navigation;
pub mod pagination;
pub mod toasts;

//! Session and authorization core for the todo portal client.
//!
//! This crate is UI-framework agnostic: it owns the session reducer, the
//! durable-storage adapter, the identity verifier bookkeeping and the route
//! guard chain. The `client` crate wraps these in Leptos signals; tests drive
//! them directly.
//!
//! DESIGN
//! ======
//! Every mutation goes through [`state::reduce`], which returns the next
//! [`Session`] together with the [`StorageEffect`]s to apply. [`SessionStore`]
//! pairs the reducer with a [`KeyValueStore`] so the storage backend can be
//! swapped (browser `localStorage`, or [`MemoryStore`] for tests and SSR).

pub mod guard;
pub mod model;
pub mod route;
pub mod state;
pub mod storage;
pub mod store;
pub mod verify;

pub use guard::{AuthPhase, Gate, GateDecision, GuardInput, RoleRule, entry_route, evaluate_chain};
pub use model::{AuthPayload, Role, User};
pub use route::{Route, home_for_role};
pub use state::{Session, SessionAction, StorageEffect, Transition, reduce};
pub use storage::{KeyValueStore, MemoryStore, PersistedSession, SessionPersistence, StorageError};
pub use store::SessionStore;
pub use verify::Verifier;

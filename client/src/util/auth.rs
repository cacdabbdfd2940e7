//! Shared auth wiring for the app shell and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Effects only run in the browser, so both rehydration and verification
//! happen after the server-rendered markup has been hydrated. Until then every
//! guard reports `Pending`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::state::todos::TodoState;
use crate::util::toast::notify_success;

/// Guard redirects replace the current history entry so "back" does not
/// bounce into the guard again.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Restore the persisted session once the app is running in the browser.
pub fn install_session_hydration(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        if auth.with_untracked(|a| a.session().has_hydrated()) {
            return;
        }
        auth.update(AuthState::rehydrate);
    });
}

/// Confirm a restored token with the server, once per token.
///
/// A failure signs the session out; the guards then redirect to `/login`.
pub fn install_session_verifier(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        if !auth.with(AuthState::can_begin_verification) {
            return;
        }
        let Some(token) = auth.try_update(AuthState::begin_verification).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::verify(&token).await;
            auth.update(|a| a.finish_verification(&token, outcome));
        });
    });
}

/// Sign out: tell the server, then clear local state regardless of the
/// outcome and go to `/login`.
pub fn sign_out<F>(auth: RwSignal<AuthState>, todos: RwSignal<TodoState>, toasts: RwSignal<ToastState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.update(AuthState::logout);
        todos.update(TodoState::reset);
        notify_success(toasts, "Logged out successfully");
        navigate(session::Route::Login.path(), NavigateOptions::default());
    });
}

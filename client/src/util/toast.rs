//! Toast helpers for pages and components.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState};

/// Show a toast and schedule its removal after the configured lifetime.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let id = toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        let ttl = u64::from(crate::config::client_config().toast_ttl_ms);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(ttl)).await;
            toasts.update(|t| t.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

pub fn notify_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message);
}

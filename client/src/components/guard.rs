//! Route guard: renders its children only when every gate allows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision is derived from the auth context with
//! [`session::evaluate_chain`]. `Pending` shows a placeholder, a redirect
//! replaces the current history entry. Nothing navigates before the session
//! has been rehydrated.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{Gate, GateDecision};

use crate::components::loading::LoadingPlaceholder;
use crate::state::auth::AuthState;
use crate::util::auth::redirect_options;

#[component]
pub fn RouteGuard(
    /// Gates evaluated outer to inner.
    gates: Vec<Gate>,
    #[prop(into, default = "Loading...".to_owned())] pending_label: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| auth.with(|a| a.guard_decision(&gates)));

    Effect::new(move || {
        if let GateDecision::RedirectTo(route) = decision.get() {
            log::debug!("guard redirect to {}", route.path());
            navigate(route.path(), redirect_options());
        }
    });

    view! {
        <Show
            when=move || decision.get() == GateDecision::Allow
            fallback=move || view! { <LoadingPlaceholder label=pending_label.clone()/> }
        >
            {children()}
        </Show>
    }
}

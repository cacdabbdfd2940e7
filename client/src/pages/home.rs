//! Entry router for `/`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingPlaceholder;
use crate::state::auth::AuthState;
use crate::util::auth::redirect_options;

/// Sends the visitor to their home area, or to `/login`, once the session
/// has been restored and any stored token checked.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let target = Memo::new(move |_| auth.with(AuthState::entry_route));
    Effect::new(move || {
        if let Some(route) = target.get() {
            navigate(route.path(), redirect_options());
        }
    });

    let label = move || if auth.with(|a| a.session().has_hydrated()) { "Redirecting..." } else { "Loading..." };

    move || view! { <LoadingPlaceholder label=label()/> }
}

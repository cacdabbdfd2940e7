//! Top navigation bar with the profile menu and logout action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::state::todos::TodoState;
use crate::util::auth::sign_out;

#[component]
pub fn Navigation(
    /// Admin layout: no search box.
    #[prop(optional)]
    admin: bool,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let todos = expect_context::<RwSignal<TodoState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let menu_open = RwSignal::new(false);
    let logging_out = RwSignal::new(false);

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        sign_out(auth, todos, toasts, navigate.clone());
    };

    view! {
        <nav class="nav" class:nav--admin=admin>
            <Show when=move || !admin>
                <div class="nav__search">
                    <input class="nav__search-input" type="text" placeholder="Search (Ctrl+/)"/>
                </div>
            </Show>
            <div class="nav__profile">
                <button
                    class="nav__profile-button"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                    on:mouseenter=move |_| menu_open.set(true)
                >
                    <span class="nav__name">{move || auth.with(AuthState::display_name)}</span>
                    <span class="nav__avatar">{move || auth.with(AuthState::initial)}</span>
                </button>
                <div
                    class="nav__menu"
                    class:nav__menu--open=move || menu_open.get()
                    on:mouseleave=move |_| menu_open.set(false)
                >
                    <div class="nav__menu-identity">
                        <div class="nav__menu-name">{move || auth.with(AuthState::display_name)}</div>
                        <div class="nav__menu-email">
                            {move || auth.with(|a| a.user().map(|u| u.email.clone()).unwrap_or_default())}
                        </div>
                    </div>
                    <button class="nav__menu-item" on:click=on_logout disabled=move || logging_out.get()>
                        {move || if logging_out.get() { "Logging out..." } else { "Logout" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}

//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::home_for_role;

use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::toast::{notify_error, notify_success};
use crate::util::validation::{FieldErrors, INVALID_EMAIL, MIN_PASSWORD_LEN, PASSWORD_TOO_SHORT, is_valid_email, record};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

/// Field errors for `form`; empty when it may be submitted.
#[must_use]
pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !is_valid_email(&form.email) {
        record(&mut errors, "email", INVALID_EMAIL);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        record(&mut errors, "password", PASSWORD_TOO_SHORT);
    }
    errors
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let field_error = move |field: &'static str| errors.with(|e| e.get(field).cloned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        let found = validate_login(&form);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&form.to_request()).await {
                Ok(envelope) => {
                    let message = envelope.message_or("Login successful!");
                    let home = home_for_role(envelope.content.user.role);
                    auth.update(|a| a.login(envelope.content));
                    notify_success(toasts, message);
                    navigate(home.path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    notify_error(toasts, e.user_message("Login failed"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign In"</h1>
                <p class="auth-card__subtitle">"Just sign in if you have an account in here. Enjoy our Website"</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <label class="auth-field">
                        <span class="auth-field__label">"Your Email"</span>
                        <input
                            class="auth-field__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || field_error("email"))/>
                    </label>
                    <label class="auth-field">
                        <span class="auth-field__label">"Password"</span>
                        <div class="auth-field__password">
                            <input
                                class="auth-field__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="auth-field__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        <FieldError message=Signal::derive(move || field_error("password"))/>
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Register now"</a>
                </p>
            </div>
        </div>
    }
}

/// Inline validation message under a form field.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p class="auth-field__error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

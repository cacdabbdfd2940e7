//! Registration page.
//!
//! Only name, email and password are sent; the profile fields are checked
//! locally and then dropped.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::home_for_role;

use crate::net::types::RegisterRequest;
use crate::pages::login::FieldError;
use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::toast::{notify_error, notify_success};
use crate::util::validation::{
    FieldErrors, INVALID_EMAIL, MIN_PASSWORD_LEN, PASSWORD_TOO_SHORT, char_len_within, is_valid_email, record,
};

/// Country choices offered by the form, as `(code, name)`.
pub const COUNTRIES: [(&str, &str); 6] = [
    ("ID", "Indonesia"),
    ("US", "United States"),
    ("UK", "United Kingdom"),
    ("SG", "Singapore"),
    ("MY", "Malaysia"),
    ("TH", "Thailand"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
    pub country: String,
    pub about_yourself: String,
}

impl RegisterForm {
    /// First and last name joined, skipping blanks.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            full_name: self.full_name(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        }
    }
}

#[must_use]
pub fn validate_register(form: &RegisterForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.full_name().is_empty() {
        record(&mut errors, "fullName", "Full name is required");
    }
    if !is_valid_email(&form.email) {
        record(&mut errors, "email", INVALID_EMAIL);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        record(&mut errors, "password", PASSWORD_TOO_SHORT);
    }
    if form.confirm_password.chars().count() < MIN_PASSWORD_LEN {
        record(&mut errors, "confirmPassword", "Confirm password is required");
    }
    let phone_len = form.phone_number.trim().chars().count();
    if phone_len < 10 {
        record(&mut errors, "phoneNumber", "Phone number must be at least 10 digits");
    } else if phone_len > 20 {
        record(&mut errors, "phoneNumber", "Phone number must be at most 20 digits");
    }
    if form.country.trim().is_empty() {
        record(&mut errors, "country", "Country is required");
    }
    let about = form.about_yourself.trim();
    if !char_len_within(about, 10, usize::MAX) {
        record(&mut errors, "aboutYourself", "Please tell us at least 10 characters about yourself");
    } else if !char_len_within(about, 0, 500) {
        record(&mut errors, "aboutYourself", "About yourself must be at most 500 characters");
    }
    if form.password != form.confirm_password {
        record(&mut errors, "confirmPassword", "Passwords don't match");
    }
    errors
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let field_error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).cloned()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        let found = validate_register(&current);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&current.to_request()).await {
                Ok(envelope) => {
                    let message = envelope.message_or("Registration successful!");
                    let home = home_for_role(envelope.content.user.role);
                    auth.update(|a| a.login(envelope.content));
                    notify_success(toasts, message);
                    navigate(home.path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    notify_error(toasts, e.user_message("Registration failed"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1 class="auth-card__title">"Register"</h1>
                <p class="auth-card__subtitle">"Create an account to start tracking your tasks."</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class="auth-form__row">
                        <TextField
                            label="First Name"
                            value=Signal::derive(move || form.with(|f| f.first_name.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.first_name = v))
                        />
                        <TextField
                            label="Last Name"
                            value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.last_name = v))
                        />
                    </div>
                    <FieldError message=field_error("fullName")/>
                    <div class="auth-form__row">
                        <label class="auth-field">
                            <span class="auth-field__label">"Country"</span>
                            <select
                                class="auth-field__input"
                                prop:value=move || form.with(|f| f.country.clone())
                                on:change=move |ev| form.update(|f| f.country = event_target_value(&ev))
                            >
                                <option value="" disabled=true>""</option>
                                {COUNTRIES
                                    .iter()
                                    .map(|(code, name)| view! { <option value=*code>{*name}</option> })
                                    .collect_view()}
                            </select>
                            <FieldError message=field_error("country")/>
                        </label>
                        <div class="auth-field-group">
                            <TextField
                                label="Phone Number"
                                input_type="tel"
                                value=Signal::derive(move || form.with(|f| f.phone_number.clone()))
                                on_input=Callback::new(move |v| form.update(|f| f.phone_number = v))
                            />
                            <FieldError message=field_error("phoneNumber")/>
                        </div>
                    </div>
                    <TextField
                        label="Mail Address"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                    />
                    <FieldError message=field_error("email")/>
                    <div class="auth-form__row">
                        <div class="auth-field-group">
                            <TextField
                                label="Password"
                                input_type="password"
                                value=Signal::derive(move || form.with(|f| f.password.clone()))
                                on_input=Callback::new(move |v| form.update(|f| f.password = v))
                            />
                            <FieldError message=field_error("password")/>
                        </div>
                        <div class="auth-field-group">
                            <TextField
                                label="Confirm Password"
                                input_type="password"
                                value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                                on_input=Callback::new(move |v| form.update(|f| f.confirm_password = v))
                            />
                            <FieldError message=field_error("confirmPassword")/>
                        </div>
                    </div>
                    <label class="auth-field">
                        <span class="auth-field__label">"Tell us about yourself"</span>
                        <textarea
                            class="auth-field__input auth-field__input--textarea"
                            maxlength="500"
                            prop:value=move || form.with(|f| f.about_yourself.clone())
                            on:input=move |ev| form.update(|f| f.about_yourself = event_target_value(&ev))
                        ></textarea>
                        <FieldError message=field_error("aboutYourself")/>
                    </label>
                    <div class="auth-form__actions">
                        <a class="auth-link" href="/login">"Login"</a>
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn TextField(
    #[prop(into)] label: String,
    #[prop(into, default = "text".to_owned())] input_type: String,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="auth-field">
            <span class="auth-field__label">{label}</span>
            <input
                class="auth-field__input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

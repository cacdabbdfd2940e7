use leptos::prelude::*;

/// Full-page spinner shown while a guard is pending or data is loading.
#[component]
pub fn LoadingPlaceholder(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <div class="loading__spinner"></div>
            <p class="loading__label">{label}</p>
        </div>
    }
}

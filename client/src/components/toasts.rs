//! Stack of transient notifications in the corner of the screen.

use leptos::prelude::*;

use crate::state::toasts::ToastState;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id.clone() let:toast>
                {
                    let id = toast.id.clone();
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(&id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}

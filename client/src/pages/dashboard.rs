//! User dashboard: the signed-in user's to-do list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only behind the user-area guard, so the session is confirmed by
//! the time the first fetch fires. Every mutation refetches the current page;
//! the server stays the source of truth.

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::components::pagination::Pagination;
use crate::net::api::{self, ApiError};
use crate::state::filters::TodoFilters;
use crate::state::toasts::ToastState;
use crate::state::todos::TodoState;
use crate::util::toast::{notify_error, notify_success};

/// Fetch the page described by `filters` whenever it or `reload` changes.
///
/// Failures are recorded on `todos` and toasted with `error_message`.
pub(crate) fn install_todo_loader(
    filters: RwSignal<TodoFilters>,
    todos: RwSignal<TodoState>,
    reload: RwSignal<u32>,
    toasts: RwSignal<ToastState>,
    error_message: fn(&ApiError) -> String,
) {
    Effect::new(move || {
        let current = filters.get();
        reload.track();
        let Some(seq) = todos.try_update(TodoState::begin_load) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_todos(&current).await {
                Ok(page) => {
                    todos.update(|t| {
                        t.finish_load(seq, page);
                    });
                }
                Err(e) => {
                    log::warn!("todo fetch failed: {e}");
                    let message = error_message(&e);
                    let applied = todos.try_update(|t| t.fail_load(seq, message.clone())).unwrap_or(false);
                    if applied {
                        notify_error(toasts, message);
                    }
                }
            }
        });
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let todos = expect_context::<RwSignal<TodoState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let filters = RwSignal::new(TodoFilters::default());
    let reload = RwSignal::new(0_u32);
    let refetch = move || reload.update(|n| *n = n.wrapping_add(1));
    install_todo_loader(filters, todos, reload, toasts, |e| e.user_message("Failed to fetch todos"));

    let new_item = RwSignal::new(String::new());
    let creating = RwSignal::new(false);
    let marking = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let add_todo = move || {
        let item = new_item.get_untracked().trim().to_owned();
        if item.is_empty() || creating.get_untracked() {
            return;
        }
        creating.set(true);
        leptos::task::spawn_local(async move {
            match api::create_todo(&item).await {
                Ok(envelope) => {
                    todos.update(|t| t.add(envelope.content));
                    new_item.set(String::new());
                    notify_success(toasts, "Todo created successfully!");
                    refetch();
                }
                Err(e) => notify_error(toasts, e.user_message("Failed to create todo")),
            }
            creating.set(false);
        });
    };

    let toggle_done = move |id: String, is_done: bool| {
        if marking.get_untracked() {
            return;
        }
        marking.set(true);
        leptos::task::spawn_local(async move {
            match api::mark_todo(&id, !is_done).await {
                Ok(envelope) => {
                    let done = envelope.content.is_done;
                    todos.update(|t| t.update(envelope.content));
                    let state = if done { "completed" } else { "incomplete" };
                    notify_success(toasts, format!("Todo marked as {state}!"));
                    refetch();
                }
                Err(e) => notify_error(toasts, e.user_message("Failed to mark todo")),
            }
            marking.set(false);
        });
    };

    let delete_selected = move |_| {
        let ids = todos.with_untracked(|t| t.selected.clone());
        if ids.is_empty() || deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        leptos::task::spawn_local(async move {
            match api::delete_todos(&ids).await {
                Ok(()) => {
                    todos.update(TodoState::remove_selected);
                    notify_success(toasts, "Selected todos deleted successfully!");
                    refetch();
                }
                Err(e) => {
                    notify_error(toasts, e.user_message("Failed to delete todos"));
                    refetch();
                }
            }
            deleting.set(false);
        });
    };

    let is_first_load = move || todos.with(|t| t.loading && t.items.is_empty());

    view! {
        <div class="dashboard">
            <div class="dashboard__backdrop"></div>
            <h1 class="dashboard__title">"To Do"</h1>
            <div class="todo-card">
                <div class="todo-card__add">
                    <label class="todo-card__add-label">"Add a new task"</label>
                    <div class="todo-card__add-row">
                        <input
                            class="todo-card__input"
                            type="text"
                            placeholder="Enter your todo..."
                            disabled=move || creating.get()
                            prop:value=move || new_item.get()
                            on:input=move |ev| new_item.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    add_todo();
                                }
                            }
                        />
                        <button
                            class="btn btn--primary"
                            disabled=move || creating.get() || new_item.with(|v| v.trim().is_empty())
                            on:click=move |_| add_todo()
                        >
                            {move || if creating.get() { "Adding..." } else { "Add Todo" }}
                        </button>
                    </div>
                </div>

                <Show when=move || !is_first_load() fallback=|| view! { <LoadingPlaceholder label="Loading todos..."/> }>
                    <Show
                        when=move || todos.with(|t| t.error.is_none())
                        fallback=move || {
                            view! {
                                <div class="todo-card__error">
                                    <p>{move || todos.with(|t| t.error.clone().unwrap_or_default())}</p>
                                    <button class="btn" on:click=move |_| refetch()>"Retry"</button>
                                </div>
                            }
                        }
                    >
                        <Show
                            when=move || todos.with(|t| !t.items.is_empty())
                            fallback=|| view! { <p class="todo-card__empty">"No todos yet. Add one above!"</p> }
                        >
                            <ul class="todo-list">
                                <For
                                    each=move || todos.get().items
                                    key=|todo| (todo.id.clone(), todo.is_done, todo.updated_at.clone())
                                    let:todo
                                >
                                    {
                                        let select_id = todo.id.clone();
                                        let selected_id = todo.id.clone();
                                        let toggle_id = todo.id.clone();
                                        let is_done = todo.is_done;
                                        view! {
                                            <li class="todo-list__item">
                                                <button
                                                    class="todo-list__select"
                                                    class:todo-list__select--on=move || {
                                                        todos.with(|t| t.is_selected(&selected_id))
                                                    }
                                                    on:click=move |_| todos.update(|t| t.toggle_selection(&select_id))
                                                ></button>
                                                <span class="todo-list__text">{todo.item.clone()}</span>
                                                <button
                                                    class="todo-list__mark"
                                                    class:todo-list__mark--done=is_done
                                                    disabled=move || marking.get()
                                                    title=if is_done { "Mark as incomplete" } else { "Mark as completed" }
                                                    on:click=move |_| toggle_done(toggle_id.clone(), is_done)
                                                >
                                                    {if is_done { "✓" } else { "✕" }}
                                                </button>
                                            </li>
                                        }
                                    }
                                </For>
                            </ul>
                        </Show>
                    </Show>
                </Show>

                <div class="todo-card__footer">
                    <button
                        class="btn btn--danger"
                        disabled=move || deleting.get() || todos.with(|t| t.selected.is_empty())
                        on:click=delete_selected
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete Selected" }}
                    </button>
                    <Pagination
                        current=Signal::derive(move || filters.with(|f| f.page))
                        total=Signal::derive(move || todos.with(|t| t.total_pages))
                        on_change=Callback::new(move |page| filters.update(|f| f.set_page(page)))
                    />
                </div>
            </div>
        </div>
    }
}

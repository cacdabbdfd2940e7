//! Admin panel: every user's to-dos with search, status and owner filters.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::components::pagination::Pagination;
use crate::pages::dashboard::install_todo_loader;
use crate::state::filters::{FilterChange, StatusFilter, TodoFilters};
use crate::state::toasts::ToastState;
use crate::state::todos::TodoState;

/// Status column label.
#[must_use]
pub fn status_label(is_done: bool) -> &'static str {
    if is_done { "Success" } else { "Pending" }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Admin listings are not shared with the user dashboard.
    let todos = RwSignal::new(TodoState::default());
    let filters = RwSignal::new(TodoFilters::default());
    let reload = RwSignal::new(0_u32);
    install_todo_loader(filters, todos, reload, toasts, |_| "Failed to load admin data".to_owned());

    let sidebar_collapsed = RwSignal::new(false);
    let search_draft = RwSignal::new(String::new());

    let apply = move |change: FilterChange| filters.update(|f| f.apply(change));
    let run_search = move || apply(FilterChange::Search(search_draft.get_untracked()));

    view! {
        <div class="admin" class:admin--collapsed=move || sidebar_collapsed.get()>
            <aside class="admin__sidebar">
                <div class="admin__sidebar-head">
                    <h2 class="admin__brand">"Nodewave"</h2>
                    <button
                        class="admin__collapse"
                        aria-label="Toggle sidebar"
                        on:click=move |_| sidebar_collapsed.update(|c| *c = !*c)
                    >
                        "‹"
                    </button>
                </div>
                <nav class="admin__menu">
                    <a class="admin__menu-item admin__menu-item--active" href="/admin" title="To Do">
                        <span class="admin__menu-label">"To Do"</span>
                    </a>
                </nav>
            </aside>

            <main class="admin__main">
                <h1 class="admin__title">"To Do"</h1>
                <div class="admin__card">
                    <div class="admin__filters">
                        <div class="admin__search">
                            <input
                                class="admin__input"
                                type="text"
                                placeholder="Search"
                                prop:value=move || search_draft.get()
                                on:input=move |ev| search_draft.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        run_search();
                                    }
                                }
                            />
                            <button class="btn btn--primary" on:click=move |_| run_search()>"Search"</button>
                        </div>
                        <select
                            class="admin__input"
                            prop:value=move || filters.with(|f| f.status.as_str())
                            on:change=move |ev| apply(FilterChange::Status(StatusFilter::from_value(&event_target_value(&ev))))
                        >
                            <option value="all">"All"</option>
                            <option value="done">"Done"</option>
                            <option value="undone">"Undone"</option>
                        </select>
                        <input
                            class="admin__input"
                            type="text"
                            placeholder="User ID"
                            prop:value=move || filters.with(|f| f.user_id.clone())
                            on:change=move |ev| apply(FilterChange::UserId(event_target_value(&ev)))
                        />
                        <button
                            class="btn"
                            on:click=move |_| {
                                search_draft.set(String::new());
                                filters.update(TodoFilters::clear);
                            }
                        >
                            "Clear Filters"
                        </button>
                    </div>

                    <Show
                        when=move || !todos.with(|t| t.loading)
                        fallback=|| view! { <LoadingPlaceholder label="Loading todos..."/> }
                    >
                        <table class="admin__table">
                            <thead>
                                <tr>
                                    <th>"User ID"</th>
                                    <th>"To Do"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show
                                    when=move || todos.with(|t| !t.items.is_empty())
                                    fallback=|| {
                                        view! {
                                            <tr>
                                                <td class="admin__empty" colspan="3">"No todos found"</td>
                                            </tr>
                                        }
                                    }
                                >
                                    <For each=move || todos.get().items key=|todo| todo.id.clone() let:todo>
                                        <tr>
                                            <td>{todo.user_id.clone()}</td>
                                            <td>{todo.item.clone()}</td>
                                            <td>
                                                <span
                                                    class="admin__status"
                                                    class:admin__status--done=todo.is_done
                                                >
                                                    {status_label(todo.is_done)}
                                                </span>
                                            </td>
                                        </tr>
                                    </For>
                                </Show>
                            </tbody>
                        </table>
                    </Show>

                    <div class="admin__footer">
                        <span class="admin__count">
                            {move || todos.with(|t| format!("{} todos", t.total_items))}
                        </span>
                        <Pagination
                            current=Signal::derive(move || filters.with(|f| f.page))
                            total=Signal::derive(move || todos.with(|t| t.total_pages))
                            on_change=Callback::new(move |page| filters.update(|f| f.set_page(page)))
                        />
                    </div>
                </div>
            </main>
        </div>
    }
}

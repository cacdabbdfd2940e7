//! Pagination control shared by the dashboard and the admin panel.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Numbered buttons are shown for at most this many pages.
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Current position within a paginated listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub total: u32,
}

impl PageWindow {
    #[must_use]
    pub fn new(current: u32, total: u32) -> Self {
        Self { current: current.max(1), total }
    }

    /// The control is hidden for single-page results.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.total > 1
    }

    #[must_use]
    pub fn buttons(self) -> Vec<u32> {
        (1..=self.total.min(MAX_PAGE_BUTTONS)).collect()
    }

    #[must_use]
    pub fn prev(self) -> Option<u32> {
        (self.current > 1).then(|| self.current - 1)
    }

    #[must_use]
    pub fn next(self) -> Option<u32> {
        (self.current < self.total).then(|| self.current + 1)
    }
}

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let window = move || PageWindow::new(current.get(), total.get());

    view! {
        <Show when=move || window().is_visible()>
            <div class="pagination">
                <button
                    class="pagination__step"
                    disabled=move || window().prev().is_none()
                    on:click=move |_| {
                        if let Some(page) = window().prev() {
                            on_change.run(page);
                        }
                    }
                >
                    "Previous"
                </button>
                {move || {
                    let w = window();
                    w.buttons()
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--active=page == w.current
                                    on:click=move |_| on_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__step"
                    disabled=move || window().next().is_none()
                    on:click=move |_| {
                        if let Some(page) = window().next() {
                            on_change.run(page);
                        }
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}

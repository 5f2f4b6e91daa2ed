//! Previous/next pagination control for server-paged lists.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use leptos::prelude::*;

/// Page the Previous control moves to, or `None` on the first page.
#[must_use]
pub fn previous_page(current: u32) -> Option<u32> {
    if current > 1 { Some(current - 1) } else { None }
}

/// Page the Next control moves to, or `None` on (or past) the last page.
#[must_use]
pub fn next_page(current: u32, total_pages: u32) -> Option<u32> {
    if current < total_pages { Some(current + 1) } else { None }
}

/// Page navigation for a list whose paging lives in the parent's state.
///
/// Renders nothing while there is only one page.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pager">
                <button
                    class="pager__button"
                    disabled=move || previous_page(page.get()).is_none()
                    on:click=move |_| {
                        if let Some(target) = previous_page(page.get_untracked()) {
                            on_page.run(target);
                        }
                    }
                >
                    "Previous"
                </button>
                <span class="pager__label">
                    {move || format!("Page {} of {}", page.get(), total_pages.get())}
                </span>
                <button
                    class="pager__button"
                    disabled=move || next_page(page.get(), total_pages.get()).is_none()
                    on:click=move |_| {
                        let target =
                            next_page(page.get_untracked(), total_pages.get_untracked());
                        if let Some(target) = target {
                            on_page.run(target);
                        }
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}

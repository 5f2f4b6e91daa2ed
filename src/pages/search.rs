//! Public search page over the resource index.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. It searches without a session, and adds
//! bookmark toggles once one exists. Rapid filter changes race their fetches;
//! [`PagedState`] drops whichever completion is stale.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::components::pager::Pager;
use crate::components::resource_card::ResourceCard;
use crate::net::types::{CATEGORIES, RESOURCE_TYPES, Resource, category_label};
use crate::state::paging::PagedState;
use crate::state::session::SessionState;

const RESULTS_PER_PAGE: u32 = 10;

/// A select value as a search filter; empty means "all".
fn selected_filter(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Headline above the result list.
fn results_summary(total: u64, query: &str) -> String {
    let noun = if total == 1 { "resource" } else { "resources" };
    let query = query.trim();
    if query.is_empty() {
        format!("{total} {noun}")
    } else {
        format!("{total} {noun} for \"{query}\"")
    }
}

/// Search page with category and type filters plus paging.
#[component]
pub fn SearchPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let query = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let resource_type = RwSignal::new(String::new());
    let last_query = RwSignal::new(String::new());
    let search = RwSignal::new(PagedState::<Resource>::default());
    let bookmarks = RwSignal::new(HashSet::<String>::new());
    let bookmarks_loaded = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let run_search = move |page: u32| {
        let params = crate::net::api::SearchParams {
            query: query.get_untracked().trim().to_owned(),
            category: selected_filter(&category.get_untracked()),
            resource_type: selected_filter(&resource_type.get_untracked()),
            tags: Vec::new(),
            page,
            size: RESULTS_PER_PAGE,
        };
        last_query.set(params.query.clone());
        let mut generation = 0;
        search.update(|state| generation = state.begin());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_resources(session, &params).await {
                Ok(results) => {
                    let total_pages = results.page_count();
                    search.update(|state| {
                        state.apply(
                            generation,
                            results.results,
                            results.total,
                            results.page,
                            total_pages,
                        );
                    });
                }
                Err(err) => {
                    search.update(|state| {
                        state.fail(generation, err.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (params, generation);
    };

    // Show the full corpus before the first keystroke.
    let requested_initial = RwSignal::new(false);
    Effect::new(move || {
        if requested_initial.get() {
            return;
        }
        requested_initial.set(true);
        run_search(1);
    });

    // Bookmark ids load once a session is available, so cards can show
    // their saved state.
    Effect::new(move || {
        let signed_in = session.with(|state| {
            state.is_authenticated_at(crate::state::session::now_secs())
        });
        if !signed_in || bookmarks_loaded.get() {
            return;
        }
        bookmarks_loaded.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_bookmarks(session).await {
                Ok(response) => {
                    bookmarks.set(response.bookmarks.into_iter().map(|r| r.id).collect());
                }
                Err(err) => {
                    log::warn!("bookmark preload failed: {err}");
                }
            }
        });
    });

    let on_bookmark = Callback::new(move |resource_id: String| {
        let saved = bookmarks.with_untracked(|set| set.contains(&resource_id));
        notice.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if saved {
                crate::net::api::remove_bookmark(session, &resource_id).await
            } else {
                crate::net::api::add_bookmark(session, &resource_id).await
            };
            match result {
                Ok(_) => {
                    bookmarks.update(|set| {
                        if saved {
                            set.remove(&resource_id);
                        } else {
                            set.insert(resource_id.clone());
                        }
                    });
                }
                Err(err) => notice.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (saved, resource_id);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_search(1);
    };
    let on_clear = move |_| {
        category.set(String::new());
        resource_type.set(String::new());
        run_search(1);
    };
    let has_filters =
        move || !category.get().is_empty() || !resource_type.get().is_empty();

    let current_page = Signal::derive(move || search.with(|state| state.page));
    let total_pages = Signal::derive(move || search.with(|state| state.total_pages));
    let on_page = Callback::new(run_search);

    let results_view = move || {
        let signed_in = session.with(|state| {
            state.is_authenticated_at(crate::state::session::now_secs())
        });
        let saved = bookmarks.get();
        search.with(|state| {
            state
                .items
                .iter()
                .cloned()
                .map(|resource| {
                    let bookmarked = saved.contains(&resource.id);
                    if signed_in {
                        view! {
                            <ResourceCard
                                resource=resource
                                bookmarked=bookmarked
                                on_bookmark=on_bookmark
                            />
                        }
                        .into_any()
                    } else {
                        view! { <ResourceCard resource=resource /> }.into_any()
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let category_options = CATEGORIES
        .iter()
        .map(|slug| view! { <option value=*slug>{category_label(slug)}</option> })
        .collect::<Vec<_>>();
    let type_options = RESOURCE_TYPES
        .iter()
        .map(|label| view! { <option value=*label>{*label}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="search-page">
            <header class="search-page__intro">
                <h1>"LearnHub"</h1>
                <p>"Search curated learning resources"</p>
            </header>
            <form class="search-bar" on:submit=on_search>
                <input
                    class="search-bar__input"
                    type="search"
                    placeholder="Search by title, description, or content..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="search-bar__submit" type="submit">"Search"</button>
            </form>
            <div class="search-filters">
                <select
                    class="search-filters__select"
                    prop:value=move || category.get()
                    on:change=move |ev| {
                        category.set(event_target_value(&ev));
                        run_search(1);
                    }
                >
                    <option value="">"All Categories"</option>
                    {category_options}
                </select>
                <select
                    class="search-filters__select"
                    prop:value=move || resource_type.get()
                    on:change=move |ev| {
                        resource_type.set(event_target_value(&ev));
                        run_search(1);
                    }
                >
                    <option value="">"All Types"</option>
                    {type_options}
                </select>
                <Show when=has_filters>
                    <button class="search-filters__clear" on:click=on_clear>
                        "Clear filters"
                    </button>
                </Show>
            </div>
            <Show when=move || search.with(|state| state.error.is_some())>
                <p class="search-page__error">
                    {move || search.with(|state| state.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || !notice.get().is_empty()>
                <p class="search-page__error">{move || notice.get()}</p>
            </Show>
            <Show
                when=move || !search.with(|state| state.loading)
                fallback=|| view! { <p class="search-page__status">"Searching..."</p> }
            >
                <Show when=move || !search.with(PagedState::is_empty)>
                    <p class="search-page__summary">
                        {move || {
                            results_summary(search.with(|state| state.total), &last_query.get())
                        }}
                    </p>
                </Show>
                <div class="search-results">{results_view}</div>
                <Show when=move || {
                    search.with(|state| state.is_empty() && state.error.is_none())
                }>
                    <div class="search-page__empty">
                        <p>"No resources found"</p>
                        <p class="search-page__empty-hint">
                            "Try adjusting your search or filters"
                        </p>
                    </div>
                </Show>
                <Pager page=current_page total_pages=total_pages on_page=on_page />
            </Show>
        </div>
    }
}

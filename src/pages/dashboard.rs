//! Dashboard page listing the signed-in user's bookmarks.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches bookmarks once the
//! session has finished restoring and lets the user unbookmark in place.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::resource_card::ResourceCard;
use crate::net::types::Resource;
use crate::state::session::SessionState;

fn greeting_for(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Welcome!".to_owned()
    } else {
        format!("Welcome, {name}!")
    }
}

/// Remove a bookmark from the local list; true when something was removed.
fn drop_bookmark(items: &mut Vec<Resource>, resource_id: &str) -> bool {
    let before = items.len();
    items.retain(|resource| resource.id != resource_id);
    items.len() < before
}

/// Dashboard page. Redirects to `/login` when no live session exists.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let items = RwSignal::new(Vec::<Resource>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let signed_in = session.with(|state| {
            !state.loading && state.is_authenticated_at(crate::state::session::now_secs())
        });
        if !signed_in || requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_bookmarks(session).await {
                Ok(response) => {
                    items.set(response.bookmarks);
                    loading.set(false);
                }
                Err(err) => {
                    error.set(err.to_string());
                    loading.set(false);
                }
            }
        });
    });

    let on_remove = Callback::new(move |resource_id: String| {
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_bookmark(session, &resource_id).await {
                Ok(_) => {
                    items.update(|list| {
                        drop_bookmark(list, &resource_id);
                    });
                }
                Err(err) => error.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = resource_id;
    });

    let greeting = move || {
        session.with(|state| {
            greeting_for(state.user.as_ref().map_or("", |user| user.name.as_str()))
        })
    };

    let cards = move || {
        items
            .get()
            .into_iter()
            .map(|resource| {
                view! {
                    <ResourceCard resource=resource bookmarked=true on_bookmark=on_remove />
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__head">
                <h1>{greeting}</h1>
                <a class="dashboard-page__submit" href="/submit">"Submit New Resource"</a>
            </header>
            <h2>"Your Bookmarked Resources"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="dashboard-page__error">{move || error.get()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="dashboard-page__status">"Loading bookmarks..."</p> }
            >
                <Show when=move || items.with(Vec::is_empty)>
                    <p class="dashboard-page__empty">
                        "You haven't bookmarked any resources yet. "
                        <a href="/">"Search"</a>
                        " for resources to save them here."
                    </p>
                </Show>
                <div class="dashboard-page__grid">{cards}</div>
            </Show>
        </div>
    }
}

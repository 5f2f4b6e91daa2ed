//! Top navigation bar with session-aware links.
//!
//! DESIGN
//! ======
//! Link visibility derives from session state on every render, so login and
//! logout update the bar without an explicit refresh. Logout performs a hard
//! navigation to drop all in-memory page state along with the session.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;

/// Links visible for a given session, as `(label, href)` pairs.
///
/// Search is public; the admin link requires an authenticated admin.
#[must_use]
pub fn nav_links(authenticated: bool, admin: bool) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("Search", "/")];
    if authenticated {
        links.push(("Dashboard", "/dashboard"));
        links.push(("AI Assistant", "/chat"));
        links.push(("Submit Resource", "/submit"));
        if admin {
            links.push(("Admin", "/admin"));
        }
    }
    links
}

/// Application header: brand, section links, theme toggle, session controls.
#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = leptos_router::hooks::use_location().pathname;

    let links = move || {
        session.with(|state| {
            let now = session::now_secs();
            nav_links(state.is_authenticated_at(now), state.is_admin())
        })
    };
    let authenticated =
        move || session.with(|state| state.is_authenticated_at(session::now_secs()));
    let user_name = move || {
        session.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_default()
        })
    };
    let dark = move || ui.with(|state| state.dark_mode);

    let on_toggle_theme = move |_| {
        ui.update(|state| {
            state.dark_mode = crate::util::theme::toggle_dark(state.dark_mode);
        });
    };
    let on_logout = move |_| {
        session::logout(session);
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    };

    view! {
        <header class="nav">
            <a class="nav__brand" href="/">"LEARNHUB"</a>
            <nav class="nav__links">
                {move || {
                    links()
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    class="nav__link"
                                    class:nav__link--active=move || pathname.get() == href
                                    href=href
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <div class="nav__session">
                <button
                    class="nav__theme-toggle"
                    on:click=on_toggle_theme
                    title="Toggle dark mode"
                    aria-label="Toggle dark mode"
                >
                    {move || if dark() { "☀" } else { "☾" }}
                </button>
                <Show
                    when=authenticated
                    fallback=|| {
                        view! {
                            <a class="nav__link" href="/login">"Login"</a>
                            <a class="nav__link nav__link--accent" href="/register">"Register"</a>
                        }
                    }
                >
                    <a class="nav__user" href="/profile">{user_name}</a>
                    <button class="nav__logout" on:click=on_logout>"Logout"</button>
                </Show>
            </div>
        </header>
    }
}

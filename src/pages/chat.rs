//! Study assistant chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transcript lives in [`ChatState`] so navigating away and back keeps
//! the conversation. The server keeps its own context per user; clearing
//! resets the server first and the local transcript only on success.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::resource_card::ResourceCard;
use crate::net::types::Resource;
use crate::state::chat::{ChatAuthor, ChatState};
use crate::state::session::SessionState;

/// A sendable message, or `None` for blank input.
fn validate_message(input: &str) -> Option<String> {
    let message = input.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_owned())
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Raw HTML in assistant output is dropped before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Pairs each recommended resource with whether it is already bookmarked,
/// preserving reply order.
fn related_with_saved(resources: &[Resource], saved: &HashSet<String>) -> Vec<(Resource, bool)> {
    resources
        .iter()
        .map(|resource| (resource.clone(), saved.contains(&resource.id)))
        .collect()
}

/// Assistant page. Redirects to `/login` when no live session exists.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let bookmarks = RwSignal::new(HashSet::<String>::new());
    let bookmarks_loaded = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Bookmark ids load once the session is live, so recommendation cards
    // show their saved state.
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
        error.set(String::new());
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
                Err(err) => error.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (saved, resource_id);
    });

    // Keep the newest message in view.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.pending;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        if chat.with_untracked(|state| state.pending) {
            return;
        }
        let Some(message) = validate_message(&input.get_untracked()) else {
            return;
        };
        chat.update(|state| state.push_user_message(message.clone()));
        input.set(String::new());
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_chat_message(session, &message).await {
                Ok(reply) => {
                    chat.update(|state| {
                        state.push_assistant_message(reply.message, reply.resources);
                    });
                }
                Err(err) => {
                    chat.update(ChatState::settle);
                    error.set(err.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = message;
    };

    let on_send_click = move |_| do_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_clear = move |_| {
        if chat.with_untracked(|state| state.is_empty() && !state.pending) {
            return;
        }
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::clear_chat_history(session).await {
                Ok(_) => chat.update(ChatState::clear),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let can_send =
        move || !input.get().trim().is_empty() && !chat.with(|state| state.pending);

    view! {
        <div class="chat-page">
            <header class="chat-page__head">
                <h1>"AI Learning Assistant"</h1>
                <button class="chat-page__clear" on:click=on_clear>"Clear Chat"</button>
            </header>
            <div class="chat-page__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    let saved = bookmarks.get();
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-page__empty">
                                "Ask about any topic to get explanations and resource suggestions."
                            </div>
                        }
                        .into_any();
                    }

                    messages
                        .iter()
                        .map(|message| {
                            let is_assistant = message.author == ChatAuthor::Assistant;
                            let body = message.body.clone();
                            let resources = message.resources.clone();

                            view! {
                                <div
                                    class="chat-page__message"
                                    class:chat-page__message--assistant=is_assistant
                                >
                                    {if is_assistant {
                                        let rendered = render_markdown_html(&body);
                                        view! {
                                            <div
                                                class="chat-page__markdown-body"
                                                inner_html=rendered
                                            ></div>
                                        }
                                        .into_any()
                                    } else {
                                        view! { <span>{body}</span> }.into_any()
                                    }}
                                    {(!resources.is_empty()).then(|| {
                                        let cards = related_with_saved(&resources, &saved);
                                        view! {
                                            <div class="chat-page__resources">
                                                <span class="chat-page__resources-label">
                                                    "Relevant Resources:"
                                                </span>
                                                {cards
                                                    .into_iter()
                                                    .map(|(resource, bookmarked)| {
                                                        view! {
                                                            <ResourceCard
                                                                resource=resource
                                                                bookmarked=bookmarked
                                                                on_bookmark=on_bookmark
                                                            />
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                    })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                {move || {
                    chat.with(|state| state.pending)
                        .then(|| view! { <div class="chat-page__loading">"Thinking..."</div> })
                }}
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="chat-page__error">{move || error.get()}</p>
            </Show>
            <div class="chat-page__input-row">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Ask me anything..."
                    disabled=move || chat.with(|state| state.pending)
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="chat-page__send"
                    on:click=on_send_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

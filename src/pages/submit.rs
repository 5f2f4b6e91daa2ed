//! Resource submission page.
//!
//! Submissions enter the moderation queue as pending; approval is an admin
//! action on the admin page.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{CATEGORIES, ResourceDraft, category_label};
use crate::state::session::SessionState;

fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Add a tag to the list unless it is blank or already present.
fn push_tag(tags: &mut Vec<String>, raw: &str) -> bool {
    let tag = normalize_tag(raw);
    if tag.is_empty() || tags.contains(&tag) {
        return false;
    }
    tags.push(tag);
    true
}

/// Check the form and build the submission payload.
fn validate_draft(
    title: &str,
    url: &str,
    category: &str,
    description: &str,
    tags: &[String],
) -> Result<ResourceDraft, &'static str> {
    let title = title.trim();
    let url = url.trim();
    let description = description.trim();
    if title.is_empty() {
        return Err("Enter a title.");
    }
    if url.is_empty() {
        return Err("Enter the resource URL.");
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err("The URL must start with http:// or https://.");
    }
    if category.is_empty() {
        return Err("Choose a category.");
    }
    if description.is_empty() {
        return Err("Enter a description.");
    }
    Ok(ResourceDraft {
        title: title.to_owned(),
        url: url.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        tags: tags.to_vec(),
    })
}

/// Submission page. Redirects to `/login` when no live session exists.
#[component]
pub fn SubmitPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let title = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let tag_input = RwSignal::new(String::new());
    let tags = RwSignal::new(Vec::<String>::new());
    let status = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let clear_form = move || {
        title.set(String::new());
        url.set(String::new());
        category.set(String::new());
        description.set(String::new());
        tag_input.set(String::new());
        tags.set(Vec::new());
    };

    let on_tag_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        tags.update(|list| {
            push_tag(list, &tag_input.get_untracked());
        });
        tag_input.set(String::new());
    };
    let on_remove_tag = Callback::new(move |tag: String| {
        tags.update(|list| list.retain(|existing| *existing != tag));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_draft(
            &title.get(),
            &url.get(),
            &category.get(),
            &description.get(),
            &tags.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(message.to_owned());
                status.set(String::new());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        status.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_resource(session, &draft).await {
                Ok(_) => {
                    status.set(
                        "Your resource has been submitted and is pending review.".to_owned(),
                    );
                    clear_form();
                }
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = draft;
    };

    let on_clear = move |_| {
        clear_form();
        status.set(String::new());
        error.set(String::new());
    };

    let category_options = CATEGORIES
        .iter()
        .map(|slug| view! { <option value=*slug>{category_label(slug)}</option> })
        .collect::<Vec<_>>();

    let tag_chips = move || {
        tags.get()
            .into_iter()
            .map(|tag| {
                let label = tag.clone();
                view! {
                    <span class="submit-form__tag">
                        {label}
                        <button
                            class="submit-form__tag-remove"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                on_remove_tag.run(tag.clone());
                            }
                            aria-label="Remove tag"
                        >
                            "✕"
                        </button>
                    </span>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="submit-page">
            <h1>"Submit a Resource"</h1>
            <Show when=move || !status.get().is_empty()>
                <p class="submit-page__success">{move || status.get()}</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="submit-page__error">{move || error.get()}</p>
            </Show>
            <form class="submit-form" on:submit=on_submit>
                <input
                    class="submit-form__input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="submit-form__input"
                    type="url"
                    placeholder="https://..."
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
                <select
                    class="submit-form__select"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"Choose a category"</option>
                    {category_options}
                </select>
                <textarea
                    class="submit-form__textarea"
                    placeholder="What makes this resource worth sharing?"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="submit-form__input"
                    type="text"
                    placeholder="Add a tag and press Enter"
                    prop:value=move || tag_input.get()
                    on:input=move |ev| tag_input.set(event_target_value(&ev))
                    on:keydown=on_tag_keydown
                />
                <div class="submit-form__tags">{tag_chips}</div>
                <div class="submit-form__actions">
                    <button class="submit-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Submit Resource" }}
                    </button>
                    <button
                        class="submit-form__clear"
                        type="button"
                        on:click=on_clear
                        disabled=move || busy.get()
                    >
                        "Clear Form"
                    </button>
                </div>
            </form>
        </div>
    }
}

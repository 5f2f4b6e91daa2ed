//! Reusable card component for resource list items.
//!
//! DESIGN
//! ======
//! Keeps resource presentation consistent between search results, dashboard
//! bookmarks, and the moderation queue while centralizing the type color
//! coding and metadata line.

#[cfg(test)]
#[path = "resource_card_test.rs"]
mod resource_card_test;

use leptos::prelude::*;

use crate::net::types::{Resource, ResourceStatus, category_label};

/// Chip color for a display type label. Unknown types share a neutral grey.
#[must_use]
pub fn resource_type_color(resource_type: &str) -> &'static str {
    match resource_type {
        "Tutorial" => "#4CAF50",
        "Research Paper" => "#2196F3",
        "GitHub Repository" => "#9C27B0",
        "Course" => "#FF9800",
        "Blog Post" => "#F44336",
        "Documentation" => "#607D8B",
        "Video" => "#E91E63",
        "Book" => "#795548",
        "Tool" => "#00BCD4",
        _ => "#757575",
    }
}

/// Attribution line under the description: author, publication date, and
/// star count, joined with a dot separator. `None` when nothing is known.
#[must_use]
pub fn meta_line(resource: &Resource) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(author) = resource.author.as_ref().filter(|a| !a.is_empty()) {
        parts.push(format!("By {author}"));
    }
    if let Some(date) = resource.publication_date.as_ref().filter(|d| !d.is_empty()) {
        parts.push(date.clone());
    }
    if let Some(stars) = resource.github_stars {
        parts.push(format!("★ {stars}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

fn status_label(status: ResourceStatus) -> &'static str {
    match status {
        ResourceStatus::Pending => "Pending review",
        ResourceStatus::Approved => "Approved",
        ResourceStatus::Rejected => "Rejected",
    }
}

/// A card presenting one resource with its type chip, tags, and metadata.
///
/// The bookmark button renders only when `on_bookmark` is provided; the
/// status badge only when `show_status` is set (moderation views).
#[component]
pub fn ResourceCard(
    resource: Resource,
    #[prop(optional)] bookmarked: bool,
    #[prop(optional)] on_bookmark: Option<Callback<String>>,
    #[prop(optional)] show_status: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let title = resource.title.clone();
    let url = resource.url.clone();
    let description = resource.description.clone();
    let category = category_label(&resource.category);
    let tags = resource.tags.clone();
    let meta = meta_line(&resource);
    let difficulty = resource.difficulty_level.clone();
    let status = resource.status;

    let type_chip = resource.resource_type.clone().filter(|kind| !kind.is_empty()).map(|kind| {
        let color = resource_type_color(&kind);
        view! {
            <span class="resource-card__type" style:background-color=color>{kind}</span>
        }
    });

    let status_badge = show_status.then_some(status).flatten().map(|status| {
        view! {
            <span
                class="resource-card__status"
                class:resource-card__status--rejected=status == ResourceStatus::Rejected
            >
                {status_label(status)}
            </span>
        }
    });

    let can_bookmark = on_bookmark.is_some();
    let on_bookmark_click = Callback::new({
        let id = resource.id.clone();
        move |()| {
            if let Some(on_bookmark) = on_bookmark.as_ref() {
                on_bookmark.run(id.clone());
            }
        }
    });

    view! {
        <article class="resource-card">
            <div class="resource-card__head">
                <h3 class="resource-card__title">
                    <a href=url target="_blank" rel="noopener noreferrer">{title}</a>
                </h3>
                <Show when=move || can_bookmark>
                    <button
                        class="resource-card__bookmark"
                        class:resource-card__bookmark--active=bookmarked
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            on_bookmark_click.run(());
                        }
                        title=if bookmarked { "Remove bookmark" } else { "Bookmark" }
                        aria-label=if bookmarked { "Remove bookmark" } else { "Bookmark" }
                    >
                        {if bookmarked { "★" } else { "☆" }}
                    </button>
                </Show>
            </div>
            <div class="resource-card__chips">
                {type_chip}
                <span class="resource-card__category">{category}</span>
                {difficulty.map(|level| view! {
                    <span class="resource-card__difficulty">{level}</span>
                })}
                {status_badge}
            </div>
            <p class="resource-card__description">{description}</p>
            <div class="resource-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="resource-card__tag">{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
            {meta.map(|line| view! { <p class="resource-card__meta">{line}</p> })}
            {children.map(|children| view! {
                <div class="resource-card__actions">{children()}</div>
            })}
        </article>
    }
}

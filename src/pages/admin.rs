//! Admin page: moderation queue and user management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both tabs page through server-side lists with [`PagedState`]. Moderation
//! resolves through a dialog so rejections always carry notes; resolved rows
//! are removed locally and the page refetches only when it empties.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::pager::Pager;
use crate::components::resource_card::ResourceCard;
use crate::net::types::{Resource, Role};
use crate::state::paging::PagedState;
use crate::state::session::SessionState;

const ADMIN_PAGE_SIZE: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AdminTab {
    #[default]
    Submissions,
    Users,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReviewAction {
    Approve,
    Reject,
}

/// A pending moderation decision, staged while the dialog is open.
#[derive(Clone, Debug, PartialEq)]
struct ReviewRequest {
    resource_id: String,
    title: String,
    action: ReviewAction,
}

/// Rejections must carry notes for the submitter; approvals may omit them.
fn review_notes_ok(action: ReviewAction, notes: &str) -> bool {
    match action {
        ReviewAction::Approve => true,
        ReviewAction::Reject => !notes.trim().is_empty(),
    }
}

/// Page to show after removing rows: step back when the current page
/// emptied, never past page one.
fn page_after_removal(current: u32, rows_left: usize) -> u32 {
    if rows_left == 0 && current > 1 {
        current - 1
    } else {
        current
    }
}

/// Admin page. Redirects non-admins away.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    crate::util::auth::install_admin_redirect(session, navigate.clone());

    let tab = RwSignal::new(AdminTab::default());
    let pending = RwSignal::new(PagedState::<Resource>::default());
    let users = RwSignal::new(PagedState::<crate::net::types::AdminUser>::default());
    let review = RwSignal::new(None::<ReviewRequest>);
    let delete_user = RwSignal::new(None::<String>);
    let notice = RwSignal::new(String::new());

    let run_pending = move |page: u32| {
        let mut generation = 0;
        pending.update(|state| generation = state.begin());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_pending_resources(session, page, ADMIN_PAGE_SIZE).await {
                Ok(results) => {
                    let total_pages = results.page_count();
                    pending.update(|state| {
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
                    pending.update(|state| {
                        state.fail(generation, err.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (page, generation);
    };

    let run_users = move |page: u32| {
        let mut generation = 0;
        users.update(|state| generation = state.begin());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_admin_users(session, page, ADMIN_PAGE_SIZE).await {
                Ok(listing) => {
                    let total_pages = listing.page_count();
                    users.update(|state| {
                        state.apply(
                            generation,
                            listing.users,
                            listing.total,
                            listing.page,
                            total_pages,
                        );
                    });
                }
                Err(err) => {
                    users.update(|state| {
                        state.fail(generation, err.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (page, generation);
    };

    // The queue loads as soon as the admin session is confirmed; the user
    // table waits until its tab is first opened.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let ready = session.with(|state| {
            !state.loading
                && state.is_admin()
                && state.is_authenticated_at(crate::state::session::now_secs())
        });
        if !ready || requested.get() {
            return;
        }
        requested.set(true);
        run_pending(1);
    });
    let users_requested = RwSignal::new(false);
    Effect::new(move || {
        if tab.get() != AdminTab::Users || users_requested.get() {
            return;
        }
        users_requested.set(true);
        run_users(1);
    });

    let on_review_cancel = Callback::new(move |()| review.set(None));
    let on_resolved = Callback::new(move |resource_id: String| {
        review.set(None);
        pending.update(|state| {
            state.remove_where(|resource| resource.id == resource_id);
        });
        let (page_now, rows_left) =
            pending.with_untracked(|state| (state.page, state.items.len()));
        if rows_left == 0 {
            run_pending(page_after_removal(page_now, rows_left));
        }
    });

    let on_delete_cancel = Callback::new(move |()| delete_user.set(None));
    let on_deleted = Callback::new(move |user_id: String| {
        delete_user.set(None);
        users.update(|state| {
            state.remove_where(|user| user.id == user_id);
        });
        let (page_now, rows_left) =
            users.with_untracked(|state| (state.page, state.items.len()));
        if rows_left == 0 {
            run_users(page_after_removal(page_now, rows_left));
        }
    });

    let pending_page = Signal::derive(move || pending.with(|state| state.page));
    let pending_pages = Signal::derive(move || pending.with(|state| state.total_pages));
    let on_pending_page = Callback::new(run_pending);
    let users_page = Signal::derive(move || users.with(|state| state.page));
    let users_pages = Signal::derive(move || users.with(|state| state.total_pages));
    let on_users_page = Callback::new(run_users);

    let submissions_view = move || {
        pending
            .with(|state| state.items.clone())
            .into_iter()
            .map(|resource| {
                let approve = ReviewRequest {
                    resource_id: resource.id.clone(),
                    title: resource.title.clone(),
                    action: ReviewAction::Approve,
                };
                let reject = ReviewRequest {
                    resource_id: resource.id.clone(),
                    title: resource.title.clone(),
                    action: ReviewAction::Reject,
                };
                view! {
                    <ResourceCard resource=resource show_status=true>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| review.set(Some(approve.clone()))
                        >
                            "Approve"
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| review.set(Some(reject.clone()))
                        >
                            "Reject"
                        </button>
                    </ResourceCard>
                }
            })
            .collect::<Vec<_>>()
    };

    let users_view = move || {
        let self_id = session
            .with(|state| state.user.as_ref().map(|user| user.id.clone()))
            .unwrap_or_default();
        users
            .with(|state| state.items.clone())
            .into_iter()
            .map(|user| {
                let is_self = user.id == self_id;
                let role_user_id = user.id.clone();
                let delete_user_id = user.id.clone();
                let on_role_change = move |ev: leptos::ev::Event| {
                    let role = if event_target_value(&ev) == "admin" {
                        Role::Admin
                    } else {
                        Role::User
                    };
                    let user_id = role_user_id.clone();
                    notice.set(String::new());
                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        match crate::net::api::update_admin_user(session, &user_id, role).await {
                            Ok(_) => {
                                users.update(|state| {
                                    for row in &mut state.items {
                                        if row.id == user_id {
                                            row.role = role;
                                        }
                                    }
                                });
                            }
                            Err(err) => notice.set(err.to_string()),
                        }
                    });
                    #[cfg(not(feature = "hydrate"))]
                    let _ = (role, user_id);
                };

                view! {
                    <tr class="admin-users__row">
                        <td>{user.name.clone()}</td>
                        <td>{user.email.clone()}</td>
                        <td>
                            <select
                                class="admin-users__role"
                                disabled=is_self
                                prop:value=user.role.as_str()
                                on:change=on_role_change
                            >
                                <option value="user">"User"</option>
                                <option value="admin">"Admin"</option>
                            </select>
                        </td>
                        <td>
                            <button
                                class="btn btn--danger"
                                disabled=is_self
                                on:click=move |_| delete_user.set(Some(delete_user_id.clone()))
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="admin-page">
            <h1>"Admin Dashboard"</h1>
            <div class="admin-page__tabs">
                <button
                    class="admin-page__tab"
                    class:admin-page__tab--active=move || tab.get() == AdminTab::Submissions
                    on:click=move |_| tab.set(AdminTab::Submissions)
                >
                    "Submissions"
                </button>
                <button
                    class="admin-page__tab"
                    class:admin-page__tab--active=move || tab.get() == AdminTab::Users
                    on:click=move |_| tab.set(AdminTab::Users)
                >
                    "Users"
                </button>
            </div>
            <Show when=move || !notice.get().is_empty()>
                <p class="admin-page__error">{move || notice.get()}</p>
            </Show>
            <Show when=move || tab.get() == AdminTab::Submissions>
                <section class="admin-queue">
                    <Show when=move || pending.with(|state| state.error.is_some())>
                        <p class="admin-page__error">
                            {move || pending.with(|state| state.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <Show
                        when=move || !pending.with(|state| state.loading)
                        fallback=|| view! { <p class="admin-page__status">"Loading queue..."</p> }
                    >
                        <Show when=move || {
                            pending.with(|state| state.is_empty() && state.error.is_none())
                        }>
                            <p class="admin-page__empty">"No submissions waiting for review."</p>
                        </Show>
                        <div class="admin-queue__list">{submissions_view}</div>
                        <Pager
                            page=pending_page
                            total_pages=pending_pages
                            on_page=on_pending_page
                        />
                    </Show>
                </section>
            </Show>
            <Show when=move || tab.get() == AdminTab::Users>
                <section class="admin-users">
                    <Show when=move || users.with(|state| state.error.is_some())>
                        <p class="admin-page__error">
                            {move || users.with(|state| state.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <Show
                        when=move || !users.with(|state| state.loading)
                        fallback=|| view! { <p class="admin-page__status">"Loading users..."</p> }
                    >
                        <table class="admin-users__table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{users_view}</tbody>
                        </table>
                        <Pager page=users_page total_pages=users_pages on_page=on_users_page />
                    </Show>
                </section>
            </Show>
            <Show when=move || review.get().is_some()>
                <ReviewDialog
                    review=review
                    session=session
                    on_cancel=on_review_cancel
                    on_resolved=on_resolved
                />
            </Show>
            <Show when=move || delete_user.get().is_some()>
                <DeleteUserDialog
                    user_id=delete_user
                    session=session
                    on_cancel=on_delete_cancel
                    on_deleted=on_deleted
                />
            </Show>
        </div>
    }
}

/// Modal dialog collecting moderation notes before approve/reject.
#[component]
fn ReviewDialog(
    review: RwSignal<Option<ReviewRequest>>,
    session: RwSignal<SessionState>,
    on_cancel: Callback<()>,
    on_resolved: Callback<String>,
) -> impl IntoView {
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let Some(request) = review.get_untracked() else {
            return;
        };
        let notes_value = notes.get_untracked();
        if !review_notes_ok(request.action, &notes_value) {
            error.set("Notes are required to reject a submission.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match request.action {
                ReviewAction::Approve => {
                    crate::net::api::approve_resource(
                        session,
                        &request.resource_id,
                        notes_value.trim(),
                    )
                    .await
                }
                ReviewAction::Reject => {
                    crate::net::api::reject_resource(
                        session,
                        &request.resource_id,
                        notes_value.trim(),
                    )
                    .await
                }
            };
            match result {
                Ok(_) => on_resolved.run(request.resource_id),
                Err(err) => {
                    error.set(err.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, notes_value, session, on_resolved);
    });

    let heading = move || {
        match review.get().map(|request| request.action) {
            Some(ReviewAction::Reject) => "Reject Submission",
            _ => "Approve Submission",
        }
    };
    let confirm_label = move || {
        match review.get().map(|request| request.action) {
            Some(ReviewAction::Reject) => "Reject",
            _ => "Approve",
        }
    };
    let is_reject = move || {
        matches!(
            review.get().map(|request| request.action),
            Some(ReviewAction::Reject)
        )
    };
    let title = move || review.get().map(|request| request.title).unwrap_or_default();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <p class="dialog__subject">{title}</p>
                <label class="dialog__label">
                    {move || {
                        if is_reject() { "Notes for the submitter" } else { "Notes (optional)" }
                    }}
                    <textarea
                        class="dialog__input"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__danger">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button
                        class="btn"
                        class:btn--primary=move || !is_reject()
                        class:btn--danger=is_reject
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for deleting an account.
#[component]
fn DeleteUserDialog(
    user_id: RwSignal<Option<String>>,
    session: RwSignal<SessionState>,
    on_cancel: Callback<()>,
    on_deleted: Callback<String>,
) -> impl IntoView {
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_admin_user(session, &id).await {
                Ok(_) => on_deleted.run(id),
                Err(err) => {
                    error.set(err.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session, on_deleted);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Account"</h2>
                <p class="dialog__danger">
                    "This permanently removes the account and its bookmarks."
                </p>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__danger">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

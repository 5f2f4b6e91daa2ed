//! Profile page for updating account details.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::ProfileUpdate;
use crate::state::session::SessionState;

/// Build the update payload from the form. Blank fields are left out so the
/// server keeps their current values; the password pair is validated only
/// when a new password was typed.
fn validate_profile_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<ProfileUpdate, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let mut update = ProfileUpdate::default();
    if !name.is_empty() {
        update.name = Some(name.to_owned());
    }
    if !email.is_empty() {
        update.email = Some(email.to_owned());
    }
    if !password.is_empty() {
        if password.len() < 6 {
            return Err("Password must be at least 6 characters.");
        }
        if password != confirm {
            return Err("Passwords do not match.");
        }
        update.password = Some(password.to_owned());
    }
    if update == ProfileUpdate::default() {
        return Err("Nothing to update.");
    }
    Ok(update)
}

/// Profile page. Redirects to `/login` when no live session exists.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill from the session once it is available. Email can be blank when
    // the user was rebuilt from token claims after a reload.
    let prefilled = RwSignal::new(false);
    Effect::new(move || {
        if prefilled.get() {
            return;
        }
        let Some(user) = session.with(|state| state.user.clone()) else {
            return;
        };
        prefilled.set(true);
        name.set(user.name);
        email.set(user.email.unwrap_or_default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = match validate_profile_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(update) => update,
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
            match crate::net::api::update_profile(session, &update).await {
                Ok(response) => {
                    crate::state::session::refresh_user(session, response.user);
                    status.set(response.message);
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = update;
    };

    view! {
        <div class="profile-page">
            <div class="auth-card">
                <h1>"Your profile"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">"Name"</label>
                    <input
                        class="auth-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Email"</label>
                    <input
                        class="auth-input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"New password (optional)"</label>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Leave blank to keep current"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
                <Show when=move || !status.get().is_empty()>
                    <p class="auth-message auth-message--success">{move || status.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}

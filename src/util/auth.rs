//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated routes must apply identical redirect behavior, and the
//! decision must come from the derived token check, not the cached user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{self, SessionState};

/// Whether a guarded route should bounce to `/login`: startup restoration has
/// finished and no live session exists.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState, now_secs: i64) -> bool {
    !state.loading && !state.is_authenticated_at(now_secs)
}

/// Where an admin-only route should bounce, if anywhere. Anonymous visitors
/// go to `/login`; signed-in non-admins go to the search page.
#[must_use]
pub fn admin_redirect_target(state: &SessionState, now_secs: i64) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if !state.is_authenticated_at(now_secs) {
        return Some("/login");
    }
    if state.is_admin() { None } else { Some("/") }
}

/// Redirect to `/login` whenever the session loads without a live token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_unauth(&state, session::now_secs()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect non-admin visitors away from an admin-only route.
pub fn install_admin_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if let Some(target) = admin_redirect_target(&state, session::now_secs()) {
            navigate(target, NavigateOptions::default());
        }
    });
}

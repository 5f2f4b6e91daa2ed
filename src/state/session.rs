//! Session lifecycle: token decode, expiry checks, and auth state transitions.
//!
//! DESIGN
//! ======
//! The token is the single source of truth. `user` is a cached convenience
//! derived from it (or from a login response); authorization decisions always
//! re-derive from `(token, now)` so a token that expires while the app is open
//! self-heals into a logout the next time it is consulted.
//!
//! The pure functions in this module take `now_secs` and the stored token as
//! arguments so they can be tested natively; the signal wrappers below them
//! are the only code that touches the clock and `localStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use leptos::prelude::*;

use crate::net::types::{Claims, User};
use crate::util::storage;

/// Outcome of inspecting a stored token at a point in time.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenStatus {
    /// No token is present.
    Missing,
    /// Token decodes and has not expired.
    Live(Claims),
    /// Token is present but undecodable or expired; it must be discarded.
    Dead,
}

/// Auth state shared through context with every page.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Raw JWT, if one is held.
    pub token: Option<String>,
    /// Cached identity for rendering; cleared together with the token.
    pub user: Option<User>,
    /// True until startup restoration has run. Route guards hold their
    /// redirect decisions while this is set.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Derived authentication check: true iff a token is present, decodes,
    /// and is unexpired at `now_secs`. Never trusts the cached `user`.
    #[must_use]
    pub fn is_authenticated_at(&self, now_secs: i64) -> bool {
        matches!(evaluate_token(self.token.as_deref(), now_secs), TokenStatus::Live(_))
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role.is_admin())
    }

    /// Accept a freshly issued token and its user unconditionally.
    pub fn apply_login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the session. Safe to call repeatedly.
    pub fn apply_logout(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// The server is the authority on token validity; the client only needs the
/// claims for display and expiry scheduling. Returns `None` for anything that
/// is not a three-segment token with a base64url JSON payload matching
/// [`Claims`].
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return None,
    };
    // Standard JWTs are unpadded; tolerate padded encoders.
    let payload = payload.trim_end_matches('=');
    let raw = URL_SAFE_NO_PAD.decode(payload.as_bytes()).ok()?;
    serde_json::from_slice::<Claims>(&raw).ok()
}

/// Classify an optional stored token at `now_secs`.
#[must_use]
pub fn evaluate_token(token: Option<&str>, now_secs: i64) -> TokenStatus {
    let Some(token) = token else {
        return TokenStatus::Missing;
    };
    match decode_claims(token) {
        Some(claims) if !claims.is_expired_at(now_secs) => TokenStatus::Live(claims),
        _ => TokenStatus::Dead,
    }
}

/// Build the startup session state from a persisted token.
///
/// Returns the restored state plus whether the persisted copy must be
/// cleared (a dead token is removed so the next launch starts clean).
#[must_use]
pub fn startup_state(stored: Option<String>, now_secs: i64) -> (SessionState, bool) {
    match evaluate_token(stored.as_deref(), now_secs) {
        TokenStatus::Live(claims) => {
            let user = claims.to_user();
            (
                SessionState {
                    token: stored,
                    user: Some(user),
                    loading: false,
                },
                false,
            )
        }
        TokenStatus::Dead => (
            SessionState {
                token: None,
                user: None,
                loading: false,
            },
            true,
        ),
        TokenStatus::Missing => (
            SessionState {
                token: None,
                user: None,
                loading: false,
            },
            false,
        ),
    }
}

/// Compute request headers for the current token.
///
/// Always includes `Content-Type: application/json`. A live token adds
/// `Authorization: Bearer <token>`; a dead one adds nothing and sets the
/// second tuple element, telling the caller to log the session out before
/// sending anonymous headers.
#[must_use]
pub fn headers_for_token(token: Option<&str>, now_secs: i64) -> (Vec<(String, String)>, bool) {
    let mut headers = vec![(String::from("Content-Type"), String::from("application/json"))];
    let Some(raw) = token else {
        return (headers, false);
    };
    match evaluate_token(Some(raw), now_secs) {
        TokenStatus::Live(_) => {
            headers.push((String::from("Authorization"), format!("Bearer {raw}")));
            (headers, false)
        }
        _ => (headers, true),
    }
}

/// Current Unix time in whole seconds.
#[must_use]
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            (js_sys::Date::now() / 1000.0) as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|elapsed| i64::try_from(elapsed.as_secs()).ok())
            .unwrap_or(0)
    }
}

/// Restore the session from `localStorage` at startup and clear `loading`.
pub fn initialize(session: RwSignal<SessionState>) {
    let (state, clear_persisted) = startup_state(storage::read_token(), now_secs());
    if clear_persisted {
        storage::clear_token();
    }
    session.set(state);
}

/// Store a freshly issued token and user, persisting the token.
pub fn login(session: RwSignal<SessionState>, token: String, user: User) {
    storage::write_token(&token);
    session.update(move |state| state.apply_login(token, user));
}

/// Clear the session and its persisted token.
pub fn logout(session: RwSignal<SessionState>) {
    storage::clear_token();
    session.update(SessionState::apply_logout);
}

/// Replace the cached user after a profile update. Ignored when logged out,
/// so a racing logout is not resurrected.
pub fn refresh_user(session: RwSignal<SessionState>, user: User) {
    session.update(move |state| {
        if state.user.is_some() {
            state.user = Some(user);
        }
    });
}

/// Headers for an outgoing request, self-healing an expired session.
///
/// If the stored token turns out to be dead, the session is logged out
/// (state plus persisted copy) and anonymous headers are returned.
#[must_use]
pub fn auth_headers(session: RwSignal<SessionState>) -> Vec<(String, String)> {
    let token = session.with_untracked(|state| state.token.clone());
    let (headers, expired) = headers_for_token(token.as_deref(), now_secs());
    if expired {
        logout(session);
    }
    headers
}

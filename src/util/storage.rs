//! Browser `localStorage` persistence for the session token.
//!
//! Exactly one token string is kept, under a fixed key. Reads and writes are
//! best-effort: storage can be disabled or full, and the session layer treats
//! a failed read the same as an absent token.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op so server rendering stays deterministic; the client
//! re-reads the token during hydration startup.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "learnhub_token";

/// Read the persisted session token, if any.
///
/// Empty strings are treated as absent.
#[must_use]
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted session token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

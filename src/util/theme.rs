//! Dark theme preference: load, apply, toggle.
//!
//! Stores `"dark"` or `"light"` in `localStorage` and mirrors the choice onto
//! a `data-theme` attribute on `<html>`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely no-op
//! to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const THEME_KEY: &str = "learnhub_theme";

/// Read the stored theme preference.
///
/// Returns `true` (dark) if the user chose dark previously, or if the system
/// prefers dark and nothing is stored.
#[must_use]
pub fn load_dark_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(THEME_KEY) {
                return value == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set the `data-theme` attribute on the document element.
pub fn apply_dark(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.document_element() {
                let _ = element.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new choice.
pub fn toggle_dark(current: bool) -> bool {
    let next = !current;
    apply_dark(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_KEY, if next { "dark" } else { "light" });
            }
        }
    }
    next
}

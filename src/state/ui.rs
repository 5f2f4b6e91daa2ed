//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`session`, `chat`) so the
//! header controls can evolve independently of auth and API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Cross-page presentation state provided via context.
///
/// Dark mode is mirrored to storage and to the document root by
/// [`crate::util::theme`]; this struct only tracks the current value for
/// rendering the header toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

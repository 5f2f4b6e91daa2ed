//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, guards, form state)
//! and delegates rendering details to `components`.

pub mod admin;
pub mod chat;
pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;
pub mod search;
pub mod submit;

//! Shared application state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the auth token lifecycle, `paging` holds server-paged
//! lists, `chat` buffers the assistant transcript, and `ui` keeps
//! presentation chrome.

pub mod chat;
pub mod paging;
pub mod session;
pub mod ui;

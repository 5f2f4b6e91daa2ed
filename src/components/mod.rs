//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and resource surfaces while reading shared
//! state from Leptos context providers.

pub mod navigation;
pub mod pager;
pub mod resource_card;

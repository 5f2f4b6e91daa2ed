//! Networking modules for the LearnHub REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls through a single authorized dispatch path, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;

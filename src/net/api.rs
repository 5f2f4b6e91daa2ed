//! Authorized REST gateway for the LearnHub API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning a transport error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint funnels through `dispatch`, which attaches session headers,
//! maps any 401 to a forced logout plus [`ApiError::AuthRequired`], folds
//! non-2xx bodies into [`ApiError::Server`] using the server's `error` field
//! when present, and reports requests that never reached the server as
//! [`ApiError::Transport`]. Pages render `err.to_string()` directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::RwSignal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    BookmarksResponse, ChatReply, LoginResponse, MessageResponse, ModerationResponse,
    ProfileResponse, ProfileUpdate, RegisterResponse, Resource, ResourceDraft, Role, SearchPage,
    UserPage,
};
#[cfg(feature = "hydrate")]
use crate::state::session;
use crate::state::session::SessionState;

/// Failure taxonomy for API calls.
///
/// Display strings are what pages show to users, so they stay stable and
/// human-readable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The session was missing, expired, or rejected by the server. The
    /// gateway has already logged the session out by the time this surfaces.
    #[error("Your session has expired. Please login again.")]
    AuthRequired,
    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced an HTTP response.
    #[error("Failed to connect to the server. Please try again later.")]
    Transport(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Compile-time override for the API origin; empty means same-origin paths.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("LEARNHUB_API_BASE").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_query(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_url(path: &str, query: &[(&'static str, String)]) -> String {
    let mut url = format!("{}{path}", api_base());
    if !query.is_empty() {
        url.push('?');
        url.push_str(&encode_query(query));
    }
    url
}

fn resource_endpoint(resource_id: &str) -> String {
    format!("/api/resources/{resource_id}")
}

fn approve_endpoint(resource_id: &str) -> String {
    format!("/api/resources/{resource_id}/approve")
}

fn reject_endpoint(resource_id: &str) -> String {
    format!("/api/resources/{resource_id}/reject")
}

fn bookmark_endpoint(resource_id: &str) -> String {
    format!("/api/bookmarks/{resource_id}")
}

fn admin_user_endpoint(user_id: &str) -> String {
    format!("/api/admin/users/{user_id}")
}

/// Extract a display message from an error body, preferring the server's
/// `{"error": ...}` field.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// JSON-encode a request body. An encoding failure is a local fault, not a
/// connectivity one: it reports as [`ApiError::Server`] with status 0 and no
/// request is issued.
fn encode_body<T: Serialize>(body: &T) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|err| ApiError::Server {
        status: 0,
        message: format!("Unexpected request payload: {err}"),
    })
}

/// Single request primitive all endpoints go through.
///
/// Headers come from [`session::auth_headers`], so an expired token is
/// healed (logout + anonymous headers) before the request leaves.
async fn dispatch<T>(
    session: RwSignal<SessionState>,
    method: Method,
    path: &str,
    query: &[(&'static str, String)],
    body: Option<serde_json::Value>,
) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let url = request_url(path, query);
        let mut builder = match method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
            Method::Put => gloo_net::http::Request::put(&url),
            Method::Delete => gloo_net::http::Request::delete(&url),
        };
        for (name, value) in session::auth_headers(session) {
            builder = builder.header(&name, &value);
        }
        let request = match body {
            Some(payload) => builder.body(payload.to_string()),
            None => builder.build(),
        };
        let response = match request {
            Ok(request) => request.send().await,
            Err(err) => Err(err),
        }
        .map_err(|err| {
            log::warn!("{method:?} {path}: {err}");
            ApiError::Transport(err.to_string())
        })?;

        let status = response.status();
        if status == 401 {
            log::info!("{method:?} {path}: session rejected by server, logging out");
            session::logout(session);
            return Err(ApiError::AuthRequired);
        }
        let text = response.text().await.unwrap_or_default();
        if !response.ok() {
            return Err(ApiError::Server {
                status,
                message: failure_message(status, &text),
            });
        }
        serde_json::from_str::<T>(&text).map_err(|err| ApiError::Server {
            status,
            message: format!("Unexpected response from server: {err}"),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, method, path, query, body);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Request parameters for `GET /api/search`.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchParams {
    /// Free-text query; empty returns the full corpus.
    pub query: String,
    /// Category slug filter.
    pub category: Option<String>,
    /// Display type filter (sent as `type`).
    pub resource_type: Option<String>,
    /// Tag filters, joined with commas.
    pub tags: Vec<String>,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub size: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: None,
            resource_type: None,
            tags: Vec::new(),
            page: 1,
            size: 10,
        }
    }
}

impl SearchParams {
    /// Query-string pairs for this request. Empty filters are omitted and
    /// the page number is clamped to 1.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("query", self.query.clone())];
        if let Some(category) = self.category.as_ref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.clone()));
        }
        if let Some(kind) = self.resource_type.as_ref().filter(|t| !t.is_empty()) {
            pairs.push(("type", kind.clone()));
        }
        if !self.tags.is_empty() {
            pairs.push(("tags", self.tags.join(",")));
        }
        pairs.push(("page", self.page.max(1).to_string()));
        pairs.push(("size", self.size.to_string()));
        pairs
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] when credentials are rejected or the server is
/// unreachable.
pub async fn login_user(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> ApiResult<LoginResponse> {
    let payload = serde_json::json!({ "email": email, "password": password });
    dispatch(session, Method::Post, "/api/auth/login", &[], Some(payload)).await
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] when registration fails (e.g. duplicate email).
pub async fn register_user(
    session: RwSignal<SessionState>,
    name: &str,
    email: &str,
    password: &str,
) -> ApiResult<RegisterResponse> {
    let payload = serde_json::json!({ "name": name, "email": email, "password": password });
    dispatch(session, Method::Post, "/api/auth/register", &[], Some(payload)).await
}

/// Update the signed-in user's profile via `PUT /api/auth/profile`.
///
/// # Errors
///
/// Returns an [`ApiError`] on validation or auth failure.
pub async fn update_profile(
    session: RwSignal<SessionState>,
    update: &ProfileUpdate,
) -> ApiResult<ProfileResponse> {
    let payload = encode_body(update)?;
    dispatch(session, Method::Put, "/api/auth/profile", &[], Some(payload)).await
}

/// Search the resource index via `GET /api/search`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the search backend fails or is unreachable.
pub async fn search_resources(
    session: RwSignal<SessionState>,
    params: &SearchParams,
) -> ApiResult<SearchPage> {
    dispatch(session, Method::Get, "/api/search", &params.to_query(), None).await
}

/// Fetch a single resource via `GET /api/resources/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the resource is missing or the call fails.
pub async fn fetch_resource(session: RwSignal<SessionState>, resource_id: &str) -> ApiResult<Resource> {
    dispatch(session, Method::Get, &resource_endpoint(resource_id), &[], None).await
}

/// Submit a new resource for review via `POST /api/resources`.
///
/// # Errors
///
/// Returns an [`ApiError`] on validation or auth failure.
pub async fn submit_resource(
    session: RwSignal<SessionState>,
    draft: &ResourceDraft,
) -> ApiResult<Resource> {
    let payload = encode_body(draft)?;
    dispatch(session, Method::Post, "/api/resources", &[], Some(payload)).await
}

/// Update a resource via `PUT /api/resources/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on validation or auth failure.
pub async fn update_resource(
    session: RwSignal<SessionState>,
    resource_id: &str,
    draft: &ResourceDraft,
) -> ApiResult<MessageResponse> {
    let payload = encode_body(draft)?;
    dispatch(session, Method::Put, &resource_endpoint(resource_id), &[], Some(payload)).await
}

/// Delete a resource via `DELETE /api/resources/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure or when the resource is missing.
pub async fn delete_resource(
    session: RwSignal<SessionState>,
    resource_id: &str,
) -> ApiResult<MessageResponse> {
    dispatch(session, Method::Delete, &resource_endpoint(resource_id), &[], None).await
}

/// List resources awaiting moderation via `GET /api/resources/pending`.
///
/// # Errors
///
/// Returns an [`ApiError`]; non-admin callers get a server rejection.
pub async fn fetch_pending_resources(
    session: RwSignal<SessionState>,
    page: u32,
    size: u32,
) -> ApiResult<SearchPage> {
    let query = [("page", page.max(1).to_string()), ("size", size.to_string())];
    dispatch(session, Method::Get, "/api/resources/pending", &query, None).await
}

/// Approve a pending resource via `POST /api/resources/{id}/approve`.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure or if the resource is not pending.
pub async fn approve_resource(
    session: RwSignal<SessionState>,
    resource_id: &str,
    notes: &str,
) -> ApiResult<ModerationResponse> {
    let payload = serde_json::json!({ "admin_notes": notes });
    dispatch(session, Method::Post, &approve_endpoint(resource_id), &[], Some(payload)).await
}

/// Reject a pending resource via `POST /api/resources/{id}/reject`.
///
/// The server requires non-empty `admin_notes` for rejections; the review
/// dialog enforces this before calling.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure or missing notes.
pub async fn reject_resource(
    session: RwSignal<SessionState>,
    resource_id: &str,
    notes: &str,
) -> ApiResult<ModerationResponse> {
    let payload = serde_json::json!({ "admin_notes": notes });
    dispatch(session, Method::Post, &reject_endpoint(resource_id), &[], Some(payload)).await
}

/// Fetch the signed-in user's bookmarks via `GET /api/bookmarks`.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure.
pub async fn fetch_bookmarks(session: RwSignal<SessionState>) -> ApiResult<BookmarksResponse> {
    dispatch(session, Method::Get, "/api/bookmarks", &[], None).await
}

/// Bookmark a resource via `POST /api/bookmarks/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure.
pub async fn add_bookmark(
    session: RwSignal<SessionState>,
    resource_id: &str,
) -> ApiResult<MessageResponse> {
    dispatch(session, Method::Post, &bookmark_endpoint(resource_id), &[], None).await
}

/// Remove a bookmark via `DELETE /api/bookmarks/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure.
pub async fn remove_bookmark(
    session: RwSignal<SessionState>,
    resource_id: &str,
) -> ApiResult<MessageResponse> {
    dispatch(session, Method::Delete, &bookmark_endpoint(resource_id), &[], None).await
}

/// Send a message to the study assistant via `POST /api/chat`.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure or assistant backend errors.
pub async fn send_chat_message(session: RwSignal<SessionState>, message: &str) -> ApiResult<ChatReply> {
    let payload = serde_json::json!({ "message": message });
    dispatch(session, Method::Post, "/api/chat", &[], Some(payload)).await
}

/// Clear the server-side chat context via `POST /api/chat/clear`.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure.
pub async fn clear_chat_history(session: RwSignal<SessionState>) -> ApiResult<MessageResponse> {
    dispatch(session, Method::Post, "/api/chat/clear", &[], None).await
}

/// List accounts via `GET /api/admin/users`.
///
/// # Errors
///
/// Returns an [`ApiError`]; non-admin callers get a server rejection.
pub async fn fetch_admin_users(
    session: RwSignal<SessionState>,
    page: u32,
    size: u32,
) -> ApiResult<UserPage> {
    let query = [("page", page.max(1).to_string()), ("size", size.to_string())];
    dispatch(session, Method::Get, "/api/admin/users", &query, None).await
}

/// Change an account's role via `PUT /api/admin/users/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure.
pub async fn update_admin_user(
    session: RwSignal<SessionState>,
    user_id: &str,
    role: Role,
) -> ApiResult<MessageResponse> {
    let payload = serde_json::json!({ "role": role });
    dispatch(session, Method::Put, &admin_user_endpoint(user_id), &[], Some(payload)).await
}

/// Delete an account via `DELETE /api/admin/users/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on auth failure.
pub async fn delete_admin_user(
    session: RwSignal<SessionState>,
    user_id: &str,
) -> ApiResult<MessageResponse> {
    dispatch(session, Method::Delete, &admin_user_endpoint(user_id), &[], None).await
}

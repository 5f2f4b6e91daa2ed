//! Shared wire DTOs for the LearnHub REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads. A few endpoints disagree on
//! envelope field names (`results` vs `resources`, `total_pages` vs `pages`),
//! so the paged types accept both spellings via serde aliases.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role carried in both JWT claims and user payloads.
///
/// The set is closed on purpose: an unrecognized role string fails
/// deserialization rather than silently granting or dropping privileges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address; absent when the user was rebuilt from token claims.
    #[serde(default)]
    pub email: Option<String>,
    /// Account role.
    pub role: Role,
}

/// JWT payload claims the client relies on.
///
/// Unknown payload fields (`iat`, `aud`, ...) are ignored; the four fields
/// below are required and type-checked, so a malformed token is rejected as a
/// whole instead of producing a partial identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id the token was issued for.
    pub sub: String,
    /// Display name snapshot at issue time.
    pub name: String,
    /// Role snapshot at issue time.
    pub role: Role,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Whether the token is expired at `now_secs`. The boundary is strict:
    /// a token whose `exp` equals the current second is already dead.
    #[must_use]
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.exp <= now_secs
    }

    /// Rebuild a displayable [`User`] from the claims alone.
    #[must_use]
    pub fn to_user(&self) -> User {
        User {
            id: self.sub.clone(),
            name: self.name.clone(),
            email: None,
            role: self.role,
        }
    }
}

/// Moderation status of a submitted resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Pending,
    Approved,
    Rejected,
}

/// A learning resource as indexed by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Canonical link to the resource.
    pub url: String,
    /// Short summary shown on cards.
    #[serde(default)]
    pub description: String,
    /// Category slug (see [`CATEGORIES`]).
    #[serde(default)]
    pub category: String,
    /// Display type label (e.g. `"Tutorial"`, `"Research Paper"`).
    #[serde(default)]
    pub resource_type: Option<String>,
    /// Free-form lowercase tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Author or maintainer name, if known.
    #[serde(default)]
    pub author: Option<String>,
    /// ISO 8601 publication date, if known.
    #[serde(default)]
    pub publication_date: Option<String>,
    /// Star count for GitHub-hosted resources.
    #[serde(default)]
    pub github_stars: Option<i64>,
    /// Suggested difficulty (e.g. `"beginner"`).
    #[serde(default)]
    pub difficulty_level: Option<String>,
    /// User id of the submitter, if tracked.
    #[serde(default)]
    pub submitted_by: Option<String>,
    /// Moderation status; only present on authenticated views.
    #[serde(default)]
    pub status: Option<ResourceStatus>,
    /// Moderator notes attached on approve/reject.
    #[serde(default)]
    pub admin_notes: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Fields a user supplies when submitting or editing a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One page of search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default, alias = "resources")]
    pub results: Vec<Resource>,
    /// Total matching resources across all pages.
    #[serde(default)]
    pub total: u64,
    /// 1-based page number this payload covers.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Requested page size.
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default, alias = "pages")]
    pub total_pages: u32,
}

impl SearchPage {
    /// Page count, preferring the server-reported value and falling back to
    /// `ceil(total / size)` when the envelope omits it.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        computed_page_count(self.total, self.size, self.total_pages)
    }
}

/// One page of the admin user listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<AdminUser>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default, alias = "pages")]
    pub total_pages: u32,
}

impl UserPage {
    #[must_use]
    pub fn page_count(&self) -> u32 {
        computed_page_count(self.total, self.size, self.total_pages)
    }
}

/// A row in the admin user listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Successful login payload: a fresh token plus the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Successful registration payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
}

/// Profile update payload; unset fields are left unchanged server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Profile update response with the refreshed user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
}

/// Bookmark listing envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarksResponse {
    #[serde(default)]
    pub bookmarks: Vec<Resource>,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Approve/reject acknowledgement naming the affected resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModerationResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resource_id: String,
}

/// Assistant reply: markdown text plus suggested resources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// Category slugs the server accepts for submissions and search filters.
pub const CATEGORIES: [&str; 7] = [
    "tutorial",
    "research_paper",
    "github_repository",
    "course",
    "book",
    "video",
    "blog_post",
];

/// Display type labels used by the search `type` filter.
pub const RESOURCE_TYPES: [&str; 9] = [
    "Tutorial",
    "Research Paper",
    "GitHub Repository",
    "Documentation",
    "Course",
    "Blog Post",
    "Book",
    "Video",
    "Tool",
];

/// Title-case a category slug for display: `"research_paper"` -> `"Research Paper"`.
#[must_use]
pub fn category_label(category: &str) -> String {
    category
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

fn computed_page_count(total: u64, size: u32, reported: u32) -> u32 {
    if reported > 0 {
        return reported;
    }
    if size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

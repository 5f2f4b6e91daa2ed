use super::*;
use serde_json::json;

// =============================================================
// Role
// =============================================================

#[test]
fn role_deserializes_lowercase_strings() {
    assert_eq!(serde_json::from_value::<Role>(json!("user")).ok(), Some(Role::User));
    assert_eq!(serde_json::from_value::<Role>(json!("admin")).ok(), Some(Role::Admin));
}

#[test]
fn role_rejects_unknown_strings() {
    assert!(serde_json::from_value::<Role>(json!("owner")).is_err());
    assert!(serde_json::from_value::<Role>(json!("Admin")).is_err());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Admin).ok(), Some(json!("admin")));
}

#[test]
fn role_helpers() {
    assert!(Role::Admin.is_admin());
    assert!(!Role::User.is_admin());
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Admin.as_str(), "admin");
}

// =============================================================
// Resource
// =============================================================

#[test]
fn resource_minimal_json_fills_defaults() {
    let resource: Resource = serde_json::from_value(json!({
        "id": "r1",
        "title": "Intro to Rust",
        "url": "https://example.com/rust"
    }))
    .unwrap();

    assert_eq!(resource.id, "r1");
    assert_eq!(resource.description, "");
    assert_eq!(resource.category, "");
    assert!(resource.resource_type.is_none());
    assert!(resource.tags.is_empty());
    assert!(resource.status.is_none());
    assert!(resource.github_stars.is_none());
}

#[test]
fn resource_full_json_parses() {
    let resource: Resource = serde_json::from_value(json!({
        "id": "r2",
        "title": "Tokio Guide",
        "url": "https://example.com/tokio",
        "description": "Async runtime walkthrough",
        "category": "tutorial",
        "resource_type": "Tutorial",
        "tags": ["rust", "async"],
        "author": "Jane",
        "publication_date": "2024-02-01",
        "github_stars": 1200,
        "status": "approved",
        "admin_notes": "looks good"
    }))
    .unwrap();

    assert_eq!(resource.status, Some(ResourceStatus::Approved));
    assert_eq!(resource.tags, vec!["rust".to_owned(), "async".to_owned()]);
    assert_eq!(resource.github_stars, Some(1200));
}

#[test]
fn resource_rejects_unknown_status() {
    let result = serde_json::from_value::<Resource>(json!({
        "id": "r3",
        "title": "X",
        "url": "https://example.com",
        "status": "archived"
    }));
    assert!(result.is_err());
}

// =============================================================
// SearchPage / UserPage envelopes
// =============================================================

#[test]
fn search_page_accepts_results_key() {
    let page: SearchPage = serde_json::from_value(json!({
        "results": [{"id": "r1", "title": "A", "url": "https://a"}],
        "total": 1,
        "page": 1,
        "size": 10,
        "total_pages": 1
    }))
    .unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn search_page_accepts_resources_and_pages_aliases() {
    let page: SearchPage = serde_json::from_value(json!({
        "resources": [{"id": "r1", "title": "A", "url": "https://a"}],
        "total": 21,
        "page": 2,
        "size": 10,
        "pages": 3
    }))
    .unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn search_page_defaults_when_envelope_is_sparse() {
    let page: SearchPage = serde_json::from_value(json!({})).unwrap();
    assert!(page.results.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.page, 1);
    assert_eq!(page.size, 10);
    assert_eq!(page.total_pages, 0);
}

#[test]
fn page_count_prefers_reported_value() {
    let page: SearchPage = serde_json::from_value(json!({
        "total": 100, "size": 10, "pages": 7
    }))
    .unwrap();
    assert_eq!(page.page_count(), 7);
}

#[test]
fn page_count_computes_from_total_and_size() {
    let page: SearchPage = serde_json::from_value(json!({
        "total": 25, "size": 10
    }))
    .unwrap();
    assert_eq!(page.page_count(), 3);
}

#[test]
fn page_count_is_at_least_one() {
    let empty: SearchPage = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty.page_count(), 1);

    let zero_size: SearchPage = serde_json::from_value(json!({
        "total": 40, "size": 0
    }))
    .unwrap();
    assert_eq!(zero_size.page_count(), 1);
}

#[test]
fn user_page_parses_with_pages_alias() {
    let page: UserPage = serde_json::from_value(json!({
        "users": [{"id": "u1", "name": "Ada", "email": "ada@example.com", "role": "admin"}],
        "total": 11,
        "page": 1,
        "size": 10,
        "pages": 2
    }))
    .unwrap();
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.users[0].role, Role::Admin);
    assert_eq!(page.page_count(), 2);
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_response_parses() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "token": "a.b.c",
        "user": {"id": "u1", "email": "ada@example.com", "name": "Ada", "role": "user"}
    }))
    .unwrap();
    assert_eq!(resp.token, "a.b.c");
    assert_eq!(resp.user.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn register_response_parses() {
    let resp: RegisterResponse = serde_json::from_value(json!({
        "message": "User registered successfully",
        "user": {"id": "u2", "email": "bob@example.com", "name": "Bob", "role": "user"}
    }))
    .unwrap();
    assert_eq!(resp.user.name, "Bob");
    assert!(!resp.message.is_empty());
}

#[test]
fn profile_update_skips_unset_fields() {
    let update = ProfileUpdate {
        name: Some("Ada".to_owned()),
        email: Some("ada@example.com".to_owned()),
        password: None,
    };
    let value = serde_json::to_value(&update).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("name"));
    assert!(!object.contains_key("password"));
}

// =============================================================
// Misc envelopes
// =============================================================

#[test]
fn bookmarks_response_defaults_to_empty() {
    let resp: BookmarksResponse = serde_json::from_value(json!({})).unwrap();
    assert!(resp.bookmarks.is_empty());
}

#[test]
fn chat_reply_defaults_to_no_resources() {
    let reply: ChatReply = serde_json::from_value(json!({
        "message": "Here are some picks"
    }))
    .unwrap();
    assert!(reply.resources.is_empty());
}

#[test]
fn moderation_response_parses() {
    let resp: ModerationResponse = serde_json::from_value(json!({
        "message": "Resource approved successfully",
        "resource_id": "r9"
    }))
    .unwrap();
    assert_eq!(resp.resource_id, "r9");
}

#[test]
fn resource_draft_serializes_all_fields() {
    let draft = ResourceDraft {
        title: "Guide".to_owned(),
        url: "https://example.com".to_owned(),
        description: "A guide".to_owned(),
        category: "tutorial".to_owned(),
        tags: vec!["rust".to_owned()],
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["category"], json!("tutorial"));
    assert_eq!(value["tags"], json!(["rust"]));
}

// =============================================================
// Claims
// =============================================================

#[test]
fn claims_to_user_maps_subject_to_id() {
    let claims = Claims {
        sub: "u7".to_owned(),
        name: "Grace".to_owned(),
        role: Role::Admin,
        exp: 2_000_000_000,
    };
    let user = claims.to_user();
    assert_eq!(user.id, "u7");
    assert_eq!(user.name, "Grace");
    assert_eq!(user.role, Role::Admin);
    assert!(user.email.is_none());
}

#[test]
fn claims_expiry_boundary_is_strict() {
    let claims = Claims {
        sub: "u1".to_owned(),
        name: "Ada".to_owned(),
        role: Role::User,
        exp: 1_000,
    };
    assert!(claims.is_expired_at(1_000));
    assert!(claims.is_expired_at(1_001));
    assert!(!claims.is_expired_at(999));
}

// =============================================================
// Vocabulary helpers
// =============================================================

#[test]
fn category_label_title_cases_slugs() {
    assert_eq!(category_label("tutorial"), "Tutorial");
    assert_eq!(category_label("research_paper"), "Research Paper");
    assert_eq!(category_label("github_repository"), "Github Repository");
}

#[test]
fn category_label_handles_empty_input() {
    assert_eq!(category_label(""), "");
}

#[test]
fn category_vocabulary_is_nonempty() {
    assert_eq!(CATEGORIES.len(), 7);
    assert!(CATEGORIES.contains(&"tutorial"));
    assert_eq!(RESOURCE_TYPES.len(), 9);
    assert!(RESOURCE_TYPES.contains(&"Research Paper"));
}

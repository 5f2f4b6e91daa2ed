use super::*;

fn resource(value: serde_json::Value) -> Resource {
    serde_json::from_value(value).unwrap()
}

// =====================================================================
// Type colors
// =====================================================================

#[test]
fn known_types_get_their_brand_color() {
    assert_eq!(resource_type_color("Tutorial"), "#4CAF50");
    assert_eq!(resource_type_color("Research Paper"), "#2196F3");
    assert_eq!(resource_type_color("GitHub Repository"), "#9C27B0");
    assert_eq!(resource_type_color("Course"), "#FF9800");
    assert_eq!(resource_type_color("Blog Post"), "#F44336");
    assert_eq!(resource_type_color("Documentation"), "#607D8B");
    assert_eq!(resource_type_color("Video"), "#E91E63");
    assert_eq!(resource_type_color("Book"), "#795548");
    assert_eq!(resource_type_color("Tool"), "#00BCD4");
}

#[test]
fn unknown_types_fall_back_to_grey() {
    assert_eq!(resource_type_color("Podcast"), "#757575");
    assert_eq!(resource_type_color(""), "#757575");
}

// =====================================================================
// Metadata line
// =====================================================================

#[test]
fn meta_line_joins_author_date_and_stars() {
    let resource = resource(serde_json::json!({
        "id": "r1",
        "title": "tokio",
        "url": "https://github.com/tokio-rs/tokio",
        "author": "tokio-rs",
        "publication_date": "2024-03-01",
        "github_stars": 26000,
    }));
    assert_eq!(
        meta_line(&resource).as_deref(),
        Some("By tokio-rs · 2024-03-01 · ★ 26000")
    );
}

#[test]
fn meta_line_skips_unknown_fields() {
    let resource = resource(serde_json::json!({
        "id": "r1",
        "title": "Some post",
        "url": "https://example.com",
        "publication_date": "2023-11-20",
    }));
    assert_eq!(meta_line(&resource).as_deref(), Some("2023-11-20"));
}

#[test]
fn meta_line_is_absent_when_nothing_is_known() {
    let resource = resource(serde_json::json!({
        "id": "r1",
        "title": "Bare",
        "url": "https://example.com",
    }));
    assert_eq!(meta_line(&resource), None);
}

#[test]
fn meta_line_ignores_empty_strings() {
    let resource = resource(serde_json::json!({
        "id": "r1",
        "title": "Bare",
        "url": "https://example.com",
        "author": "",
        "publication_date": "",
        "github_stars": 5,
    }));
    assert_eq!(meta_line(&resource).as_deref(), Some("★ 5"));
}

// =====================================================================
// Status labels
// =====================================================================

#[test]
fn status_labels_are_reader_friendly() {
    assert_eq!(status_label(ResourceStatus::Pending), "Pending review");
    assert_eq!(status_label(ResourceStatus::Approved), "Approved");
    assert_eq!(status_label(ResourceStatus::Rejected), "Rejected");
}

use super::*;

// =====================================================================
// Error display
// =====================================================================

#[test]
fn auth_required_renders_login_prompt() {
    assert_eq!(
        ApiError::AuthRequired.to_string(),
        "Your session has expired. Please login again."
    );
}

#[test]
fn server_error_renders_its_message() {
    let err = ApiError::Server {
        status: 422,
        message: "Title is required".to_owned(),
    };
    assert_eq!(err.to_string(), "Title is required");
}

#[test]
fn transport_error_hides_the_underlying_cause() {
    let err = ApiError::Transport("NetworkError when attempting to fetch".to_owned());
    assert_eq!(
        err.to_string(),
        "Failed to connect to the server. Please try again later."
    );
}

// =====================================================================
// Failure body parsing
// =====================================================================

#[test]
fn failure_message_prefers_error_field() {
    let body = r#"{"error":"Email already registered"}"#;
    assert_eq!(failure_message(409, body), "Email already registered");
}

#[test]
fn failure_message_falls_back_on_non_json_bodies() {
    assert_eq!(
        failure_message(502, "<html>Bad Gateway</html>"),
        "Request failed with status 502"
    );
}

#[test]
fn failure_message_falls_back_when_error_field_is_missing() {
    assert_eq!(
        failure_message(500, r#"{"detail":"boom"}"#),
        "Request failed with status 500"
    );
}

#[test]
fn failure_message_falls_back_when_error_field_is_not_a_string() {
    assert_eq!(
        failure_message(500, r#"{"error":{"code":7}}"#),
        "Request failed with status 500"
    );
}

// =====================================================================
// Request body encoding
// =====================================================================

struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::Error;
        Err(S::Error::custom("not representable"))
    }
}

#[test]
fn body_encoding_failures_are_not_transport_errors() {
    let err = encode_body(&Unencodable).unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 0);
            assert!(message.starts_with("Unexpected request payload"));
        }
        other => panic!("expected a server-class error, got {other:?}"),
    }
}

#[test]
fn well_formed_bodies_encode_without_unset_fields() {
    let update = ProfileUpdate {
        name: Some("Ada".to_owned()),
        email: None,
        password: None,
    };
    assert_eq!(
        encode_body(&update).unwrap(),
        serde_json::json!({ "name": "Ada" })
    );
}

// =====================================================================
// URL construction
// =====================================================================

#[test]
fn request_url_without_query_is_the_bare_path() {
    assert_eq!(request_url("/api/bookmarks", &[]), "/api/bookmarks");
}

#[test]
fn request_url_appends_encoded_query() {
    let query = [("query", "rust async".to_owned()), ("page", "2".to_owned())];
    assert_eq!(
        request_url("/api/search", &query),
        "/api/search?query=rust%20async&page=2"
    );
}

#[test]
fn encode_query_escapes_reserved_characters() {
    let query = [("query", "c++ & rust?".to_owned())];
    assert_eq!(encode_query(&query), "query=c%2B%2B%20%26%20rust%3F");
}

#[test]
fn endpoint_builders_interpolate_ids() {
    assert_eq!(resource_endpoint("abc-123"), "/api/resources/abc-123");
    assert_eq!(approve_endpoint("abc-123"), "/api/resources/abc-123/approve");
    assert_eq!(reject_endpoint("abc-123"), "/api/resources/abc-123/reject");
    assert_eq!(bookmark_endpoint("abc-123"), "/api/bookmarks/abc-123");
    assert_eq!(admin_user_endpoint("u-9"), "/api/admin/users/u-9");
}

// =====================================================================
// Search parameters
// =====================================================================

#[test]
fn default_search_covers_page_one() {
    let params = SearchParams::default();
    assert_eq!(
        params.to_query(),
        vec![
            ("query", String::new()),
            ("page", "1".to_owned()),
            ("size", "10".to_owned()),
        ]
    );
}

#[test]
fn filters_appear_only_when_set() {
    let params = SearchParams {
        query: "ownership".to_owned(),
        category: Some("tutorial".to_owned()),
        resource_type: Some("video".to_owned()),
        tags: vec!["rust".to_owned(), "beginner".to_owned()],
        page: 3,
        size: 10,
    };
    assert_eq!(
        params.to_query(),
        vec![
            ("query", "ownership".to_owned()),
            ("category", "tutorial".to_owned()),
            ("type", "video".to_owned()),
            ("tags", "rust,beginner".to_owned()),
            ("page", "3".to_owned()),
            ("size", "10".to_owned()),
        ]
    );
}

#[test]
fn empty_string_filters_are_treated_as_unset() {
    let params = SearchParams {
        category: Some(String::new()),
        resource_type: Some(String::new()),
        ..SearchParams::default()
    };
    let pairs = params.to_query();
    assert!(pairs.iter().all(|(key, _)| *key != "category" && *key != "type"));
}

#[test]
fn page_zero_is_clamped_to_one() {
    let params = SearchParams {
        page: 0,
        ..SearchParams::default()
    };
    assert!(params.to_query().contains(&("page", "1".to_owned())));
}

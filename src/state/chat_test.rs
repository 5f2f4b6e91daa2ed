use super::*;
use crate::net::types::Resource;

fn resource(title: &str) -> Resource {
    serde_json::from_value(serde_json::json!({
        "id": "r1",
        "title": title,
        "url": "https://example.com",
    }))
    .unwrap()
}

#[test]
fn new_transcript_is_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.is_empty());
    assert!(!state.pending);
}

#[test]
fn sending_appends_user_message_and_marks_pending() {
    let mut state = ChatState::default();
    state.push_user_message("What is ownership?".to_owned());

    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].author, ChatAuthor::User);
    assert_eq!(state.messages[0].body, "What is ownership?");
    assert!(state.messages[0].resources.is_empty());
    assert!(state.pending);
}

#[test]
fn reply_appends_assistant_message_and_settles() {
    let mut state = ChatState::default();
    state.push_user_message("Any borrow checker tutorials?".to_owned());
    state.push_assistant_message(
        "Try these:".to_owned(),
        vec![resource("The Rust Book, chapter 4")],
    );

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].author, ChatAuthor::Assistant);
    assert_eq!(state.messages[1].resources.len(), 1);
    assert!(!state.pending);
}

#[test]
fn settle_without_reply_unblocks_the_composer() {
    let mut state = ChatState::default();
    state.push_user_message("hello".to_owned());
    state.settle();

    assert_eq!(state.messages.len(), 1);
    assert!(!state.pending);
}

#[test]
fn clear_drops_transcript_and_pending_flag() {
    let mut state = ChatState::default();
    state.push_user_message("hello".to_owned());
    state.push_assistant_message("hi".to_owned(), Vec::new());
    state.push_user_message("more".to_owned());
    state.clear();

    assert!(state.is_empty());
    assert!(!state.pending);
}

#[test]
fn message_ids_are_unique_render_keys() {
    let mut state = ChatState::default();
    state.push_user_message("a".to_owned());
    state.push_assistant_message("b".to_owned(), Vec::new());
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

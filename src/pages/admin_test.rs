use super::*;

// =====================================================================
// Review notes
// =====================================================================

#[test]
fn approvals_do_not_require_notes() {
    assert!(review_notes_ok(ReviewAction::Approve, ""));
    assert!(review_notes_ok(ReviewAction::Approve, "solid writeup"));
}

#[test]
fn rejections_require_notes() {
    assert!(!review_notes_ok(ReviewAction::Reject, ""));
    assert!(review_notes_ok(ReviewAction::Reject, "link is dead"));
}

#[test]
fn whitespace_only_notes_do_not_count() {
    assert!(!review_notes_ok(ReviewAction::Reject, "   \n\t"));
}

// =====================================================================
// Page bookkeeping after removals
// =====================================================================

#[test]
fn stays_on_a_page_that_still_has_rows() {
    assert_eq!(page_after_removal(3, 4), 3);
}

#[test]
fn steps_back_when_a_page_empties() {
    assert_eq!(page_after_removal(3, 0), 2);
}

#[test]
fn never_steps_back_past_the_first_page() {
    assert_eq!(page_after_removal(1, 0), 1);
}

// =====================================================================
// Tabs
// =====================================================================

#[test]
fn submissions_tab_is_the_default() {
    assert_eq!(AdminTab::default(), AdminTab::Submissions);
}

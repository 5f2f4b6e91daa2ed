use super::*;

// =====================================================================
// Previous
// =====================================================================

#[test]
fn previous_steps_back_one_page() {
    assert_eq!(previous_page(2), Some(1));
    assert_eq!(previous_page(7), Some(6));
}

#[test]
fn previous_stops_at_the_first_page() {
    assert_eq!(previous_page(1), None);
    assert_eq!(previous_page(0), None);
}

// =====================================================================
// Next
// =====================================================================

#[test]
fn next_steps_forward_one_page() {
    assert_eq!(next_page(1, 3), Some(2));
    assert_eq!(next_page(2, 3), Some(3));
}

#[test]
fn next_stops_at_the_last_page() {
    assert_eq!(next_page(3, 3), None);
    assert_eq!(next_page(4, 3), None);
}

#[test]
fn single_or_empty_lists_never_page() {
    assert_eq!(next_page(1, 1), None);
    assert_eq!(next_page(1, 0), None);
    assert_eq!(previous_page(1), None);
}

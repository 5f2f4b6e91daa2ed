#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_dark_preference_is_false_in_non_hydrate_tests() {
    assert!(!load_dark_preference());
}

#[test]
fn toggle_dark_flips_boolean_value() {
    assert!(toggle_dark(false));
    assert!(!toggle_dark(true));
}

#[test]
fn apply_dark_is_noop_but_callable() {
    apply_dark(false);
    apply_dark(true);
}

use super::*;

#[test]
fn accepts_a_complete_form_and_trims_identity_fields() {
    assert_eq!(
        validate_register_input("  Ada  ", " ada@example.com ", "secret1", "secret1"),
        Ok((
            "Ada".to_owned(),
            "ada@example.com".to_owned(),
            "secret1".to_owned()
        ))
    );
}

#[test]
fn requires_name_first() {
    assert_eq!(
        validate_register_input("   ", "ada@example.com", "secret1", "secret1"),
        Err("Enter your name.")
    );
}

#[test]
fn requires_email() {
    assert_eq!(
        validate_register_input("Ada", "  ", "secret1", "secret1"),
        Err("Enter your email address.")
    );
}

#[test]
fn rejects_short_passwords() {
    assert_eq!(
        validate_register_input("Ada", "ada@example.com", "12345", "12345"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn rejects_mismatched_passwords() {
    assert_eq!(
        validate_register_input("Ada", "ada@example.com", "secret1", "secret2"),
        Err("Passwords do not match.")
    );
}

#[test]
fn password_is_not_trimmed_before_comparison() {
    assert_eq!(
        validate_register_input("Ada", "ada@example.com", "secret1 ", "secret1"),
        Err("Passwords do not match.")
    );
}

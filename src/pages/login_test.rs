use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter your email address.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter your password.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Leading whitespace can be a legitimate password character.
    assert_eq!(
        validate_login_input("user@example.com", "  spaced  "),
        Ok(("user@example.com".to_owned(), "  spaced  ".to_owned()))
    );
}

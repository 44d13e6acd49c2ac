use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_plausible_email() {
    assert_eq!(validate_login_input("", "pw"), Err("Enter a valid email address."));
    assert_eq!(validate_login_input("not-an-email", "pw"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("user@example.com", ""), Err("Enter your password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords are never trimmed; leading/trailing spaces may be real.
    assert_eq!(
        validate_login_input("user@example.com", "  spaced  "),
        Ok(("user@example.com".to_owned(), "  spaced  ".to_owned()))
    );
}

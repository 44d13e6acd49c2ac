use super::*;

#[test]
fn valid_registration_passes_through() {
    assert_eq!(
        validate_register_input(" Ana Lai ", "ana@example.com", "longenough"),
        Ok(("Ana Lai".to_owned(), "ana@example.com".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn name_is_required() {
    assert_eq!(validate_register_input("   ", "a@b.com", "longenough"), Err("Enter your name."));
}

#[test]
fn email_must_be_plausible() {
    assert_eq!(
        validate_register_input("Ana", "nope", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn password_minimum_length_enforced() {
    assert_eq!(
        validate_register_input("Ana", "a@b.com", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert!(validate_register_input("Ana", "a@b.com", "12345678").is_ok());
}

#[test]
fn account_role_defaults_to_tourist() {
    assert_eq!(account_role("guide"), Role::Guide);
    assert_eq!(account_role("tourist"), Role::Tourist);
    assert_eq!(account_role("admin"), Role::Tourist);
    assert_eq!(account_role(""), Role::Tourist);
}

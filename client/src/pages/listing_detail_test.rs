use super::*;

#[test]
fn valid_input_returns_cleaned_values() {
    assert_eq!(
        validate_booking_input(" 2026-09-12 ", " 4 "),
        Ok(("2026-09-12".to_owned(), 4))
    );
}

#[test]
fn date_must_be_iso_shaped() {
    assert_eq!(validate_booking_input("", "2"), Err("Pick a tour date."));
    assert_eq!(validate_booking_input("12/09/2026", "2"), Err("Pick a tour date."));
    assert_eq!(validate_booking_input("2026-9-12", "2"), Err("Pick a tour date."));
    assert_eq!(validate_booking_input("2026-09-1x", "2"), Err("Pick a tour date."));
}

#[test]
fn party_size_must_be_numeric() {
    assert_eq!(
        validate_booking_input("2026-09-12", "a few"),
        Err("Party size must be a number.")
    );
    assert_eq!(
        validate_booking_input("2026-09-12", ""),
        Err("Party size must be a number.")
    );
}

#[test]
fn party_size_must_be_within_bounds() {
    assert_eq!(
        validate_booking_input("2026-09-12", "0"),
        Err("Party size must be between 1 and 20.")
    );
    assert_eq!(
        validate_booking_input("2026-09-12", "21"),
        Err("Party size must be between 1 and 20.")
    );
    assert!(validate_booking_input("2026-09-12", "20").is_ok());
}

use super::*;

#[test]
fn split_tags_trims_and_drops_empties() {
    assert_eq!(split_tags("Food, History , ,Nightlife"), vec!["Food", "History", "Nightlife"]);
    assert!(split_tags("").is_empty());
    assert!(split_tags(" , ,").is_empty());
}

#[test]
fn validate_listing_input_happy_path() {
    let input = validate_listing_input(
        " Old Town Walk ",
        " Lisbon ",
        " Three hours on foot. ",
        "95",
        "English, Portuguese",
        "History",
    )
    .expect("valid");
    assert_eq!(input.title, "Old Town Walk");
    assert_eq!(input.destination, "Lisbon");
    assert_eq!(input.description, "Three hours on foot.");
    assert_eq!(input.daily_rate, 95.0);
    assert_eq!(input.languages, vec!["English", "Portuguese"]);
    assert_eq!(input.expertise, vec!["History"]);
}

#[test]
fn validate_listing_input_requires_title_and_destination() {
    assert_eq!(
        validate_listing_input("", "Lisbon", "", "95", "", ""),
        Err("Give the tour a title.")
    );
    assert_eq!(
        validate_listing_input("Walk", "  ", "", "95", "", ""),
        Err("Name the destination.")
    );
}

#[test]
fn validate_listing_input_checks_rate() {
    assert_eq!(
        validate_listing_input("Walk", "Lisbon", "", "free", "", ""),
        Err("Daily rate must be a number.")
    );
    assert_eq!(
        validate_listing_input("Walk", "Lisbon", "", "0", "", ""),
        Err("Daily rate must be positive.")
    );
    assert_eq!(
        validate_listing_input("Walk", "Lisbon", "", "-5", "", ""),
        Err("Daily rate must be positive.")
    );
}

#[test]
fn toggled_status_flips_active_and_inactive_only() {
    assert_eq!(toggled_status(ListingStatus::Active), Some(ListingStatus::Inactive));
    assert_eq!(toggled_status(ListingStatus::Inactive), Some(ListingStatus::Active));
    assert_eq!(toggled_status(ListingStatus::Suspended), None);
    assert_eq!(toggled_status(ListingStatus::Unknown), None);
}

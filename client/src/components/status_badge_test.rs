use super::*;

#[test]
fn booking_badge_classes_are_distinct_per_status() {
    let classes = [
        booking_badge_class(BookingStatus::Pending),
        booking_badge_class(BookingStatus::Confirmed),
        booking_badge_class(BookingStatus::Declined),
        booking_badge_class(BookingStatus::Cancelled),
        booking_badge_class(BookingStatus::Completed),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn unknown_statuses_get_the_plain_badge() {
    assert_eq!(booking_badge_class(BookingStatus::Unknown), "badge");
    assert_eq!(listing_badge_class(ListingStatus::Unknown), "badge");
}

#[test]
fn listing_badge_reuses_booking_palette() {
    assert_eq!(listing_badge_class(ListingStatus::Active), "badge badge--confirmed");
    assert_eq!(listing_badge_class(ListingStatus::Suspended), "badge badge--declined");
}

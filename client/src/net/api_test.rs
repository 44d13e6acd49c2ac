use super::*;

#[test]
fn listing_search_endpoint_appends_query() {
    let query = ListingQuery { destination: "Kyoto".to_owned(), ..ListingQuery::default() };
    assert_eq!(listing_search_endpoint(&query), "/api/listing?destination=Kyoto");
    assert_eq!(listing_search_endpoint(&ListingQuery::default()), "/api/listing");
}

#[test]
fn listing_endpoints_format_expected_paths() {
    assert_eq!(listing_endpoint("l42"), "/api/listing/l42");
    assert_eq!(listing_status_endpoint("l42"), "/api/listing/l42/status");
    assert_eq!(all_listings_endpoint(None), "/api/listing/all");
    assert_eq!(
        all_listings_endpoint(Some(ListingStatus::Suspended)),
        "/api/listing/all?status=SUSPENDED"
    );
}

#[test]
fn booking_endpoints_format_expected_paths() {
    assert_eq!(booking_endpoint("b7"), "/api/booking/b7");
    assert_eq!(booking_status_endpoint("b7"), "/api/booking/b7/status");
    assert_eq!(all_bookings_endpoint(None), "/api/booking/all");
    assert_eq!(
        all_bookings_endpoint(Some(BookingStatus::Pending)),
        "/api/booking/all?status=PENDING"
    );
}

#[test]
fn user_endpoints_format_expected_paths() {
    assert_eq!(users_endpoint(None), "/api/user");
    assert_eq!(users_endpoint(Some(Role::Guide)), "/api/user?role=GUIDE");
    assert_eq!(user_ban_endpoint("u3"), "/api/user/u3/ban");
    assert_eq!(user_endpoint("u3"), "/api/user/u3");
}

#[test]
fn wishlist_endpoint_formats_expected_path() {
    assert_eq!(wishlist_item_endpoint("w9"), "/api/wishlist/w9");
}

// =============================================================================
// envelope_error_status — success:false mapping
// =============================================================================

#[test]
fn envelope_error_status_prefers_envelope_code() {
    assert_eq!(envelope_error_status(401), 401);
    assert_eq!(envelope_error_status(503), 503);
}

#[test]
fn envelope_error_status_defaults_when_backend_omits_code() {
    assert_eq!(envelope_error_status(0), 400);
}

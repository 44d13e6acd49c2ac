use super::*;

fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "u1",
        "name": "Amara Diop",
        "email": "amara@example.com",
        "role": "GUIDE",
        "profilePicture": null,
        "bio": "Dakar food walks",
        "languages": ["French", "Wolof"],
        "expertise": ["Food"],
        "dailyRate": 120.0
    })
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[test]
fn envelope_success_exposes_data() {
    let envelope: Envelope<SessionUser> = serde_json::from_value(serde_json::json!({
        "success": true,
        "statusCode": 200,
        "message": "ok",
        "data": user_json(),
    }))
    .expect("decode");
    let user = envelope.into_data().expect("data");
    assert_eq!(user.role, Role::Guide);
    assert_eq!(user.daily_rate, Some(120.0));
}

#[test]
fn envelope_failure_discards_data() {
    let envelope: Envelope<SessionUser> = serde_json::from_value(serde_json::json!({
        "success": false,
        "statusCode": 401,
        "message": "unauthorized",
        "data": user_json(),
    }))
    .expect("decode");
    assert!(envelope.into_data().is_none());
}

#[test]
fn envelope_tolerates_missing_optional_fields() {
    let envelope: Envelope<SessionUser> =
        serde_json::from_value(serde_json::json!({ "success": true })).expect("decode");
    assert_eq!(envelope.status_code, 0);
    assert_eq!(envelope.message, "");
    assert!(envelope.into_data().is_none());
}

// =============================================================================
// ENUM WIRE CASING
// =============================================================================

#[test]
fn role_round_trips_screaming_case() {
    assert_eq!(serde_json::to_string(&Role::Tourist).unwrap(), "\"TOURIST\"");
    let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
    assert_eq!(role, Role::Admin);
}

#[test]
fn unrecognized_role_decodes_to_unknown() {
    let role: Role = serde_json::from_str("\"SUPERVISOR\"").unwrap();
    assert_eq!(role, Role::Unknown);
}

#[test]
fn unrecognized_booking_status_decodes_to_unknown() {
    let status: BookingStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
    assert_eq!(status, BookingStatus::Unknown);
}

#[test]
fn status_as_str_matches_wire_spelling() {
    assert_eq!(BookingStatus::Confirmed.as_str(), "CONFIRMED");
    assert_eq!(ListingStatus::Suspended.as_str(), "SUSPENDED");
    assert_eq!(Role::Guide.as_str(), "GUIDE");
}

// =============================================================================
// LISTING QUERY
// =============================================================================

#[test]
fn empty_query_renders_empty_string() {
    assert_eq!(ListingQuery::default().to_query_string(), "");
}

#[test]
fn query_includes_only_set_filters() {
    let query = ListingQuery {
        destination: "Lisbon".to_owned(),
        language: None,
        expertise: Some("Food".to_owned()),
        max_rate: None,
        page: 1,
    };
    assert_eq!(query.to_query_string(), "?destination=Lisbon&expertise=Food");
}

#[test]
fn query_encodes_destination_and_appends_page() {
    let query = ListingQuery {
        destination: "San Sebastián".to_owned(),
        language: Some("Spanish".to_owned()),
        expertise: None,
        max_rate: Some(150.0),
        page: 3,
    };
    assert_eq!(
        query.to_query_string(),
        "?destination=San%20Sebasti%C3%A1n&language=Spanish&maxRate=150&page=3"
    );
}

#[test]
fn query_trims_whitespace_only_destination() {
    let query = ListingQuery { destination: "   ".to_owned(), ..ListingQuery::default() };
    assert_eq!(query.to_query_string(), "");
}

// =============================================================================
// QUERY ENCODING
// =============================================================================

#[test]
fn encode_query_value_passes_unreserved_chars() {
    assert_eq!(encode_query_value("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encode_query_value_escapes_reserved_chars() {
    assert_eq!(
        encode_query_value("/dashboard/tourist/my-trips?page=2"),
        "%2Fdashboard%2Ftourist%2Fmy-trips%3Fpage%3D2"
    );
}

#[test]
fn encode_query_value_escapes_utf8_bytes() {
    assert_eq!(encode_query_value("café"), "caf%C3%A9");
}

// =============================================================================
// PAGE / DEFAULTS
// =============================================================================

#[test]
fn page_decodes_with_missing_fields() {
    let page: Page<ListingSummary> = serde_json::from_value(serde_json::json!({})).expect("decode");
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn booking_decodes_with_minimal_fields() {
    let booking: Booking = serde_json::from_value(serde_json::json!({
        "id": "b1",
        "listingId": "l1",
        "date": "2026-09-12"
    }))
    .expect("decode");
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.party_size, 0);
    assert!(booking.note.is_none());
}

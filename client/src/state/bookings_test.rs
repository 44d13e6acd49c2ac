use super::*;

fn booking(id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_owned(),
        listing_id: "l1".to_owned(),
        listing_title: "Old Town Walk".to_owned(),
        tourist_name: None,
        guide_name: None,
        date: "2026-09-12".to_owned(),
        party_size: 2,
        note: None,
        status,
        total_price: 180.0,
    }
}

#[test]
fn can_cancel_only_before_completion() {
    assert!(can_cancel(BookingStatus::Pending));
    assert!(can_cancel(BookingStatus::Confirmed));
    assert!(!can_cancel(BookingStatus::Declined));
    assert!(!can_cancel(BookingStatus::Cancelled));
    assert!(!can_cancel(BookingStatus::Completed));
    assert!(!can_cancel(BookingStatus::Unknown));
}

#[test]
fn awaiting_decision_is_pending_only() {
    assert!(awaiting_decision(BookingStatus::Pending));
    assert!(!awaiting_decision(BookingStatus::Confirmed));
}

#[test]
fn set_status_flips_row_and_returns_previous() {
    let mut state = BookingsState::default();
    state.replace(vec![booking("b1", BookingStatus::Pending)]);
    let previous = state.set_status("b1", BookingStatus::Confirmed);
    assert_eq!(previous, Some(BookingStatus::Pending));
    assert_eq!(state.items[0].status, BookingStatus::Confirmed);
}

#[test]
fn set_status_unknown_id_is_a_noop() {
    let mut state = BookingsState::default();
    state.replace(vec![booking("b1", BookingStatus::Pending)]);
    assert_eq!(state.set_status("b9", BookingStatus::Confirmed), None);
    assert_eq!(state.items[0].status, BookingStatus::Pending);
}

#[test]
fn rollback_restores_previous_status() {
    // Optimistic flip followed by a failed mutation: the saved previous
    // value undoes the flip.
    let mut state = BookingsState::default();
    state.replace(vec![booking("b1", BookingStatus::Pending)]);
    let previous = state.set_status("b1", BookingStatus::Declined).expect("known id");
    state.set_status("b1", previous);
    assert_eq!(state.items[0].status, BookingStatus::Pending);
}

#[test]
fn reconcile_swaps_in_authoritative_row() {
    let mut state = BookingsState::default();
    state.replace(vec![booking("b1", BookingStatus::Pending)]);
    let mut authoritative = booking("b1", BookingStatus::Confirmed);
    authoritative.total_price = 200.0;
    state.reconcile(authoritative);
    assert_eq!(state.items[0].status, BookingStatus::Confirmed);
    assert_eq!(state.items[0].total_price, 200.0);
}
